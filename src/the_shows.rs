use crate::data::Show;

/// Shows whose name starts with the literal prefix `The`, case-sensitive.
pub fn the_shows(shows: &[Show]) -> Vec<&Show> {
    shows.iter().filter(|s| s.name.starts_with("The")).collect()
}

#[cfg(test)]
mod test_the_shows {
    use super::*;
    use crate::data;
    use crate::error::CatalogError;

    #[test]
    fn test_the_shows() -> Result<(), CatalogError> {
        let shows = data::load_catalog()?;
        let the = the_shows(&shows);

        let names: Vec<&str> = the.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "The X-Files",
                "The Simpsons",
                "The Fresh Prince of Bel-Air",
                "The Wonder Years",
                "The Sopranos",
            ]
        );
        Ok(())
    }
}
