use crate::data::Show;

/// Every Drama except the highest-rated one, best first. Empty when the
/// catalog has at most one drama.
pub fn all_but_best_drama(shows: &[Show]) -> Vec<&Show> {
    let mut ranked: Vec<&Show> = shows.iter().collect();
    ranked.sort_by(|a, b| b.imdb_rating.total_cmp(&a.imdb_rating));
    ranked
        .into_iter()
        .filter(|s| s.has_genre("Drama"))
        .skip(1)
        .collect()
}

#[cfg(test)]
mod test_all_but_best_drama {
    use super::*;
    use crate::data;
    use crate::error::CatalogError;

    #[test]
    fn test_all_but_best_drama() -> Result<(), CatalogError> {
        let shows = data::load_catalog()?;
        let rest = all_but_best_drama(&shows);

        let names: Vec<&str> = rest.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Twin Peaks",
                "Freaks and Geeks",
                "The X-Files",
                "Buffy the Vampire Slayer",
                "The Wonder Years",
                "My So-Called Life",
                "Cheers",
                "Boy Meets World",
                "ER",
                "Law & Order",
                "Dawson's Creek",
                "Baywatch",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_empty_catalog_returns_nothing() {
        assert!(all_but_best_drama(&[]).is_empty());
    }
}
