use crate::data::Show;

/// Names of the comedies, best-rated first.
pub fn comedies_by_rating(shows: &[Show]) -> Vec<String> {
    let mut comedies: Vec<&Show> = shows.iter().filter(|s| s.has_genre("Comedy")).collect();
    comedies.sort_by(|a, b| b.imdb_rating.total_cmp(&a.imdb_rating));
    comedies.into_iter().map(|s| s.name.clone()).collect()
}

#[cfg(test)]
mod test_comedies_by_rating {
    use super::*;
    use crate::data;
    use crate::error::CatalogError;

    #[test]
    fn test_comedies_by_rating() -> Result<(), CatalogError> {
        let shows = data::load_catalog()?;
        assert_eq!(
            comedies_by_rating(&shows),
            [
                "Seinfeld",
                "Friends",
                "Freaks and Geeks",
                "The Simpsons",
                "The Wonder Years",
                "Frasier",
                "Cheers",
                "The Fresh Prince of Bel-Air",
                "Boy Meets World",
                "Will & Grace",
                "Home Improvement",
                "Saved by the Bell",
            ]
        );
        Ok(())
    }
}
