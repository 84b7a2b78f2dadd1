use crate::data::Show;
use crate::error::CatalogError;

/// The highest-rated show tagged Drama.
pub fn best_drama(shows: &[Show]) -> Result<&Show, CatalogError> {
    let mut ranked: Vec<&Show> = shows.iter().collect();
    ranked.sort_by(|a, b| b.imdb_rating.total_cmp(&a.imdb_rating));
    ranked
        .into_iter()
        .find(|s| s.has_genre("Drama"))
        .ok_or(CatalogError::EmptyCatalog("no drama in the catalog"))
}

#[cfg(test)]
mod test_best_drama {
    use super::*;
    use crate::data;

    #[test]
    fn test_best_drama() -> Result<(), CatalogError> {
        let shows = data::load_catalog()?;
        assert_eq!(best_drama(&shows)?.name, "The Sopranos");
        Ok(())
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let err = best_drama(&[]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCatalog(_)));
    }

    #[test]
    fn test_no_drama_is_an_error() -> Result<(), CatalogError> {
        let shows = data::load_catalog()?;
        let comedies_only: Vec<Show> = shows
            .iter()
            .filter(|s| !s.has_genre("Drama"))
            .cloned()
            .collect();

        let err = best_drama(&comedies_only).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCatalog(_)));
        Ok(())
    }
}
