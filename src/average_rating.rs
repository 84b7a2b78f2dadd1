use crate::data::Show;
use crate::error::CatalogError;

/// Arithmetic mean of the IMDB ratings across the whole catalog.
pub fn average_rating(shows: &[Show]) -> Result<f64, CatalogError> {
    if shows.is_empty() {
        return Err(CatalogError::EmptyCatalog("no ratings to average"));
    }
    Ok(shows.iter().map(|s| s.imdb_rating).sum::<f64>() / shows.len() as f64)
}
