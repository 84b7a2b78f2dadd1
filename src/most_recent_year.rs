use crate::data::Show;
use crate::error::CatalogError;

/// The latest year any show aired.
pub fn most_recent_year(shows: &[Show]) -> Result<i32, CatalogError> {
    shows
        .iter()
        .map(|s| s.end_year)
        .max()
        .ok_or(CatalogError::EmptyCatalog("no end years to compare"))
}
