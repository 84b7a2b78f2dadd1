use crate::data::Show;
use crate::error::CatalogError;

/// Ordered by end year, the first show that ended on or after 2000.
pub fn first_ended_after_millennium(shows: &[Show]) -> Result<&Show, CatalogError> {
    let mut by_end: Vec<&Show> = shows.iter().collect();
    by_end.sort_by_key(|s| s.end_year);
    by_end
        .into_iter()
        .find(|s| s.end_year >= 2000)
        .ok_or(CatalogError::EmptyCatalog("no show ended on or after 2000"))
}
