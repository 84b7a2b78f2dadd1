use crate::data::Show;
use crate::error::CatalogError;

/// Alphabetically first among shows that ran more than ten years and rate
/// above 8.0.
pub fn first_long_running_top_rated(shows: &[Show]) -> Result<&Show, CatalogError> {
    let mut keepers: Vec<&Show> = shows
        .iter()
        .filter(|s| s.years_on_air() > 10 && s.imdb_rating > 8.0)
        .collect();
    keepers.sort_by(|a, b| a.name.cmp(&b.name));
    keepers
        .into_iter()
        .next()
        .ok_or(CatalogError::EmptyCatalog(
            "no long-running show rated above 8.0",
        ))
}
