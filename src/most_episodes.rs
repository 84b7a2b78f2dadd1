use crate::data::Show;
use crate::error::CatalogError;

/// The show with the most episodes. A stable descending sort means a tie
/// goes to the earliest catalog entry.
pub fn most_episodes(shows: &[Show]) -> Result<&Show, CatalogError> {
    let mut ranked: Vec<&Show> = shows.iter().collect();
    ranked.sort_by(|a, b| b.episode_count.cmp(&a.episode_count));
    ranked
        .into_iter()
        .next()
        .ok_or(CatalogError::EmptyCatalog("no episode counts to compare"))
}
