use crate::data::Show;

/// Shows sorted by rating, highest first. The sort is stable, so shows
/// with equal ratings keep their catalog order.
pub fn by_popularity(shows: &[Show]) -> Vec<&Show> {
    let mut ranked: Vec<&Show> = shows.iter().collect();
    ranked.sort_by(|a, b| b.imdb_rating.total_cmp(&a.imdb_rating));
    ranked
}
