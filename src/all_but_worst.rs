use crate::data::Show;

/// Every show except the single lowest-rated one, in ascending rating
/// order. On a rating tie the earliest catalog entry is the one dropped.
pub fn all_but_worst(shows: &[Show]) -> Vec<&Show> {
    let mut ranked: Vec<&Show> = shows.iter().collect();
    ranked.sort_by(|a, b| a.imdb_rating.total_cmp(&b.imdb_rating));
    ranked.into_iter().skip(1).collect()
}
