use crate::data::Show;

/// The three highest-rated shows; all of them if the catalog holds fewer.
pub fn top_three_by_rating(shows: &[Show]) -> Vec<&Show> {
    let mut ranked: Vec<&Show> = shows.iter().collect();
    ranked.sort_by(|a, b| b.imdb_rating.total_cmp(&a.imdb_rating));
    ranked.truncate(3);
    ranked
}
