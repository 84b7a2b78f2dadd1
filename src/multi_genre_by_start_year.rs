use crate::data::Show;

/// Shows carrying more than one genre label, earliest start first.
pub fn multi_genre_by_start_year(shows: &[Show]) -> Vec<&Show> {
    let mut multi: Vec<&Show> = shows.iter().filter(|s| s.genres.len() > 1).collect();
    multi.sort_by_key(|s| s.start_year);
    multi
}
