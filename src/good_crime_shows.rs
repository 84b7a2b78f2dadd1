use crate::data::Show;

/// How many Crime shows rate above 7.0.
pub fn good_crime_shows(shows: &[Show]) -> usize {
    shows
        .iter()
        .filter(|s| s.has_genre("Crime") && s.imdb_rating > 7.0)
        .count()
}
