use rustc_hash::FxHashSet as HashSet;

use crate::data::Show;

/// Distinct genres among shows that started in the 80s, in order of first
/// appearance.
pub fn eighties_genres(shows: &[Show]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::default();
    let mut genres = Vec::new();

    for show in shows
        .iter()
        .filter(|s| s.start_year >= 1980 && s.start_year < 1990)
    {
        for genre in &show.genres {
            if seen.insert(genre.as_str()) {
                genres.push(genre.clone());
            }
        }
    }

    genres
}
