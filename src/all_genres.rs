use ahash::HashSet;

use crate::data::Show;

/// Every distinct genre label in the catalog, in order of first appearance.
pub fn all_genres(shows: &[Show]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::default();
    let mut genres = Vec::new();

    for show in shows {
        for genre in &show.genres {
            if seen.insert(genre.as_str()) {
                genres.push(genre.clone());
            }
        }
    }

    genres
}
