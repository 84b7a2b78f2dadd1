use crate::data::Show;

/// Show names sorted ascending, standard lexicographic string order.
pub fn names_alphabetically(shows: &[Show]) -> Vec<String> {
    let mut names: Vec<String> = shows.iter().map(|s| s.name.clone()).collect();
    names.sort();
    names
}
