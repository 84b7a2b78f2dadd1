use crate::data::Show;

/// Every show name, in catalog order.
pub fn all_names(shows: &[Show]) -> Vec<String> {
    shows.iter().map(|s| s.name.clone()).collect()
}
