use crate::data::Show;

/// All names as one string, `", "` between each pair.
pub fn names_joined(shows: &[Show]) -> String {
    shows
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<&str>>()
        .join(", ")
}
