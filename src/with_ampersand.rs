use memchr::memmem::Finder;

use crate::data::Show;

/// Shows whose name contains a literal `&`, catalog order preserved.
pub fn with_ampersand(shows: &[Show]) -> Vec<&Show> {
    let amp = Finder::new("&");
    shows
        .iter()
        .filter(|s| amp.find(s.name.as_bytes()).is_some())
        .collect()
}
