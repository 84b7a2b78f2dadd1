use crate::data::Show;
use crate::error::CatalogError;

/// Like a comma join, but with `" and "` before the final name. With a
/// single show the leading join is empty and the result collapses to
/// `" and <name>"`; callers wanting a sensible sentence need two shows.
pub fn names_joined_with_and(shows: &[Show]) -> Result<String, CatalogError> {
    let Some((last, rest)) = shows.split_last() else {
        return Err(CatalogError::EmptyCatalog("no names to join"));
    };

    let rest: Vec<&str> = rest.iter().map(|s| s.name.as_str()).collect();
    Ok(format!("{} and {}", rest.join(", "), last.name))
}
