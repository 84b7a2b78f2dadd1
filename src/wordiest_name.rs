use std::cmp::Reverse;

use regex::Regex;

use crate::data::Show;
use crate::error::CatalogError;

/// The show whose name has the most whitespace-delimited words; a tie goes
/// to the earliest catalog entry.
pub fn wordiest_name(shows: &[Show]) -> Result<&Show, CatalogError> {
    let word = Regex::new(r"\S+")?;

    let mut ranked: Vec<&Show> = shows.iter().collect();
    ranked.sort_by_key(|s| Reverse(word.find_iter(&s.name).count()));
    ranked
        .into_iter()
        .next()
        .ok_or(CatalogError::EmptyCatalog("no names to count words in"))
}

#[cfg(test)]
mod test_wordiest_name {
    use super::*;
    use crate::data;

    #[test]
    fn test_wordiest_name() -> Result<(), CatalogError> {
        let shows = data::load_catalog()?;
        // Five words each for Star Trek: The Next Generation and The Fresh
        // Prince of Bel-Air; the catalog lists the former first.
        assert_eq!(wordiest_name(&shows)?.name, "Star Trek: The Next Generation");
        Ok(())
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let err = wordiest_name(&[]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCatalog(_)));
    }
}
