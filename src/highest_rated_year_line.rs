use ahash::HashMap;

use crate::data::Show;
use crate::error::CatalogError;

/// For every year between the earliest start and the latest end, formats
/// `"<year>: <average rating of shows active that year>"` and returns the
/// largest line. The maximum is over the formatted text, not the parsed
/// averages, so the comparison is lexicographic.
pub fn highest_rated_year_line(shows: &[Show]) -> Result<String, CatalogError> {
    let first = shows
        .iter()
        .map(|s| s.start_year)
        .min()
        .ok_or(CatalogError::EmptyCatalog("no start years to scan"))?;
    let last = shows
        .iter()
        .map(|s| s.end_year)
        .max()
        .ok_or(CatalogError::EmptyCatalog("no end years to scan"))?;

    let mut active: HashMap<i32, Vec<f64>> = HashMap::default();
    for show in shows {
        for year in show.start_year..=show.end_year {
            active.entry(year).or_default().push(show.imdb_rating);
        }
    }

    let mut lines = Vec::with_capacity((last - first + 1) as usize);
    for year in first..=last {
        let ratings = active
            .get(&year)
            .ok_or(CatalogError::EmptyCatalog("a year with no active show"))?;
        let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
        lines.push(format!("{year}: {mean}"));
    }

    lines
        .into_iter()
        .max()
        .ok_or(CatalogError::EmptyCatalog("no year lines to compare"))
}
