use rustc_hash::FxHashMap as HashMap;

use crate::data::Show;

/// One `"<year>: <count>"` line for every year 1987 through 2018, counting
/// shows that started that year. Years with no starts still get a line.
pub fn shows_per_year(shows: &[Show]) -> Vec<String> {
    let mut started: HashMap<i32, usize> = HashMap::default();
    for show in shows {
        *started.entry(show.start_year).or_default() += 1;
    }

    (1987..=2018)
        .map(|year| format!("{year}: {}", started.get(&year).copied().unwrap_or(0)))
        .collect()
}
