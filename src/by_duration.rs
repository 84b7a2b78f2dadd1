use crate::data::Show;

/// Shows sorted by years on air, longest first; ties keep catalog order.
pub fn by_duration(shows: &[Show]) -> Vec<&Show> {
    let mut ranked: Vec<&Show> = shows.iter().collect();
    ranked.sort_by(|a, b| b.years_on_air().cmp(&a.years_on_air()));
    ranked
}
