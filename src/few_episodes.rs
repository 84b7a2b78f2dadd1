use crate::data::Show;

/// Names of shows that aired fewer than 100 episodes.
pub fn few_episodes(shows: &[Show]) -> Vec<String> {
    shows
        .iter()
        .filter(|s| s.episode_count < 100)
        .map(|s| s.name.clone())
        .collect()
}

#[cfg(test)]
mod test_few_episodes {
    use super::*;
    use crate::data;
    use crate::error::CatalogError;

    #[test]
    fn test_few_episodes() -> Result<(), CatalogError> {
        let shows = data::load_catalog()?;
        assert_eq!(
            few_episodes(&shows),
            [
                "Twin Peaks",
                "Saved by the Bell",
                "My So-Called Life",
                "Freaks and Geeks",
                "The Sopranos",
            ]
        );
        Ok(())
    }
}
