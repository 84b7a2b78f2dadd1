use crate::data::Show;

// Comedy episodes run 22 minutes, everything else 42.
const COMEDY_MINUTES: i32 = 22;
const OTHER_MINUTES: i32 = 42;

/// Minutes needed to watch every episode of every show.
pub fn total_watch_minutes(shows: &[Show]) -> i32 {
    let (comedy, other) = shows.iter().fold((0, 0), |(comedy, other), s| {
        if s.has_genre("Comedy") {
            (comedy + s.episode_count, other)
        } else {
            (comedy, other + s.episode_count)
        }
    });

    COMEDY_MINUTES * comedy + OTHER_MINUTES * other
}

#[cfg(test)]
mod test_total_watch_minutes {
    use super::*;
    use crate::data;
    use crate::error::CatalogError;

    fn show(episodes: i32, genre: &str) -> Show {
        Show {
            name: format!("{episodes} of {genre}"),
            start_year: 1990,
            end_year: 1995,
            episode_count: episodes,
            imdb_rating: 7.0,
            genres: vec![genre.to_string()],
        }
    }

    #[test]
    fn test_total_watch_minutes() -> Result<(), CatalogError> {
        let shows = data::load_catalog()?;
        // 2517 comedy episodes and 1832 others.
        assert_eq!(total_watch_minutes(&shows), 132_318);
        Ok(())
    }

    #[test]
    fn test_rates_per_genre() {
        let shows = vec![show(10, "Comedy"), show(5, "Drama")];
        assert_eq!(total_watch_minutes(&shows), 22 * 10 + 42 * 5);
        assert_eq!(total_watch_minutes(&[]), 0);
    }
}
