//! The show catalog: a columnar table of every series plus the typed row
//! model the query modules work against.

use std::fmt;

use polars::prelude::*;

use crate::error::CatalogError;

/// Columnar form of the catalog, one row per series. Genres are kept as a
/// single `|`-separated column until rows are materialized.
pub struct ShowTable {
    pub shows: DataFrame,
}

impl ShowTable {
    pub fn new() -> PolarsResult<Self> {
        let shows = df!(
            "name" => [
                "Seinfeld",
                "Star Trek: The Next Generation",
                "The X-Files",
                "The Simpsons",
                "Law & Order",
                "Friends",
                "Twin Peaks",
                "Cheers",
                "The Fresh Prince of Bel-Air",
                "Buffy the Vampire Slayer",
                "Frasier",
                "ER",
                "Will & Grace",
                "Home Improvement",
                "Boy Meets World",
                "Saved by the Bell",
                "The Wonder Years",
                "My So-Called Life",
                "Freaks and Geeks",
                "Dawson's Creek",
                "The Sopranos",
                "Baywatch",
            ],
            "start_year" => [
                1989,
                1987,
                1993,
                1989,
                1990,
                1994,
                1990,
                1982,
                1990,
                1997,
                1993,
                1994,
                1998,
                1991,
                1993,
                1989,
                1988,
                1994,
                1999,
                1998,
                1999,
                1989,
            ],
            "end_year" => [
                1998,
                1994,
                2018,
                2018,
                2010,
                2004,
                1991,
                1993,
                1996,
                2003,
                2004,
                2009,
                2006,
                1999,
                2000,
                1992,
                1993,
                1995,
                2000,
                2003,
                2007,
                2001,
            ],
            "episode_count" => [
                180,
                178,
                218,
                639,
                456,
                236,
                30,
                275,
                148,
                144,
                264,
                331,
                194,
                204,
                158,
                86,
                115,
                19,
                18,
                128,
                86,
                242,
            ],
            "imdb_rating" => [
                8.9,
                8.7,
                8.6,
                8.7,
                7.7,
                8.9,
                8.8,
                7.9,
                7.9,
                8.3,
                8.2,
                7.8,
                7.3,
                7.1,
                7.9,
                7.0,
                8.3,
                8.3,
                8.8,
                7.2,
                9.2,
                5.5,
            ],
            "genres" => [
                "Comedy",
                "Action|Adventure|Sci-Fi",
                "Drama|Mystery|Sci-Fi",
                "Animation|Comedy",
                "Crime|Drama|Mystery",
                "Comedy|Romance",
                "Crime|Drama|Mystery",
                "Comedy|Drama",
                "Comedy",
                "Action|Drama|Fantasy",
                "Comedy",
                "Drama",
                "Comedy",
                "Comedy",
                "Comedy|Drama|Romance",
                "Comedy",
                "Comedy|Drama",
                "Drama",
                "Comedy|Drama",
                "Drama|Romance",
                "Crime|Drama",
                "Action|Drama",
            ],
        )?;

        Ok(ShowTable { shows })
    }
}

/// One television series record.
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    pub name: String,
    pub start_year: i32,
    pub end_year: i32,
    pub episode_count: i32,
    pub imdb_rating: f64,
    pub genres: Vec<String>,
}

impl Show {
    /// Years between first and last air date.
    pub fn years_on_air(&self) -> i32 {
        self.end_year - self.start_year
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}-{}) {} episodes, rated {} [{}]",
            self.name,
            self.start_year,
            self.end_year,
            self.episode_count,
            self.imdb_rating,
            self.genres.join("/")
        )
    }
}

/// Materializes the catalog as typed rows in table order. Every call yields
/// the same records; rows that violate the data model are rejected here,
/// before any query runs.
pub fn load_catalog() -> Result<Vec<Show>, CatalogError> {
    let table = ShowTable::new()?;
    rows(&table.shows)
}

fn rows(df: &DataFrame) -> Result<Vec<Show>, CatalogError> {
    let mut shows = Vec::with_capacity(df.height());

    for (((((name, start_year), end_year), episode_count), imdb_rating), genres) in df
        .column("name")?
        .str()?
        .into_no_null_iter()
        .zip(df.column("start_year")?.i32()?.into_no_null_iter())
        .zip(df.column("end_year")?.i32()?.into_no_null_iter())
        .zip(df.column("episode_count")?.i32()?.into_no_null_iter())
        .zip(df.column("imdb_rating")?.f64()?.into_no_null_iter())
        .zip(df.column("genres")?.str()?.into_no_null_iter())
    {
        if end_year < start_year {
            return Err(CatalogError::MalformedRecord {
                name: name.to_string(),
                reason: format!("ends {end_year} before it starts {start_year}"),
            });
        }
        if episode_count < 0 {
            return Err(CatalogError::MalformedRecord {
                name: name.to_string(),
                reason: format!("negative episode count {episode_count}"),
            });
        }

        shows.push(Show {
            name: name.to_string(),
            start_year,
            end_year,
            episode_count,
            imdb_rating,
            genres: genres.split('|').map(str::to_string).collect(),
        });
    }

    tracing::debug!(rows = shows.len(), "catalog materialized");

    Ok(shows)
}
