pub mod data;
pub mod error;
pub mod report;

pub mod all_but_best_drama;
pub mod all_but_worst;
pub mod all_genres;
pub mod all_names;
pub mod average_rating;
pub mod best_drama;
pub mod by_duration;
pub mod by_popularity;
pub mod comedies_by_rating;
pub mod eighties_genres;
pub mod few_episodes;
pub mod first_ended_after_millennium;
pub mod first_long_running_top_rated;
pub mod good_crime_shows;
pub mod highest_rated_year_line;
pub mod most_episodes;
pub mod most_recent_year;
pub mod multi_genre_by_start_year;
pub mod names_alphabetically;
pub mod names_joined;
pub mod names_joined_with_and;
pub mod only_in_nineties;
pub mod shows_per_year;
pub mod the_shows;
pub mod top_three_by_rating;
pub mod total_watch_minutes;
pub mod with_ampersand;
pub mod wordiest_name;
