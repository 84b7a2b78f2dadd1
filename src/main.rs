use tracing_subscriber::EnvFilter;

use tvq::report::{Report, report};
use tvq::*;

fn main() -> Result<(), error::CatalogError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let shows = data::load_catalog()?;
    tracing::info!(count = shows.len(), "catalog loaded");

    report("All Names", Report::Lines(all_names::all_names(&shows)));
    report(
        "Alphabetical Names",
        Report::Lines(names_alphabetically::names_alphabetically(&shows)),
    );
    report(
        "Ordered by Popularity",
        Report::Shows(by_popularity::by_popularity(&shows)),
    );
    report(
        "Shows with an '&'",
        Report::Shows(with_ampersand::with_ampersand(&shows)),
    );
    report(
        "Latest Year a Show Aired",
        Report::Int(most_recent_year::most_recent_year(&shows)?.into()),
    );
    report(
        "Average Rating",
        Report::Float(average_rating::average_rating(&shows)?),
    );
    report(
        "Shows Only Aired in the 90s",
        Report::Shows(only_in_nineties::only_in_nineties(&shows)),
    );
    report(
        "Top Three Shows",
        Report::Shows(top_three_by_rating::top_three_by_rating(&shows)),
    );
    report(
        "Shows Starting with 'The'",
        Report::Shows(the_shows::the_shows(&shows)),
    );
    report(
        "All But the Worst",
        Report::Shows(all_but_worst::all_but_worst(&shows)),
    );
    report(
        "Shows with Few Episodes",
        Report::Lines(few_episodes::few_episodes(&shows)),
    );
    report(
        "Shows Sorted by Duration",
        Report::Shows(by_duration::by_duration(&shows)),
    );
    report(
        "Comedies Sorted by Rating",
        Report::Lines(comedies_by_rating::comedies_by_rating(&shows)),
    );
    report(
        "More Than One Genre, by Start Year",
        Report::Shows(multi_genre_by_start_year::multi_genre_by_start_year(&shows)),
    );
    report(
        "Most Episodes",
        Report::Show(most_episodes::most_episodes(&shows)?),
    );
    report(
        "First Ended On or After 2000",
        Report::Show(first_ended_after_millennium::first_ended_after_millennium(&shows)?),
    );
    report("Best Drama", Report::Show(best_drama::best_drama(&shows)?));
    report(
        "All But the Best Drama",
        Report::Shows(all_but_best_drama::all_but_best_drama(&shows)),
    );
    report(
        "Good Crime Shows",
        Report::Int(good_crime_shows::good_crime_shows(&shows) as i64),
    );
    report(
        "Long-Running, Top-Rated",
        Report::Show(first_long_running_top_rated::first_long_running_top_rated(&shows)?),
    );
    report(
        "Most Words in Title",
        Report::Show(wordiest_name::wordiest_name(&shows)?),
    );
    report(
        "All Names Joined",
        Report::Line(names_joined::names_joined(&shows)),
    );
    report(
        "All Names Joined with And",
        Report::Line(names_joined_with_and::names_joined_with_and(&shows)?),
    );
    report(
        "Genres from the 80s",
        Report::Lines(eighties_genres::eighties_genres(&shows)),
    );
    report("All Genres", Report::Lines(all_genres::all_genres(&shows)));
    report(
        "Shows Per Year",
        Report::Lines(shows_per_year::shows_per_year(&shows)),
    );
    report(
        "Total Watch Minutes",
        Report::Int(total_watch_minutes::total_watch_minutes(&shows).into()),
    );
    report(
        "Highest Rated Year",
        Report::Line(highest_rated_year_line::highest_rated_year_line(&shows)?),
    );

    Ok(())
}
