//! Aggregation and retrospective metrics over the reading log.
//!
//! Pure functions over `&[Book]`: the per-country series behind the world
//! map, the value-count breakdowns behind the retrospective charts, and
//! the headline summary numbers. No I/O, no shared state; callers own
//! both the data and the resolver.

pub mod country;
pub mod retro;

pub use country::{aggregate_by_country, CountryBooks, TopBook};
pub use retro::{
    count_by, filter_year_range, mean_rating_by_genre, pages_by_genre, summary, Dimension, Summary,
};
