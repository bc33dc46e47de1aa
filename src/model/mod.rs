//! Value records exchanged with the movie API.
//!
//! The state core never mutates these in place; stores replace whole
//! records when a fetch completes.

mod movie;
mod params;

pub use movie::{Actor, ActorProfile, Director, DirectorProfile, Genre, Movie, MovieDetails, Review};
pub use params::{FilterParams, SearchType};
