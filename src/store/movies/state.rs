use std::collections::HashMap;
use std::fmt;

use crate::model::{Genre, Movie, MovieDetails};
use crate::store::mvi::StoreState;

/// Identifies one independently loading piece of movie data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestKey {
    Featured,
    Genre(String),
    Details,
    Related,
    Genres,
    /// The filtered `GET /movies` list.
    All,
}

impl fmt::Display for RequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Featured => f.write_str("featured"),
            Self::Genre(id) => write!(f, "genre:{}", id),
            Self::Details => f.write_str("details"),
            Self::Related => f.write_str("related"),
            Self::Genres => f.write_str("genres"),
            Self::All => f.write_str("all"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestSlot {
    pub(crate) generation: u64,
    pub(crate) status: FetchStatus,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoviesState {
    pub featured_movies: Vec<Movie>,
    /// Absent key: never fetched. Present and empty: fetched, no movies.
    pub movies_by_genre: HashMap<String, Vec<Movie>>,
    pub current_movie: Option<MovieDetails>,
    pub related_movies: Vec<Movie>,
    pub genres: Vec<Genre>,
    pub all_movies: Vec<Movie>,
    /// True while any request is in flight.
    pub loading: bool,
    /// Message of the most recent failure since the last fetch started.
    pub error: Option<String>,
    pub(crate) requests: HashMap<RequestKey, RequestSlot>,
    pub(crate) next_generation: u64,
}

impl StoreState for MoviesState {}

impl MoviesState {
    /// Status of a single request.
    pub fn status(&self, key: &RequestKey) -> FetchStatus {
        self.requests
            .get(key)
            .map(|slot| slot.status.clone())
            .unwrap_or_default()
    }

    pub fn is_loading(&self, key: &RequestKey) -> bool {
        self.status(key) == FetchStatus::Loading
    }

    /// Latest generation issued for `key`, if any fetch was ever started.
    pub fn generation(&self, key: &RequestKey) -> Option<u64> {
        self.requests.get(key).map(|slot| slot.generation)
    }

    /// Whether a completion tagged `generation` should still apply.
    pub fn is_current(&self, key: &RequestKey, generation: u64) -> bool {
        self.generation(key) == Some(generation)
    }

    pub fn genre_movies(&self, genre_id: &str) -> Option<&[Movie]> {
        self.movies_by_genre.get(genre_id).map(Vec::as_slice)
    }

    pub(crate) fn issue(&mut self, key: RequestKey) -> u64 {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.requests.insert(
            key,
            RequestSlot {
                generation,
                status: FetchStatus::Loading,
            },
        );
        generation
    }

    /// Advance `key` past any in-flight fetch without starting a new one.
    pub(crate) fn orphan(&mut self, key: RequestKey) {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.requests.insert(
            key,
            RequestSlot {
                generation,
                status: FetchStatus::Idle,
            },
        );
    }

    pub(crate) fn settle(&mut self, key: &RequestKey, status: FetchStatus) {
        if let Some(slot) = self.requests.get_mut(key) {
            slot.status = status;
        }
    }

    pub(crate) fn refresh_loading(&mut self) {
        self.loading = self
            .requests
            .values()
            .any(|slot| slot.status == FetchStatus::Loading);
    }
}
