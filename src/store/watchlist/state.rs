use std::collections::HashSet;

use crate::model::Movie;
use crate::store::mvi::StoreState;

/// Ordered list of saved movies, unique by id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WatchlistState {
    movies: Vec<Movie>,
}

impl StoreState for WatchlistState {}

impl WatchlistState {
    /// Build from hydrated data. Later duplicates of an id are dropped.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let mut seen = HashSet::new();
        let movies = movies
            .into_iter()
            .filter(|m| seen.insert(m.id.clone()))
            .collect();
        Self { movies }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn contains(&self, id: &str) -> bool {
        self.movies.iter().any(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub(crate) fn push(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    pub(crate) fn retain_except(&mut self, id: &str) {
        self.movies.retain(|m| m.id != id);
    }

    pub(crate) fn clear(&mut self) {
        self.movies.clear();
    }
}
