use crate::model::{Genre, Movie, MovieDetails};
use crate::store::movies::state::RequestKey;
use crate::store::mvi::Intent;

#[derive(Debug, Clone)]
pub enum MoviesIntent {
    /// A fetch for `key` was issued; allocates its generation.
    Started { key: RequestKey },
    FeaturedLoaded {
        generation: u64,
        movies: Vec<Movie>,
    },
    GenreLoaded {
        generation: u64,
        genre_id: String,
        movies: Vec<Movie>,
    },
    DetailsLoaded {
        generation: u64,
        movie: MovieDetails,
    },
    RelatedLoaded {
        generation: u64,
        movies: Vec<Movie>,
    },
    GenresLoaded {
        generation: u64,
        genres: Vec<Genre>,
    },
    AllLoaded {
        generation: u64,
        movies: Vec<Movie>,
    },
    Failed {
        key: RequestKey,
        generation: u64,
        message: String,
    },
    /// Leaving a detail view: drop current + related and orphan their fetches.
    ClearCurrent,
    ClearError,
}

impl MoviesIntent {
    /// The request a completion belongs to, with its generation.
    pub fn completion(&self) -> Option<(RequestKey, u64)> {
        match self {
            Self::FeaturedLoaded { generation, .. } => Some((RequestKey::Featured, *generation)),
            Self::GenreLoaded {
                generation,
                genre_id,
                ..
            } => Some((RequestKey::Genre(genre_id.clone()), *generation)),
            Self::DetailsLoaded { generation, .. } => Some((RequestKey::Details, *generation)),
            Self::RelatedLoaded { generation, .. } => Some((RequestKey::Related, *generation)),
            Self::GenresLoaded { generation, .. } => Some((RequestKey::Genres, *generation)),
            Self::AllLoaded { generation, .. } => Some((RequestKey::All, *generation)),
            Self::Failed {
                key, generation, ..
            } => Some((key.clone(), *generation)),
            Self::Started { .. } | Self::ClearCurrent | Self::ClearError => None,
        }
    }
}

impl Intent for MoviesIntent {}
