use crate::store::movies::intent::MoviesIntent;
use crate::store::movies::state::{FetchStatus, MoviesState, RequestKey};
use crate::store::mvi::Reducer;

pub struct MoviesReducer;

impl Reducer for MoviesReducer {
    type State = MoviesState;
    type Intent = MoviesIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        if let Some((key, generation)) = intent.completion() {
            if !state.is_current(&key, generation) {
                return state;
            }
        }

        match intent {
            MoviesIntent::Started { key } => {
                state.issue(key);
                state.error = None;
            }
            MoviesIntent::FeaturedLoaded { movies, .. } => {
                state.featured_movies = movies;
                state.settle(&RequestKey::Featured, FetchStatus::Loaded);
            }
            MoviesIntent::GenreLoaded {
                genre_id, movies, ..
            } => {
                let key = RequestKey::Genre(genre_id.clone());
                state.movies_by_genre.insert(genre_id, movies);
                state.settle(&key, FetchStatus::Loaded);
            }
            MoviesIntent::DetailsLoaded { movie, .. } => {
                state.current_movie = Some(movie);
                state.settle(&RequestKey::Details, FetchStatus::Loaded);
            }
            MoviesIntent::RelatedLoaded { movies, .. } => {
                state.related_movies = movies;
                state.settle(&RequestKey::Related, FetchStatus::Loaded);
            }
            MoviesIntent::GenresLoaded { genres, .. } => {
                state.genres = genres;
                state.settle(&RequestKey::Genres, FetchStatus::Loaded);
            }
            MoviesIntent::AllLoaded { movies, .. } => {
                state.all_movies = movies;
                state.settle(&RequestKey::All, FetchStatus::Loaded);
            }
            MoviesIntent::Failed { key, message, .. } => {
                state.settle(&key, FetchStatus::Failed(message.clone()));
                state.error = Some(message);
            }
            MoviesIntent::ClearCurrent => {
                state.current_movie = None;
                state.related_movies = Vec::new();
                state.orphan(RequestKey::Details);
                state.orphan(RequestKey::Related);
            }
            MoviesIntent::ClearError => state.error = None,
        }

        state.refresh_loading();
        state
    }
}
