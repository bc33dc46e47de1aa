//! Explicitly constructed application context.
//!
//! Owns one instance of every store plus the collaborators their effects
//! need. Each dispatch reduces under the store's lock and runs the
//! post-transition effect before releasing it, so updates to one store
//! never interleave. Async operations release every lock while awaiting
//! the API.

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::{ApiClient, ApiError, ApiFailure};
use crate::config::Config;
use crate::model::{FilterParams, Movie, SearchType};
use crate::storage::{FileStore, KeyValueStore, Persistence};
use crate::store::filters::{FiltersIntent, FiltersReducer, FiltersState};
use crate::store::movies::{MoviesIntent, MoviesReducer, MoviesState, RequestKey};
use crate::store::mvi::Reducer;
use crate::store::search::{should_search, SearchIntent, SearchReducer, SearchState};
use crate::store::theme::{Theme, ThemeIntent, ThemeReducer, ThemeState, ThemeSurface};
use crate::store::watchlist::{WatchlistIntent, WatchlistReducer, WatchlistState};

/// What became of an asynchronous fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Result was written into the store.
    Applied,
    /// The request failed; the failure was recorded as store state.
    Failed(ApiFailure),
    /// A newer request (or a clear) superseded this one; result dropped.
    Discarded,
}

impl FetchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Storage keys for persisted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub watchlist: String,
    pub theme: String,
}

impl From<&Config> for StorageKeys {
    fn from(config: &Config) -> Self {
        Self {
            watchlist: config.storage.watchlist_key.clone(),
            theme: config.storage.theme_key.clone(),
        }
    }
}

pub struct AppContext {
    api: ApiClient,
    persistence: Persistence,
    surface: Arc<dyn ThemeSurface>,
    keys: StorageKeys,
    min_query_len: usize,
    watchlist: Mutex<WatchlistState>,
    theme: Mutex<ThemeState>,
    movies: Mutex<MoviesState>,
    search: Mutex<SearchState>,
    filters: Mutex<FiltersState>,
}

impl AppContext {
    /// Build a context, hydrating watchlist and theme from `store`.
    ///
    /// The hydrated theme is applied to `surface` once and written back,
    /// so an unrecognized stored value is replaced by the fallback.
    pub fn new(
        config: &Config,
        api: ApiClient,
        store: Arc<dyn KeyValueStore>,
        surface: Arc<dyn ThemeSurface>,
    ) -> Self {
        let persistence = Persistence::new(store);
        let keys = StorageKeys::from(config);

        let watchlist = hydrate_watchlist(&persistence, &keys.watchlist);
        let theme = hydrate_theme(&persistence, &keys.theme);

        tracing::info!(
            watchlist_len = watchlist.len(),
            theme = %theme.current,
            "State hydrated"
        );

        let search = SearchState {
            search_type: config.search.default_type,
            ..SearchState::default()
        };

        let ctx = Self {
            api,
            persistence,
            surface,
            keys,
            min_query_len: config.search.min_query_len,
            watchlist: Mutex::new(watchlist),
            theme: Mutex::new(theme),
            movies: Mutex::new(MoviesState::default()),
            search: Mutex::new(search),
            filters: Mutex::new(FiltersState::default()),
        };
        ctx.apply_theme(theme.current);
        ctx
    }

    /// Context over a [`FileStore`] in the configured storage directory.
    pub fn from_config(config: &Config, surface: Arc<dyn ThemeSurface>) -> Result<Self, ApiError> {
        let api = ApiClient::new(&config.api)?;
        let store = Arc::new(FileStore::new(config.storage.resolved_dir()));
        Ok(Self::new(config, api, store, surface))
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // -- Watchlist ------------------------------------------------------------

    pub fn add_to_watchlist(&self, movie: Movie) {
        self.dispatch_watchlist(WatchlistIntent::Add(movie));
    }

    pub fn remove_from_watchlist(&self, id: &str) {
        self.dispatch_watchlist(WatchlistIntent::Remove { id: id.to_string() });
    }

    /// Add when absent, remove when present.
    pub fn toggle_watchlist(&self, movie: Movie) {
        self.dispatch_watchlist(WatchlistIntent::Toggle(movie));
    }

    pub fn clear_watchlist(&self) {
        self.dispatch_watchlist(WatchlistIntent::Clear);
    }

    pub fn is_in_watchlist(&self, id: &str) -> bool {
        self.watchlist.lock().contains(id)
    }

    pub fn watchlist(&self) -> WatchlistState {
        self.watchlist.lock().clone()
    }

    /// Reduce, then write the full list. No-op mutations write too, which
    /// replaces a corrupt stored value with the in-memory list.
    fn dispatch_watchlist(&self, intent: WatchlistIntent) {
        let mut guard = self.watchlist.lock();
        let state = std::mem::take(&mut *guard);
        *guard = WatchlistReducer::reduce(state, intent);

        // In-memory state stays authoritative if the write fails.
        if let Err(e) = self
            .persistence
            .save_json(&self.keys.watchlist, guard.movies())
        {
            tracing::warn!(key = %self.keys.watchlist, error = %e, "Failed to save watchlist");
        } else {
            tracing::debug!(len = guard.len(), "Watchlist persisted");
        }
    }

    // -- Theme ----------------------------------------------------------------

    pub fn theme(&self) -> Theme {
        self.theme.lock().current
    }

    pub fn set_theme(&self, theme: Theme) {
        self.dispatch_theme(ThemeIntent::Set(theme));
    }

    pub fn toggle_theme(&self) {
        self.dispatch_theme(ThemeIntent::Toggle);
    }

    fn dispatch_theme(&self, intent: ThemeIntent) {
        let mut guard = self.theme.lock();
        *guard = ThemeReducer::reduce(*guard, intent);
        self.apply_theme(guard.current);
    }

    /// Show `theme` on the surface and persist it.
    fn apply_theme(&self, theme: Theme) {
        self.surface.apply(theme);
        if let Err(e) = self.persistence.save_raw(&self.keys.theme, theme.as_str()) {
            tracing::warn!(key = %self.keys.theme, error = %e, "Failed to save theme");
        }
        tracing::debug!(theme = %theme, "Theme applied");
    }

    // -- Movies ---------------------------------------------------------------

    pub fn movies(&self) -> MoviesState {
        self.movies.lock().clone()
    }

    pub async fn fetch_featured(&self) -> FetchOutcome {
        self.run_movies_fetch(RequestKey::Featured, self.api.featured_movies(), |generation, movies| {
            MoviesIntent::FeaturedLoaded { generation, movies }
        })
        .await
    }

    pub async fn fetch_by_genre(&self, genre_id: &str) -> FetchOutcome {
        let owned = genre_id.to_string();
        self.run_movies_fetch(
            RequestKey::Genre(owned.clone()),
            self.api.movies_by_genre(genre_id),
            move |generation, movies| MoviesIntent::GenreLoaded {
                generation,
                genre_id: owned,
                movies,
            },
        )
        .await
    }

    pub async fn fetch_details(&self, movie_id: &str) -> FetchOutcome {
        self.run_movies_fetch(RequestKey::Details, self.api.movie(movie_id), |generation, movie| {
            MoviesIntent::DetailsLoaded { generation, movie }
        })
        .await
    }

    pub async fn fetch_related(&self, movie_id: &str) -> FetchOutcome {
        self.run_movies_fetch(
            RequestKey::Related,
            self.api.related_movies(movie_id),
            |generation, movies| MoviesIntent::RelatedLoaded { generation, movies },
        )
        .await
    }

    pub async fn fetch_genres(&self) -> FetchOutcome {
        self.run_movies_fetch(RequestKey::Genres, self.api.genres(), |generation, genres| {
            MoviesIntent::GenresLoaded { generation, genres }
        })
        .await
    }

    pub async fn fetch_movies(&self, filters: &FilterParams) -> FetchOutcome {
        self.run_movies_fetch(RequestKey::All, self.api.movies(filters), |generation, movies| {
            MoviesIntent::AllLoaded { generation, movies }
        })
        .await
    }

    /// Fetch `GET /movies` with the current filter selection.
    pub async fn fetch_filtered_movies(&self) -> FetchOutcome {
        let params = self.filters.lock().params();
        self.fetch_movies(&params).await
    }

    /// Load a detail view: details and related movies concurrently.
    pub async fn open_details(&self, movie_id: &str) -> (FetchOutcome, FetchOutcome) {
        tokio::join!(self.fetch_details(movie_id), self.fetch_related(movie_id))
    }

    /// Leave a detail view. In-flight detail/related fetches are orphaned.
    pub fn clear_current(&self) {
        self.dispatch_movies(MoviesIntent::ClearCurrent);
    }

    pub fn clear_movies_error(&self) {
        self.dispatch_movies(MoviesIntent::ClearError);
    }

    fn dispatch_movies(&self, intent: MoviesIntent) {
        let mut guard = self.movies.lock();
        let state = std::mem::take(&mut *guard);
        *guard = MoviesReducer::reduce(state, intent);
    }

    async fn run_movies_fetch<T, F, M>(&self, key: RequestKey, request: F, on_success: M) -> FetchOutcome
    where
        F: Future<Output = Result<T, ApiError>>,
        M: FnOnce(u64, T) -> MoviesIntent,
    {
        let generation = {
            let mut guard = self.movies.lock();
            let state = std::mem::take(&mut *guard);
            *guard = MoviesReducer::reduce(state, MoviesIntent::Started { key: key.clone() });
            guard.generation(&key).unwrap_or_default()
        };
        tracing::debug!(key = %key, generation, "Fetch started");

        let result = request.await;

        let mut guard = self.movies.lock();
        if !guard.is_current(&key, generation) {
            tracing::debug!(key = %key, generation, "Discarding superseded fetch result");
            return FetchOutcome::Discarded;
        }

        let (intent, outcome) = match result {
            Ok(value) => (on_success(generation, value), FetchOutcome::Applied),
            Err(e) => {
                let failure = e.to_failure();
                (
                    MoviesIntent::Failed {
                        key: key.clone(),
                        generation,
                        message: failure.message.clone(),
                    },
                    FetchOutcome::Failed(failure),
                )
            }
        };

        let state = std::mem::take(&mut *guard);
        *guard = MoviesReducer::reduce(state, intent);
        tracing::debug!(key = %key, generation, applied = outcome.is_applied(), "Fetch finished");
        outcome
    }

    // -- Search ---------------------------------------------------------------

    pub fn search_state(&self) -> SearchState {
        self.search.lock().clone()
    }

    pub fn set_query(&self, query: &str) {
        self.dispatch_search(SearchIntent::SetQuery(query.to_string()));
    }

    pub fn set_search_type(&self, search_type: SearchType) {
        self.dispatch_search(SearchIntent::SetSearchType(search_type));
    }

    pub fn clear_search(&self) {
        self.dispatch_search(SearchIntent::Clear);
    }

    /// Minimum trimmed query length before a search is issued.
    pub fn min_query_len(&self) -> usize {
        self.min_query_len
    }

    /// Run a search unconditionally. Only the latest search can apply.
    pub async fn search(&self, query: &str, search_type: SearchType) -> FetchOutcome {
        let generation = {
            let mut guard = self.search.lock();
            let state = std::mem::take(&mut *guard);
            *guard = SearchReducer::reduce(state, SearchIntent::Started);
            guard.generation()
        };
        tracing::debug!(query, search_type = %search_type, generation, "Search started");

        let result = self.api.search_movies(query, search_type).await;

        let mut guard = self.search.lock();
        if guard.generation() != generation {
            tracing::debug!(query, generation, "Discarding superseded search result");
            return FetchOutcome::Discarded;
        }

        let (intent, outcome) = match result {
            Ok(results) => (
                SearchIntent::Loaded {
                    generation,
                    results,
                },
                FetchOutcome::Applied,
            ),
            Err(e) => {
                let failure = e.to_failure();
                (
                    SearchIntent::Failed {
                        generation,
                        message: failure.message.clone(),
                    },
                    FetchOutcome::Failed(failure),
                )
            }
        };
        let state = std::mem::take(&mut *guard);
        *guard = SearchReducer::reduce(state, intent);
        outcome
    }

    /// The view-layer entry point: records the query and searches only if
    /// it passes the minimum-length gate. Returns `None` when gated.
    pub async fn submit_search(&self, query: &str, search_type: SearchType) -> Option<FetchOutcome> {
        if !should_search(query, self.min_query_len) {
            tracing::debug!(query, min_len = self.min_query_len, "Search gated");
            return None;
        }
        self.set_query(query);
        self.set_search_type(search_type);
        Some(self.search(query, search_type).await)
    }

    fn dispatch_search(&self, intent: SearchIntent) {
        let mut guard = self.search.lock();
        let state = std::mem::take(&mut *guard);
        *guard = SearchReducer::reduce(state, intent);
    }

    // -- Filters --------------------------------------------------------------

    pub fn filters(&self) -> FiltersState {
        self.filters.lock().clone()
    }

    pub fn set_genre_filter(&self, genre_id: Option<String>) {
        self.dispatch_filters(FiltersIntent::SetGenre(genre_id));
    }

    pub fn set_actor_filter(&self, actor_id: Option<String>) {
        self.dispatch_filters(FiltersIntent::SetActor(actor_id));
    }

    pub fn set_director_filter(&self, director_id: Option<String>) {
        self.dispatch_filters(FiltersIntent::SetDirector(director_id));
    }

    pub fn clear_filters(&self) {
        self.dispatch_filters(FiltersIntent::ClearAll);
    }

    fn dispatch_filters(&self, intent: FiltersIntent) {
        let mut guard = self.filters.lock();
        let state = std::mem::take(&mut *guard);
        *guard = FiltersReducer::reduce(state, intent);
    }
}

fn hydrate_watchlist(persistence: &Persistence, key: &str) -> WatchlistState {
    let movies: Vec<Movie> = persistence.load_json_or_default(key);
    WatchlistState::from_movies(movies)
}

fn hydrate_theme(persistence: &Persistence, key: &str) -> ThemeState {
    let current = persistence
        .load_raw(key)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_default();
    ThemeState { current }
}
