use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::timeout;

use crate::api::envelope::{envelope_message, unwrap_envelope, Unwrapped};
use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::model::{
    Actor, ActorProfile, Director, DirectorProfile, FilterParams, Genre, Movie, MovieDetails,
    SearchType,
};

/// HTTP client for the movie API.
///
/// Every call is a GET whose body is either the bare resource or a
/// `{success, message?, data}` envelope; callers always receive the
/// unwrapped resource or an [`ApiError`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    request_timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl {
                url: config.base_url.clone(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(|e| ApiError::Transport { source: e })?;

        Ok(Self {
            client,
            base_url,
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Build the URL for `segments` under the base URL plus `query` pairs.
    ///
    /// Segments are percent-encoded individually, so ids containing `/`
    /// stay within a single path segment.
    pub fn url_for(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| ApiError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?;
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.url_for(segments, query)?;
        tracing::debug!(url = %url, "API request");

        let result = timeout(self.request_timeout, self.do_get(url.clone())).await;
        let value = match result {
            Ok(value) => value,
            Err(_) => Err(ApiError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        };

        match value {
            Ok(value) => serde_json::from_value(value).map_err(|e| {
                tracing::warn!(url = %url, error = %e, "API response did not match expected shape");
                ApiError::Decode { source: e }
            }),
            Err(e) => {
                tracing::warn!(
                    url = %url,
                    status = e.status(),
                    error_type = e.error_type(),
                    error = %e,
                    "API request failed"
                );
                Err(e)
            }
        }
    }

    async fn do_get(&self, url: Url) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout {
                        duration: self.request_timeout.as_secs(),
                    }
                } else {
                    ApiError::Transport { source: e }
                }
            })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport { source: e })?;

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .as_ref()
                .and_then(envelope_message)
                .unwrap_or_else(|| {
                    format!("Request failed with status code {}", status.as_u16())
                });
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode { source: e })?;

        match unwrap_envelope(body) {
            Unwrapped::Data(data) => Ok(data),
            Unwrapped::Rejected(message) => Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            }),
        }
    }

    // -- Movies ---------------------------------------------------------------

    /// `GET /movies` with optional server-side filters.
    pub async fn movies(&self, filters: &FilterParams) -> Result<Vec<Movie>, ApiError> {
        self.get(&["movies"], &filters.query_pairs()).await
    }

    pub async fn featured_movies(&self) -> Result<Vec<Movie>, ApiError> {
        self.get(&["movies", "featured"], &[]).await
    }

    pub async fn movie(&self, id: &str) -> Result<MovieDetails, ApiError> {
        self.get(&["movies", id], &[]).await
    }

    pub async fn related_movies(&self, id: &str) -> Result<Vec<Movie>, ApiError> {
        self.get(&["movies", id, "related"], &[]).await
    }

    pub async fn movies_by_genre(&self, genre_id: &str) -> Result<Vec<Movie>, ApiError> {
        self.get(&["movies"], &[("genreId", genre_id)]).await
    }

    pub async fn movies_by_actor(&self, actor_id: &str) -> Result<Vec<Movie>, ApiError> {
        self.get(&["movies"], &[("actorId", actor_id)]).await
    }

    pub async fn movies_by_director(&self, director_id: &str) -> Result<Vec<Movie>, ApiError> {
        self.get(&["movies"], &[("directorId", director_id)]).await
    }

    /// `GET /movies/search?q=&type=`. An empty query is sent without `q`.
    pub async fn search_movies(
        &self,
        query: &str,
        search_type: SearchType,
    ) -> Result<Vec<Movie>, ApiError> {
        let mut params = Vec::with_capacity(2);
        if !query.is_empty() {
            params.push(("q", query));
        }
        params.push(("type", search_type.as_str()));
        self.get(&["movies", "search"], &params).await
    }

    // -- Genres ---------------------------------------------------------------

    pub async fn genres(&self) -> Result<Vec<Genre>, ApiError> {
        self.get(&["genres"], &[]).await
    }

    pub async fn genre(&self, id: &str) -> Result<Genre, ApiError> {
        self.get(&["genres", id], &[]).await
    }

    // -- People ---------------------------------------------------------------

    pub async fn actors(&self) -> Result<Vec<Actor>, ApiError> {
        self.get(&["actors"], &[]).await
    }

    pub async fn actor(&self, id: &str) -> Result<ActorProfile, ApiError> {
        self.get(&["actors", id], &[]).await
    }

    pub async fn directors(&self) -> Result<Vec<Director>, ApiError> {
        self.get(&["directors"], &[]).await
    }

    pub async fn director(&self, id: &str) -> Result<DirectorProfile, ApiError> {
        self.get(&["directors", id], &[]).await
    }
}
