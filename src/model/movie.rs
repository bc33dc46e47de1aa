use serde::{Deserialize, Serialize};

/// A movie summary as returned by list endpoints and stored in the watchlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub release_year: i32,
    /// Expected range 0.0–10.0; not enforced client-side.
    pub rating: f64,
    pub director: Director,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

/// Full movie record returned by `GET /movies/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_movies: Option<Vec<Movie>>,
}

impl MovieDetails {
    pub fn id(&self) -> &str {
        &self.movie.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub user: String,
    pub comment: String,
    pub rating: f64,
    /// Opaque date string, displayed as received.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Director {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
}

/// Actor record with the movies they appear in (`GET /actors/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorProfile {
    #[serde(flatten)]
    pub actor: Actor,
    #[serde(default)]
    pub movies: Vec<Movie>,
}

/// Director record with the movies they directed (`GET /directors/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorProfile {
    #[serde(flatten)]
    pub director: Director,
    #[serde(default)]
    pub movies: Vec<Movie>,
}
