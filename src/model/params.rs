use std::fmt;

use serde::{Deserialize, Serialize};

/// Which field a search query is matched against server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    Title,
    Actor,
    Director,
}

impl SearchType {
    /// Stable wire value used as the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Actor => "actor",
            Self::Director => "director",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "title" => Some(Self::Title),
            "actor" => Some(Self::Actor),
            "director" => Some(Self::Director),
            _ => None,
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server-side filter parameters for `GET /movies`.
///
/// Unset fields are omitted from the query string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director_id: Option<String>,
}

impl FilterParams {
    pub fn is_empty(&self) -> bool {
        self.genre_id.is_none() && self.actor_id.is_none() && self.director_id.is_none()
    }

    /// Query pairs in wire order: genreId, actorId, directorId.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(ref id) = self.genre_id {
            pairs.push(("genreId", id.as_str()));
        }
        if let Some(ref id) = self.actor_id {
            pairs.push(("actorId", id.as_str()));
        }
        if let Some(ref id) = self.director_id {
            pairs.push(("directorId", id.as_str()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_type_parse_matches_wire_values() {
        for ty in [SearchType::Title, SearchType::Actor, SearchType::Director] {
            assert_eq!(SearchType::parse(ty.as_str()), Some(ty));
        }
        assert_eq!(SearchType::parse("genre"), None);
    }

    #[test]
    fn query_pairs_skip_unset_filters() {
        let params = FilterParams {
            genre_id: None,
            actor_id: Some("a1".to_string()),
            director_id: Some("d1".to_string()),
        };
        assert_eq!(params.query_pairs(), vec![("actorId", "a1"), ("directorId", "d1")]);
        assert!(FilterParams::default().query_pairs().is_empty());
    }
}
