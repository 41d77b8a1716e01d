//! Movie entity.

use serde_json::Value;

use super::{Entity, JsonObject, into_object};

/// A movie, from a search result or an item fetch.
///
/// Movies are keyed by `title` rather than `name`.
#[derive(Debug, Clone)]
pub struct Movie {
    raw: JsonObject,
}

impl Movie {
    /// Wraps a parsed search-result or movie-details object.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            raw: into_object(value),
        }
    }

    /// Movie title, empty when absent.
    #[must_use]
    pub fn title(&self) -> &str {
        self.get_str("title").unwrap_or_default()
    }

    /// Release date as reported (`YYYY-MM-DD`).
    #[must_use]
    pub fn release_date(&self) -> Option<&str> {
        self.get_str("release_date")
    }

    /// Overview text, empty when absent.
    #[must_use]
    pub fn overview(&self) -> &str {
        self.get_str("overview").unwrap_or_default()
    }

    /// Poster image path.
    #[must_use]
    pub fn poster(&self) -> Option<&str> {
        self.get_str("poster_path")
    }

    /// Popularity score.
    #[must_use]
    pub fn popularity(&self) -> Option<f64> {
        self.get_f64("popularity")
    }
}

impl Entity for Movie {
    fn raw(&self) -> &JsonObject {
        &self.raw
    }
}
