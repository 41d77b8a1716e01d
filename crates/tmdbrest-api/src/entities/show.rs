//! TV show entity.

use serde_json::Value;

use super::season::Season;
use super::{Entity, JsonObject, into_object};

/// A TV show, from a search result or an item fetch.
///
/// The season list is empty until [`Show::parse_seasons`] runs; nothing
/// populates it implicitly.
#[derive(Debug, Clone)]
pub struct Show {
    raw: JsonObject,
    /// Seasons, populated only by an explicit parse step.
    pub seasons: Vec<Season>,
}

impl Show {
    /// Wraps a parsed search-result or show-details object.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            raw: into_object(value),
            seasons: Vec::new(),
        }
    }

    /// Popularity score.
    #[must_use]
    pub fn popularity(&self) -> Option<f64> {
        self.get_f64("popularity")
    }

    /// Poster image path, to be combined with a configured base URL.
    #[must_use]
    pub fn poster(&self) -> Option<&str> {
        self.get_str("poster_path")
    }

    /// Show homepage URL.
    #[must_use]
    pub fn homepage(&self) -> Option<&str> {
        self.get_str("homepage")
    }

    /// Status of the show (e.g. "Returning Series", "Ended").
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.get_str("status")
    }

    /// Type of the show (e.g. "Scripted").
    #[must_use]
    pub fn show_type(&self) -> Option<&str> {
        self.get_str("type")
    }

    /// Number of seasons, zero when the field is absent (search results
    /// do not carry it).
    #[must_use]
    pub fn tot_seasons(&self) -> u64 {
        self.get_u64("number_of_seasons").unwrap_or(0)
    }

    /// `true` when the show is still in production.
    #[must_use]
    pub fn is_in_production(&self) -> bool {
        self.get_bool("in_production").unwrap_or(false)
    }

    /// Parses raw season objects and appends them to this show.
    pub fn parse_seasons(&mut self, seasons: &[Value]) {
        for season in seasons {
            self.seasons.push(Season::parse_season(season.clone()));
        }
    }
}

impl Entity for Show {
    fn raw(&self) -> &JsonObject {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing)]

    use serde_json::json;

    use super::*;

    fn details() -> Value {
        json!({
            "id": 39351,
            "name": "Grimm",
            "popularity": 141.7,
            "poster_path": "/iOSfTWA9fnUTRbnqrsqBO1FKBAh.jpg",
            "homepage": "http://www.nbc.com/grimm",
            "status": "Ended",
            "type": "Scripted",
            "number_of_seasons": 6,
            "in_production": false
        })
    }

    #[test]
    fn test_scalar_accessors() {
        // Arrange
        let show = Show::new(details());

        // Act & Assert
        assert_eq!(show.id(), Some(39351));
        assert_eq!(show.name(), "Grimm");
        assert_eq!(show.popularity(), Some(141.7));
        assert_eq!(show.poster(), Some("/iOSfTWA9fnUTRbnqrsqBO1FKBAh.jpg"));
        assert_eq!(show.homepage(), Some("http://www.nbc.com/grimm"));
        assert_eq!(show.status(), Some("Ended"));
        assert_eq!(show.show_type(), Some("Scripted"));
        assert_eq!(show.tot_seasons(), 6);
        assert!(!show.is_in_production());
    }

    #[test]
    fn test_search_result_defaults() {
        // Search results carry no season count or production flag.
        let show = Show::new(json!({"id": 1, "name": "Sparse"}));

        // Act & Assert
        assert_eq!(show.tot_seasons(), 0);
        assert!(!show.is_in_production());
        assert_eq!(show.poster(), None);
        assert_eq!(show.status(), None);
    }

    #[test]
    fn test_seasons_empty_until_parsed() {
        // Arrange
        let mut show = Show::new(details());
        assert!(show.seasons.is_empty());

        let raw_seasons = [
            json!({"season_number": 1, "overview": "first", "episodes": []}),
            json!({"season_number": 2, "overview": "second", "episodes": []}),
        ];

        // Act
        show.parse_seasons(&raw_seasons);

        // Assert
        assert_eq!(show.seasons.len(), 2);
        assert_eq!(show.seasons[0].season_number(), Some(1));
        assert_eq!(show.seasons[1].season_number(), Some(2));
    }
}
