//! TV season and episode entities.

use serde_json::Value;

use super::{Entity, JsonObject, into_object};

/// A TV show season.
///
/// The episode list is empty on construction;
/// [`Season::parse_season`] fills it from the embedded `episodes`
/// array of a season fetch.
#[derive(Debug, Clone)]
pub struct Season {
    raw: JsonObject,
    /// Episodes, populated only by [`Season::parse_season`].
    pub episodes: Vec<Episode>,
}

impl Season {
    /// Wraps a parsed season object without touching its episodes.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            raw: into_object(value),
            episodes: Vec::new(),
        }
    }

    /// Season number within the show.
    #[must_use]
    pub fn season_number(&self) -> Option<u64> {
        self.get_u64("season_number")
    }

    /// Season overview text.
    #[must_use]
    pub fn overview(&self) -> Option<&str> {
        self.get_str("overview")
    }

    /// Poster image path.
    #[must_use]
    pub fn poster(&self) -> Option<&str> {
        self.get_str("poster_path")
    }

    /// Wraps a season object and parses its embedded `episodes` list.
    #[must_use]
    pub fn parse_season(value: Value) -> Self {
        let mut season = Self::new(value);
        season.episodes = season
            .get("episodes")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(Episode::new)
            .collect();
        season
    }
}

impl Entity for Season {
    fn raw(&self) -> &JsonObject {
        &self.raw
    }
}

/// A TV show episode.
#[derive(Debug, Clone)]
pub struct Episode {
    raw: JsonObject,
}

impl Episode {
    /// Wraps a parsed episode object.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            raw: into_object(value),
        }
    }

    /// First air date as reported (`YYYY-MM-DD`).
    #[must_use]
    pub fn air_date(&self) -> Option<&str> {
        self.get_str("air_date")
    }

    /// Episode number within the season.
    #[must_use]
    pub fn number(&self) -> Option<u64> {
        self.get_u64("episode_number")
    }

    /// Season number this episode belongs to.
    #[must_use]
    pub fn season_number(&self) -> Option<u64> {
        self.get_u64("season_number")
    }

    /// Episode overview, empty when absent.
    #[must_use]
    pub fn overview(&self) -> &str {
        self.get_str("overview").unwrap_or_default()
    }

    /// Crew list, left as opaque raw JSON.
    #[must_use]
    pub fn crew(&self) -> Option<&Value> {
        self.get("crew")
    }

    /// Guest stars, left as opaque raw JSON.
    #[must_use]
    pub fn guest_stars(&self) -> Option<&Value> {
        self.get("guest_stars")
    }
}

impl Entity for Episode {
    fn raw(&self) -> &JsonObject {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing)]

    use serde_json::json;

    use super::*;

    fn season_body() -> Value {
        json!({
            "id": 60003,
            "season_number": 1,
            "overview": "A homicide detective discovers he is a Grimm.",
            "poster_path": "/aQYDIAMp9eeYquPzKdRbxtJWbZn.jpg",
            "episodes": [
                {
                    "air_date": "2011-10-28",
                    "episode_number": 1,
                    "season_number": 1,
                    "overview": "A girl in a red hoodie disappears.",
                    "vote_average": 7.3,
                    "vote_count": 94,
                    "crew": [{"job": "Director", "name": "Marc Buckland"}],
                    "guest_stars": [{"name": "Ayanna Berkshire", "gender": 1}]
                },
                {
                    "air_date": "2011-11-04",
                    "episode_number": 2,
                    "season_number": 1,
                    "overview": "Nick investigates a brutal attack.",
                    "vote_average": 7.1,
                    "vote_count": 81
                }
            ]
        })
    }

    #[test]
    fn test_new_leaves_episodes_empty() {
        // Arrange & Act
        let season = Season::new(season_body());

        // Assert
        assert!(season.episodes.is_empty());
        assert_eq!(season.season_number(), Some(1));
    }

    #[test]
    fn test_parse_season_fills_episodes() {
        // Arrange & Act
        let season = Season::parse_season(season_body());

        // Assert
        assert_eq!(season.episodes.len(), 2);
        assert_eq!(season.episodes[0].number(), Some(1));
        assert_eq!(season.episodes[1].number(), Some(2));
        assert_eq!(season.poster(), Some("/aQYDIAMp9eeYquPzKdRbxtJWbZn.jpg"));
    }

    #[test]
    fn test_parse_season_without_episodes_key() {
        // Arrange & Act
        let season = Season::parse_season(json!({"season_number": 3}));

        // Assert
        assert!(season.episodes.is_empty());
        assert_eq!(season.season_number(), Some(3));
    }

    #[test]
    fn test_episode_accessors() {
        // Arrange
        let season = Season::parse_season(season_body());
        let episode = &season.episodes[0];

        // Act & Assert
        assert_eq!(episode.air_date(), Some("2011-10-28"));
        assert_eq!(episode.season_number(), Some(1));
        assert_eq!(episode.overview(), "A girl in a red hoodie disappears.");
        assert_eq!(episode.vote_avg_cnt(), Some((7.3, 94)));
        assert!(episode.crew().is_some());
        assert!(episode.guest_stars().is_some());
    }

    #[test]
    fn test_episode_defaults() {
        // Arrange
        let episode = Episode::new(json!({}));

        // Act & Assert
        assert_eq!(episode.air_date(), None);
        assert_eq!(episode.number(), None);
        assert_eq!(episode.overview(), "");
        assert_eq!(episode.vote_avg_cnt(), None);
        assert!(episode.crew().is_none());
    }
}
