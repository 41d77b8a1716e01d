//! Site configuration: image base URLs and size tokens.

use serde_json::Value;

use super::{Entity, JsonObject, into_object};

/// Sentinel size substituted for absent or unknown size tokens.
pub const ORIGINAL_SIZE: &str = "original";

/// Image-serving configuration returned by the `configuration`
/// endpoint: base URLs plus the valid size tokens per asset class.
#[derive(Debug, Clone)]
pub struct Configuration {
    raw: JsonObject,
}

impl Configuration {
    /// Wraps a parsed configuration object.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            raw: into_object(value),
        }
    }

    fn images_str(&self, key: &str) -> &str {
        self.get("images")
            .and_then(|images| images.get(key))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    fn size_list(&self, key: &str) -> Vec<&str> {
        self.get("images")
            .and_then(|images| images.get(key))
            .and_then(Value::as_array)
            .map(|sizes| sizes.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    fn valid_size<'a>(list: &[&str], size: Option<&'a str>) -> &'a str {
        match size {
            Some(token) if list.contains(&token) => token,
            _ => ORIGINAL_SIZE,
        }
    }

    /// Plain base URL for images, empty when absent.
    #[must_use]
    pub fn img_base_url(&self) -> &str {
        self.images_str("base_url")
    }

    /// HTTPS base URL for images, empty when absent.
    #[must_use]
    pub fn img_secure_base_url(&self) -> &str {
        self.images_str("secure_base_url")
    }

    /// Valid backdrop size tokens.
    #[must_use]
    pub fn backdrop_sizes(&self) -> Vec<&str> {
        self.size_list("backdrop_sizes")
    }

    /// Valid logo size tokens.
    #[must_use]
    pub fn logo_sizes(&self) -> Vec<&str> {
        self.size_list("logo_sizes")
    }

    /// Valid poster size tokens.
    #[must_use]
    pub fn poster_sizes(&self) -> Vec<&str> {
        self.size_list("poster_sizes")
    }

    /// Valid profile size tokens.
    #[must_use]
    pub fn profile_sizes(&self) -> Vec<&str> {
        self.size_list("profile_sizes")
    }

    /// Valid still size tokens.
    #[must_use]
    pub fn still_sizes(&self) -> Vec<&str> {
        self.size_list("still_sizes")
    }

    /// Change-key strings.
    #[must_use]
    pub fn change_keys(&self) -> Vec<&str> {
        self.get("change_keys")
            .and_then(Value::as_array)
            .map(|keys| keys.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// `size` when it is a listed poster size, [`ORIGINAL_SIZE`]
    /// otherwise.
    #[must_use]
    pub fn poster_size<'a>(&self, size: Option<&'a str>) -> &'a str {
        Self::valid_size(&self.poster_sizes(), size)
    }

    /// `size` when it is a listed profile size, [`ORIGINAL_SIZE`]
    /// otherwise.
    #[must_use]
    pub fn profile_size<'a>(&self, size: Option<&'a str>) -> &'a str {
        Self::valid_size(&self.profile_sizes(), size)
    }

    /// `size` when it is a listed still size, [`ORIGINAL_SIZE`]
    /// otherwise.
    #[must_use]
    pub fn still_size<'a>(&self, size: Option<&'a str>) -> &'a str {
        Self::valid_size(&self.still_sizes(), size)
    }

    /// `size` when it is a listed backdrop size, [`ORIGINAL_SIZE`]
    /// otherwise.
    #[must_use]
    pub fn backdrop_size<'a>(&self, size: Option<&'a str>) -> &'a str {
        Self::valid_size(&self.backdrop_sizes(), size)
    }

    /// `size` when it is a listed logo size, [`ORIGINAL_SIZE`]
    /// otherwise.
    #[must_use]
    pub fn logo_size<'a>(&self, size: Option<&'a str>) -> &'a str {
        Self::valid_size(&self.logo_sizes(), size)
    }

    /// Base-URL prefix for a poster of the given (validated) size.
    #[must_use]
    pub fn poster_img_path(&self, size: Option<&str>) -> String {
        format!("{}{}/", self.img_base_url(), self.poster_size(size))
    }

    /// Base-URL prefix for a profile image of the given size.
    #[must_use]
    pub fn profile_img_path(&self, size: Option<&str>) -> String {
        format!("{}{}/", self.img_base_url(), self.profile_size(size))
    }

    /// Base-URL prefix for a still of the given size.
    #[must_use]
    pub fn still_img_path(&self, size: Option<&str>) -> String {
        format!("{}{}/", self.img_base_url(), self.still_size(size))
    }
}

impl Entity for Configuration {
    fn raw(&self) -> &JsonObject {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn config() -> Configuration {
        Configuration::new(json!({
            "images": {
                "base_url": "http://image.tmdb.org/t/p/",
                "secure_base_url": "https://image.tmdb.org/t/p/",
                "backdrop_sizes": ["w300", "w780", "w1280", "original"],
                "logo_sizes": ["w45", "w92", "w154", "w185", "original"],
                "poster_sizes": ["w92", "w154", "w185", "w342", "w500", "w780", "original"],
                "profile_sizes": ["w45", "w185", "h632", "original"],
                "still_sizes": ["w92", "w185", "w300", "original"]
            },
            "change_keys": ["adult", "air_date", "also_known_as"]
        }))
    }

    #[test]
    fn test_base_urls() {
        // Arrange
        let conf = config();

        // Act & Assert
        assert_eq!(conf.img_base_url(), "http://image.tmdb.org/t/p/");
        assert_eq!(conf.img_secure_base_url(), "https://image.tmdb.org/t/p/");
    }

    #[test]
    fn test_size_lists() {
        // Arrange
        let conf = config();

        // Act & Assert
        assert_eq!(conf.poster_sizes().len(), 7);
        assert_eq!(conf.profile_sizes(), vec!["w45", "w185", "h632", "original"]);
        assert_eq!(conf.change_keys(), vec!["adult", "air_date", "also_known_as"]);
    }

    #[test]
    fn test_valid_size_is_kept() {
        // Arrange
        let conf = config();

        // Act & Assert
        assert_eq!(conf.poster_size(Some("w342")), "w342");
        assert_eq!(conf.still_size(Some("w300")), "w300");
    }

    #[test]
    fn test_unknown_size_falls_back_to_original() {
        // Arrange
        let conf = config();

        // Act & Assert
        assert_eq!(conf.poster_size(Some("w999")), ORIGINAL_SIZE);
        assert_eq!(conf.poster_size(None), ORIGINAL_SIZE);
        assert_eq!(conf.backdrop_size(Some("")), ORIGINAL_SIZE);
    }

    #[test]
    fn test_img_path_prefixes() {
        // Arrange
        let conf = config();

        // Act & Assert
        assert_eq!(
            conf.poster_img_path(Some("w342")),
            "http://image.tmdb.org/t/p/w342/"
        );
        assert_eq!(
            conf.profile_img_path(Some("bogus")),
            "http://image.tmdb.org/t/p/original/"
        );
    }

    #[test]
    fn test_empty_configuration() {
        // Arrange
        let conf = Configuration::new(json!({}));

        // Act & Assert
        assert_eq!(conf.img_base_url(), "");
        assert!(conf.poster_sizes().is_empty());
        assert_eq!(conf.poster_size(Some("w342")), ORIGINAL_SIZE);
    }
}
