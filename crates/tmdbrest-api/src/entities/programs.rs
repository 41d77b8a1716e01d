//! Daily "airing today" program listings.

use serde_json::Value;

use super::{Entity, JsonObject, into_object};

/// One page of programs airing today.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct DailyTvPrograms {
    raw: JsonObject,
}

impl DailyTvPrograms {
    /// Wraps one parsed listing page.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            raw: into_object(value),
        }
    }

    /// Page number of this page.
    #[must_use]
    pub fn page(&self) -> u64 {
        self.get_u64("page").unwrap_or(0)
    }

    /// Total number of pages the listing spans.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.get_u64("total_pages").unwrap_or(0)
    }

    /// Total number of results across all pages.
    #[must_use]
    pub fn total_results(&self) -> u64 {
        self.get_u64("total_results").unwrap_or(0)
    }

    /// The `(id, name)` pairs on this page, in result order.
    #[must_use]
    pub fn shows(&self) -> Vec<(u64, String)> {
        self.get("results")
            .and_then(Value::as_array)
            .map(|results| {
                results
                    .iter()
                    .filter_map(|show| {
                        Some((
                            show.get("id")?.as_u64()?,
                            show.get("name")?.as_str()?.to_owned(),
                        ))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Entity for DailyTvPrograms {
    fn raw(&self) -> &JsonObject {
        &self.raw
    }
}

/// Ordered collection of daily program pages.
#[derive(Debug, Clone, Default)]
pub struct DailyTvProgramsCollection {
    pages: Vec<DailyTvPrograms>,
}

impl DailyTvProgramsCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page, preserving arrival order.
    pub fn add_page(&mut self, page: DailyTvPrograms) {
        self.pages.push(page);
    }

    /// The collected pages, in arrival order.
    #[must_use]
    pub fn pages(&self) -> &[DailyTvPrograms] {
        &self.pages
    }

    /// Total result count as reported by the first page, zero when
    /// empty.
    #[must_use]
    pub fn total_results(&self) -> u64 {
        self.pages.first().map_or(0, DailyTvPrograms::total_results)
    }

    /// Concatenates every page's `(id, name)` pairs in page order.
    #[must_use]
    pub fn shows(&self) -> Vec<(u64, String)> {
        let mut shows = Vec::new();
        for page in &self.pages {
            shows.extend(page.shows());
        }
        shows
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn page(no: u64, names: &[(u64, &str)]) -> DailyTvPrograms {
        let results: Vec<Value> = names
            .iter()
            .map(|(id, name)| json!({"id": id, "name": name}))
            .collect();
        DailyTvPrograms::new(json!({
            "page": no,
            "total_pages": 2,
            "total_results": 4,
            "results": results
        }))
    }

    #[test]
    fn test_page_accessors() {
        // Arrange
        let programs = page(1, &[(10, "Alpha"), (11, "Beta")]);

        // Act & Assert
        assert_eq!(programs.page(), 1);
        assert_eq!(programs.total_pages(), 2);
        assert_eq!(programs.total_results(), 4);
        assert_eq!(
            programs.shows(),
            vec![(10, String::from("Alpha")), (11, String::from("Beta"))]
        );
    }

    #[test]
    fn test_shows_skips_incomplete_entries() {
        // Arrange
        let programs = DailyTvPrograms::new(json!({
            "page": 1,
            "results": [
                {"id": 1, "name": "Kept"},
                {"id": 2},
                {"name": "No id"}
            ]
        }));

        // Act & Assert
        assert_eq!(programs.shows(), vec![(1, String::from("Kept"))]);
    }

    #[test]
    fn test_collection_concatenates_in_page_order() {
        // Arrange
        let mut collection = DailyTvProgramsCollection::new();
        collection.add_page(page(1, &[(10, "Alpha"), (11, "Beta")]));
        collection.add_page(page(2, &[(12, "Gamma"), (13, "Delta")]));

        // Act
        let shows = collection.shows();

        // Assert
        assert_eq!(
            shows,
            vec![
                (10, String::from("Alpha")),
                (11, String::from("Beta")),
                (12, String::from("Gamma")),
                (13, String::from("Delta")),
            ]
        );
        assert_eq!(collection.total_results(), 4);
        assert_eq!(collection.pages().len(), 2);
    }

    #[test]
    fn test_empty_collection() {
        // Arrange
        let collection = DailyTvProgramsCollection::new();

        // Act & Assert
        assert!(collection.shows().is_empty());
        assert_eq!(collection.total_results(), 0);
    }

    #[test]
    fn test_missing_pagination_defaults_to_zero() {
        // Arrange
        let programs = DailyTvPrograms::new(json!({}));

        // Act & Assert
        assert_eq!(programs.page(), 0);
        assert_eq!(programs.total_pages(), 0);
        assert_eq!(programs.total_results(), 0);
        assert!(programs.shows().is_empty());
    }
}
