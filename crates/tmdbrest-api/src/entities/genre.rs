//! Show and movie genres.

/// An `(id, name)` genre pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    id: u64,
    name: String,
}

impl Genre {
    /// Creates a genre from its id and name.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Genre identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Genre name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Converts raw `(id, name)` pairs into genres, preserving order.
    #[must_use]
    pub fn load(pairs: Vec<(u64, String)>) -> Vec<Self> {
        pairs
            .into_iter()
            .map(|(id, name)| Self::new(id, name))
            .collect()
    }
}
