//! Person, character and gender entities.

use chrono::NaiveDate;
use serde_json::Value;

use super::{DATE_FMT, Entity, JsonObject, into_object};

/// Performer gender, parsed from the TMDB integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// Code 0.
    Undefined,
    /// Code 1.
    Female,
    /// Code 2.
    Male,
    /// Any other code.
    Unknown,
}

impl Gender {
    /// Maps an integer code to a gender. Total over integers: codes
    /// outside {0, 1, 2} collapse to [`Gender::Unknown`].
    #[must_use]
    pub const fn parse(value: i64) -> Self {
        match value {
            0 => Self::Undefined,
            1 => Self::Female,
            2 => Self::Male,
            _ => Self::Unknown,
        }
    }

    /// Lowercase name of the gender.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Female => "female",
            Self::Male => "male",
            Self::Unknown => "unknown",
        }
    }
}

/// An individual involved in show business.
#[derive(Debug, Clone)]
pub struct Person {
    raw: JsonObject,
}

impl Person {
    /// Wraps a parsed person object.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            raw: into_object(value),
        }
    }

    /// Date of birth, `None` when absent or not in `YYYY-MM-DD` form.
    #[must_use]
    pub fn dob(&self) -> Option<NaiveDate> {
        self.get_str("birthday")
            .and_then(|raw| NaiveDate::parse_from_str(raw, DATE_FMT).ok())
    }

    /// Biography, empty when absent.
    #[must_use]
    pub fn bio(&self) -> &str {
        self.get_str("biography").unwrap_or_default()
    }

    /// Profile image path.
    #[must_use]
    pub fn profile_pic(&self) -> Option<&str> {
        self.get_str("profile_path")
    }
}

impl Entity for Person {
    fn raw(&self) -> &JsonObject {
        &self.raw
    }
}

/// A character together with its performer reference.
#[derive(Debug, Clone)]
pub struct Character {
    raw: JsonObject,
}

impl Character {
    /// Wraps a parsed cast-member object.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            raw: into_object(value),
        }
    }

    /// Performer name (the entity `name` field).
    #[must_use]
    pub fn performer(&self) -> &str {
        self.name()
    }

    /// Character name, empty when absent.
    #[must_use]
    pub fn character(&self) -> &str {
        self.get_str("character").unwrap_or_default()
    }

    /// Performer gender; an absent code maps to [`Gender::Unknown`].
    #[must_use]
    pub fn gender(&self) -> Gender {
        Gender::parse(self.get_i64("gender").unwrap_or(-1))
    }

    /// Wraps each member of a cast array.
    #[must_use]
    pub fn parse_list(values: &[Value]) -> Vec<Self> {
        values.iter().cloned().map(Self::new).collect()
    }
}

impl Entity for Character {
    fn raw(&self) -> &JsonObject {
        &self.raw
    }
}
