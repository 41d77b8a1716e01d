//! Read-only entity views over parsed TMDB JSON.
//!
//! Every entity wraps one already-parsed JSON object and projects typed
//! accessors over specific keys. Lookups are total: an absent key yields
//! `None` (or a documented empty/zero default), never a panic.

mod configuration;
mod genre;
mod movie;
mod person;
mod programs;
mod season;
mod show;

pub use configuration::{Configuration, ORIGINAL_SIZE};
pub use genre::Genre;
pub use movie::Movie;
pub use person::{Character, Gender, Person};
pub use programs::{DailyTvPrograms, DailyTvProgramsCollection};
pub use season::{Episode, Season};
pub use show::Show;

use serde_json::{Map, Value};

/// Date format TMDB uses for scalar date fields.
pub(crate) const DATE_FMT: &str = "%Y-%m-%d";

/// The raw JSON object an entity wraps.
pub type JsonObject = Map<String, Value>;

/// Unwraps an API value into an object, empty when the value is not a
/// JSON object.
pub(crate) fn into_object(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}

/// Common capability of every entity: total, default-returning
/// projections over the wrapped JSON object.
pub trait Entity {
    /// The wrapped JSON object.
    fn raw(&self) -> &JsonObject;

    /// Value of `key`, `None` when absent.
    fn get(&self, key: &str) -> Option<&Value> {
        self.raw().get(key)
    }

    /// String value of `key`, `None` when absent or of another type.
    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Unsigned integer value of `key`.
    fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Value::as_u64)
    }

    /// Signed integer value of `key`.
    fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Floating-point value of `key`.
    fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Boolean value of `key`.
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Unique identifier.
    fn id(&self) -> Option<u64> {
        self.get_u64("id")
    }

    /// Entity name, empty when absent.
    fn name(&self) -> &str {
        self.get_str("name").unwrap_or_default()
    }

    /// Vote average and vote count; both keys must be present.
    fn vote_avg_cnt(&self) -> Option<(f64, u64)> {
        match (self.get_f64("vote_average"), self.get_u64("vote_count")) {
            (Some(avg), Some(cnt)) => Some((avg, cnt)),
            _ => None,
        }
    }
}
