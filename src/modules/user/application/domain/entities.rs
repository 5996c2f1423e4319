use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-generated key of a user record.
///
/// Assigned once when the record is pushed into the `users` collection and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A postal code that already passed `UserInputPolicy::check_zip`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zip(String);

impl Zip {
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Zip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Coordinates and timezone derived from a zip code.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone name, e.g. `America/New_York`
    pub timezone: String,
    /// Offset reported by the weather provider, when it sends one
    pub utc_offset_seconds: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(value_type = String, example = "-NqK3x9aXbYc1dEfGhIj")]
    pub id: UserId,
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "10001")]
    pub zip: String,
    #[schema(example = 40.7484)]
    pub latitude: f64,
    #[schema(example = -73.9967)]
    pub longitude: f64,
    #[schema(example = "America/New_York")]
    pub timezone: String,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds, never lower than `created_at`
    pub updated_at: i64,
}
