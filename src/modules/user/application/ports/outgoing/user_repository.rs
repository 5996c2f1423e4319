// src/modules/user/application/ports/outgoing/user_repository.rs

use async_trait::async_trait;
use serde::Serialize;

use crate::modules::user::application::domain::entities::{GeoLocation, User, UserId};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Full record as it is pushed into the collection. The id is generated by
/// the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserRecord {
    pub name: String,
    pub zip: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl NewUserRecord {
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            zip: self.zip,
            latitude: self.latitude,
            longitude: self.longitude,
            timezone: self.timezone,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Patch semantics:
/// - `None` => keep stored value
/// - `Some(v)` => replace with v
/// - `updated_at` is always written
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    pub updated_at: i64,
}

impl UserPatch {
    pub fn new(updated_at: i64) -> Self {
        Self {
            name: None,
            zip: None,
            latitude: None,
            longitude: None,
            timezone: None,
            updated_at,
        }
    }

    pub fn with_location(mut self, location: &GeoLocation) -> Self {
        self.latitude = Some(location.latitude);
        self.longitude = Some(location.longitude);
        self.timezone = Some(location.timezone.clone());
        self
    }

    /// Merge onto a stored record. The record id is never touched.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(zip) = &self.zip {
            user.zip = zip.clone();
        }
        if let Some(latitude) = self.latitude {
            user.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            user.longitude = longitude;
        }
        if let Some(timezone) = &self.timezone {
            user.timezone = timezone.clone();
        }
        user.updated_at = self.updated_at;
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User not found")]
    NotFound,

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Outgoing port
// ──────────────────────────────────────────────────────────
//

/// Remote `users` collection keyed by opaque store-generated ids.
/// No transactions: last writer wins.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Empty collection yields an empty vec.
    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    async fn get_by_id(&self, id: &UserId) -> Result<User, UserRepositoryError>;

    async fn create(&self, record: NewUserRecord) -> Result<User, UserRepositoryError>;

    /// Fails with `NotFound` when the id is absent; returns the re-read record.
    async fn update_partial(
        &self,
        id: &UserId,
        patch: UserPatch,
    ) -> Result<User, UserRepositoryError>;

    /// Deleting an absent id succeeds.
    async fn delete(&self, id: &UserId) -> Result<(), UserRepositoryError>;
}
