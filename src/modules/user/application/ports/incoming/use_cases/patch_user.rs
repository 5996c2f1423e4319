use async_trait::async_trait;

use crate::modules::user::application::domain::{
    entities::{User, UserId, Zip},
    policies::{UserInputError, UserInputPolicy},
};

//
// ──────────────────────────────────────────────────────────
// Patch User Command
// ──────────────────────────────────────────────────────────
//

/// Partial update. Holds at least one field.
#[derive(Debug, Clone)]
pub struct PatchUserCommand {
    name: Option<String>,
    zip: Option<Zip>,
}

impl PatchUserCommand {
    pub fn new(name: Option<String>, zip: Option<String>) -> Result<Self, UserInputError> {
        let (name, zip) = UserInputPolicy::validate_update(name, zip)?;
        Ok(Self { name, zip })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn zip(&self) -> Option<&Zip> {
        self.zip.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchUserError {
    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Geolocation(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PatchUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, command: PatchUserCommand)
        -> Result<User, PatchUserError>;
}
