use async_trait::async_trait;

use crate::modules::user::application::domain::{
    entities::{User, Zip},
    policies::{UserInputError, UserInputPolicy},
};

//
// ──────────────────────────────────────────────────────────
// Create User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    name: String,
    zip: Zip,
}

impl CreateUserCommand {
    pub fn new(name: Option<String>, zip: Option<String>) -> Result<Self, UserInputError> {
        let (name, zip) = UserInputPolicy::validate_create(name, zip)?;
        Ok(Self { name, zip })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn zip(&self) -> &Zip {
        &self.zip
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("{0}")]
    Geolocation(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, command: CreateUserCommand) -> Result<User, CreateUserError>;
}
