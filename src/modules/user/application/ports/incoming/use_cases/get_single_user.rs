use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{User, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleUserError {
    #[error("Not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<User, GetSingleUserError>;
}
