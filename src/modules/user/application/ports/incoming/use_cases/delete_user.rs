use async_trait::async_trait;

use crate::modules::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Hard delete. Succeeds whether or not the record existed.
#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteUserError>;
}
