use async_trait::async_trait;

use crate::modules::user::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUsersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<User>, GetUsersError>;
}
