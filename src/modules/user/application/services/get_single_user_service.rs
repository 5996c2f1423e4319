use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{User, UserId};
use crate::modules::user::application::ports::{
    incoming::use_cases::{GetSingleUserError, GetSingleUserUseCase},
    outgoing::{UserRepository, UserRepositoryError},
};

pub struct GetSingleUserService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> GetSingleUserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSingleUserUseCase for GetSingleUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<User, GetSingleUserError> {
        self.repository
            .get_by_id(&user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => GetSingleUserError::NotFound,
                other => GetSingleUserError::RepositoryError(other.to_string()),
            })
    }
}
