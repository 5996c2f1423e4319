use async_trait::async_trait;

use crate::modules::user::application::domain::entities::User;
use crate::modules::user::application::ports::{
    incoming::use_cases::{GetUsersError, GetUsersUseCase},
    outgoing::UserRepository,
};

pub struct GetUsersService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> GetUsersService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetUsersUseCase for GetUsersService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<User>, GetUsersError> {
        self.repository
            .list_all()
            .await
            .map_err(|e| GetUsersError::RepositoryError(e.to_string()))
    }
}
