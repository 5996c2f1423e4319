use async_trait::async_trait;
use tracing::error;

use crate::modules::user::application::domain::entities::UserId;
use crate::modules::user::application::ports::{
    incoming::use_cases::{DeleteUserError, DeleteUserUseCase},
    outgoing::UserRepository,
};

pub struct DeleteUserService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> DeleteUserService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteUserUseCase for DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteUserError> {
        self.repository.delete(&user_id).await.map_err(|e| {
            error!("Failed to delete user {}: {}", user_id, e);
            DeleteUserError::RepositoryError(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::user::adapter::outgoing::InMemoryUserRepository;
    use crate::modules::user::application::ports::outgoing::UserRepositoryError;
    use crate::tests::support::fixtures::sample_record;

    #[tokio::test]
    async fn test_execute_removes_record() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(sample_record("Ana", "10001")).await.unwrap();
        let service = DeleteUserService::new(repo.clone());

        service.execute(created.id.clone()).await.unwrap();

        assert_eq!(
            repo.get_by_id(&created.id).await,
            Err(UserRepositoryError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_execute_absent_id_is_ok() {
        let service = DeleteUserService::new(InMemoryUserRepository::new());

        let result = service.execute(UserId::from("never-created")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_execute_repository_error() {
        let repo = InMemoryUserRepository::new();
        repo.fail_writes("read-only").await;
        let service = DeleteUserService::new(repo);

        let result = service.execute(UserId::from("any")).await;

        assert!(matches!(result, Err(DeleteUserError::RepositoryError(_))));
    }
}
