use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{User, UserId};
use crate::modules::user::application::ports::incoming::use_cases::{
    CreateUserCommand, CreateUserError, CreateUserUseCase, DeleteUserError, DeleteUserUseCase,
    GetSingleUserError, GetSingleUserUseCase, GetUsersError, GetUsersUseCase, PatchUserCommand,
    PatchUserError, PatchUserUseCase,
};

// Defaults for use cases a test does not exercise.

pub struct StubCreateUserUseCase;

#[async_trait]
impl CreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _command: CreateUserCommand) -> Result<User, CreateUserError> {
        Err(CreateUserError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

pub struct StubGetUsersUseCase;

#[async_trait]
impl GetUsersUseCase for StubGetUsersUseCase {
    async fn execute(&self) -> Result<Vec<User>, GetUsersError> {
        Ok(vec![])
    }
}

pub struct StubGetSingleUserUseCase;

#[async_trait]
impl GetSingleUserUseCase for StubGetSingleUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<User, GetSingleUserError> {
        Err(GetSingleUserError::NotFound)
    }
}

pub struct StubPatchUserUseCase;

#[async_trait]
impl PatchUserUseCase for StubPatchUserUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _command: PatchUserCommand,
    ) -> Result<User, PatchUserError> {
        Err(PatchUserError::NotFound)
    }
}

pub struct StubDeleteUserUseCase;

#[async_trait]
impl DeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<(), DeleteUserError> {
        Ok(())
    }
}
