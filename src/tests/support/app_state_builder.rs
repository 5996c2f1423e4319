use std::sync::Arc;

use actix_web::web;

use crate::modules::user::adapter::outgoing::InMemoryUserRepository;
use crate::modules::user::application::ports::incoming::use_cases::{
    CreateUserUseCase, DeleteUserUseCase, GetSingleUserUseCase, GetUsersUseCase, PatchUserUseCase,
};
use crate::modules::user::application::ports::outgoing::{GeoResolver, DEFAULT_COUNTRY};
use crate::modules::user::application::user_use_cases::UserUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    user: UserUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            user: UserUseCases {
                create: Arc::new(StubCreateUserUseCase),
                get_list: Arc::new(StubGetUsersUseCase),
                get_single: Arc::new(StubGetSingleUserUseCase),
                patch: Arc::new(StubPatchUserUseCase),
                delete: Arc::new(StubDeleteUserUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    /// Real services over an in-memory store.
    pub fn with_services<G>(repository: InMemoryUserRepository, geo_resolver: G) -> Self
    where
        G: GeoResolver + Clone + 'static,
    {
        Self {
            user: UserUseCases::wire(repository, geo_resolver, DEFAULT_COUNTRY),
        }
    }

    pub fn with_create_user(mut self, uc: impl CreateUserUseCase + 'static) -> Self {
        self.user.create = Arc::new(uc);
        self
    }

    pub fn with_get_users(mut self, uc: impl GetUsersUseCase + 'static) -> Self {
        self.user.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_user(mut self, uc: impl GetSingleUserUseCase + 'static) -> Self {
        self.user.get_single = Arc::new(uc);
        self
    }

    pub fn with_patch_user(mut self, uc: impl PatchUserUseCase + 'static) -> Self {
        self.user.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + 'static) -> Self {
        self.user.delete = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState { user: self.user })
    }
}
