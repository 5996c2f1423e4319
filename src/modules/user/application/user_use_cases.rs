use std::sync::Arc;

use crate::modules::user::application::ports::incoming::use_cases::{
    CreateUserUseCase, DeleteUserUseCase, GetSingleUserUseCase, GetUsersUseCase, PatchUserUseCase,
};
use crate::modules::user::application::ports::outgoing::{GeoResolver, UserRepository};
use crate::modules::user::application::services::{
    CreateUserService, DeleteUserService, GetSingleUserService, GetUsersService, PatchUserService,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub create: Arc<dyn CreateUserUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetUsersUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleUserUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchUserUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteUserUseCase + Send + Sync>,
}

impl UserUseCases {
    /// Wires every user service over one store and one geolocation provider.
    pub fn wire<R, G>(repository: R, geo_resolver: G, country: &str) -> Self
    where
        R: UserRepository + Clone + 'static,
        G: GeoResolver + Clone + 'static,
    {
        Self {
            create: Arc::new(
                CreateUserService::new(repository.clone(), geo_resolver.clone())
                    .with_country(country),
            ),
            get_list: Arc::new(GetUsersService::new(repository.clone())),
            get_single: Arc::new(GetSingleUserService::new(repository.clone())),
            patch: Arc::new(
                PatchUserService::new(repository.clone(), geo_resolver).with_country(country),
            ),
            delete: Arc::new(DeleteUserService::new(repository)),
        }
    }
}
