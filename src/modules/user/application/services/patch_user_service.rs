use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::modules::user::application::domain::entities::{User, UserId};
use crate::modules::user::application::ports::{
    incoming::use_cases::{PatchUserCommand, PatchUserError, PatchUserUseCase},
    outgoing::{GeoResolver, UserPatch, UserRepository, UserRepositoryError, DEFAULT_COUNTRY},
};
use crate::modules::user::application::services::now_millis;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct PatchUserService<R, G>
where
    R: UserRepository,
    G: GeoResolver,
{
    repository: R,
    geo_resolver: G,
    country: String,
}

impl<R, G> PatchUserService<R, G>
where
    R: UserRepository,
    G: GeoResolver,
{
    pub fn new(repository: R, geo_resolver: G) -> Self {
        Self {
            repository,
            geo_resolver,
            country: DEFAULT_COUNTRY.to_string(),
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }
}

fn map_repository_error(e: UserRepositoryError) -> PatchUserError {
    match e {
        UserRepositoryError::NotFound => PatchUserError::NotFound,
        other => PatchUserError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R, G> PatchUserUseCase for PatchUserService<R, G>
where
    R: UserRepository + Send + Sync,
    G: GeoResolver + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        command: PatchUserCommand,
    ) -> Result<User, PatchUserError> {
        let current = self
            .repository
            .get_by_id(&user_id)
            .await
            .map_err(map_repository_error)?;

        // Never let clock skew push updatedAt below createdAt.
        let mut patch = UserPatch::new(now_millis().max(current.created_at));
        patch.name = command.name().map(str::to_string);
        patch.zip = command.zip().map(|zip| zip.to_string());

        if let Some(zip) = command.zip().filter(|zip| zip.as_str() != current.zip) {
            let location = self
                .geo_resolver
                .resolve(zip, &self.country)
                .await
                .map_err(|e| {
                    warn!("Geolocation failed for zip {} (user {}): {}", zip, user_id, e);
                    PatchUserError::Geolocation(e.to_string())
                })?;
            debug!("User {} moved to {}", user_id, location.timezone);
            patch = patch.with_location(&location);
        }

        self.repository
            .update_partial(&user_id, patch)
            .await
            .map_err(|e| {
                if e != UserRepositoryError::NotFound {
                    error!("Failed to patch user {}: {}", user_id, e);
                }
                map_repository_error(e)
            })
    }
}
