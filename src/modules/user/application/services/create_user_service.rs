use async_trait::async_trait;
use tracing::{error, warn};

use crate::modules::user::application::domain::entities::User;
use crate::modules::user::application::ports::{
    incoming::use_cases::{CreateUserCommand, CreateUserError, CreateUserUseCase},
    outgoing::{GeoResolver, NewUserRecord, UserRepository, DEFAULT_COUNTRY},
};
use crate::modules::user::application::services::now_millis;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateUserService<R, G>
where
    R: UserRepository,
    G: GeoResolver,
{
    repository: R,
    geo_resolver: G,
    country: String,
}

impl<R, G> CreateUserService<R, G>
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

#[async_trait]
impl<R, G> CreateUserUseCase for CreateUserService<R, G>
where
    R: UserRepository + Send + Sync,
    G: GeoResolver + Send + Sync,
{
    async fn execute(&self, command: CreateUserCommand) -> Result<User, CreateUserError> {
        // Nothing is persisted unless the zip resolves.
        let location = self
            .geo_resolver
            .resolve(command.zip(), &self.country)
            .await
            .map_err(|e| {
                warn!("Geolocation failed for zip {}: {}", command.zip(), e);
                CreateUserError::Geolocation(e.to_string())
            })?;

        let now = now_millis();
        let record = NewUserRecord {
            name: command.name().to_string(),
            zip: command.zip().to_string(),
            latitude: location.latitude,
            longitude: location.longitude,
            timezone: location.timezone,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(record).await.map_err(|e| {
            error!("Failed to store new user: {}", e);
            CreateUserError::RepositoryError(e.to_string())
        })
    }
}
