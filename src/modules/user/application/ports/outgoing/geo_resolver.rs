use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{GeoLocation, Zip};

/// Country used for zip lookups when the caller does not configure one.
pub const DEFAULT_COUNTRY: &str = "US";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoResolveError {
    /// The provider answered but without a coordinate pair
    #[error("Could not resolve coordinates for zip {0}")]
    MissingCoordinates(String),

    /// Transport failure, non-success status or undecodable body
    #[error("Geolocation provider error: {0}")]
    Upstream(String),
}

#[async_trait]
pub trait GeoResolver: Send + Sync {
    async fn resolve(&self, zip: &Zip, country: &str) -> Result<GeoLocation, GeoResolveError>;
}

#[async_trait]
impl<T: GeoResolver + ?Sized> GeoResolver for Arc<T> {
    async fn resolve(&self, zip: &Zip, country: &str) -> Result<GeoLocation, GeoResolveError> {
        (**self).resolve(zip, country).await
    }
}
