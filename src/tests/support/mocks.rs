use async_trait::async_trait;
use mockall::mock;

use crate::modules::user::application::domain::entities::{GeoLocation, Zip};
use crate::modules::user::application::ports::outgoing::{GeoResolveError, GeoResolver};

mock! {
    pub GeoResolverMock {}

    #[async_trait]
    impl GeoResolver for GeoResolverMock {
        async fn resolve(&self, zip: &Zip, country: &str) -> Result<GeoLocation, GeoResolveError>;
    }
}
