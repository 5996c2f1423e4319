pub mod geo_resolver;
pub mod user_repository;

pub use geo_resolver::{GeoResolveError, GeoResolver, DEFAULT_COUNTRY};
pub use user_repository::{NewUserRecord, UserPatch, UserRepository, UserRepositoryError};
