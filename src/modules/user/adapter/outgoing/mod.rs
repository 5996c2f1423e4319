pub mod firebase_auth;
mod geo_resolver_openweather;
mod timezone_lookup;
mod user_repository_firebase;
mod user_repository_in_memory;

pub use firebase_auth::{FirebaseCredentials, ServiceAccountTokenSource};
pub use geo_resolver_openweather::{OpenWeatherGeoResolver, OPENWEATHER_BASE_URL};
pub use timezone_lookup::TimezoneLookup;
pub use user_repository_firebase::UserRepositoryFirebase;
pub use user_repository_in_memory::InMemoryUserRepository;
