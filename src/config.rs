use std::env;

use crate::modules::user::adapter::outgoing::OPENWEATHER_BASE_URL;
use crate::modules::user::application::ports::outgoing::DEFAULT_COUNTRY;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {name} value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserStoreConfig {
    Firebase(FirebaseConfig),
    /// Process-local store, lost on restart
    Memory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FirebaseConfig {
    pub database_url: String,
    pub service_account: Option<ServiceAccountConfig>,
}

#[derive(Clone, PartialEq)]
pub struct ServiceAccountConfig {
    pub client_email: String,
    pub private_key: String,
}

impl std::fmt::Debug for ServiceAccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountConfig")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeoConfig {
    pub api_key: String,
    pub base_url: String,
    pub default_country: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub geo: GeoConfig,
    pub store: UserStoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => 8080,
        };

        let geo = GeoConfig {
            api_key: var("OWM_API_KEY").ok_or(ConfigError::Missing("OWM_API_KEY"))?,
            base_url: var("OWM_BASE_URL").unwrap_or_else(|| OPENWEATHER_BASE_URL.to_string()),
            default_country: var("GEO_DEFAULT_COUNTRY")
                .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        };

        let store = match var("USER_STORE").as_deref() {
            None | Some("firebase") => UserStoreConfig::Firebase(FirebaseConfig::from_vars(&var)?),
            Some("memory") => UserStoreConfig::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "USER_STORE",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            geo,
            store,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FirebaseConfig {
    fn from_vars<F>(var: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match (var("FIREBASE_DB_URL"), var("FIREBASE_PROJECT_ID")) {
            (Some(url), _) => url,
            (None, Some(project)) => format!("https://{}-default-rtdb.firebaseio.com", project),
            (None, None) => return Err(ConfigError::Missing("FIREBASE_DB_URL")),
        };

        let service_account = match (var("FIREBASE_CLIENT_EMAIL"), var("FIREBASE_PRIVATE_KEY")) {
            (Some(client_email), Some(private_key)) => Some(ServiceAccountConfig {
                client_email,
                private_key,
            }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("FIREBASE_PRIVATE_KEY")),
            (None, Some(_)) => return Err(ConfigError::Missing("FIREBASE_CLIENT_EMAIL")),
        };

        Ok(Self {
            database_url,
            service_account,
        })
    }
}
