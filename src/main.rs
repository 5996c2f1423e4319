pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::config::{AppConfig, UserStoreConfig};
use crate::modules::user::adapter::outgoing::{
    FirebaseCredentials, InMemoryUserRepository, OpenWeatherGeoResolver,
    ServiceAccountTokenSource, TimezoneLookup, UserRepositoryFirebase,
};
use crate::modules::user::application::user_use_cases::UserUseCases;
use crate::shared::api::custom_json_config;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use reqwest::Client;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

const STORE_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct AppState {
    pub user: UserUseCases,
}

#[cfg(not(tarpaulin_include))]
fn build_user_use_cases(config: &AppConfig) -> Result<UserUseCases, Box<dyn Error>> {
    let geo_resolver = OpenWeatherGeoResolver::new(
        config.geo.base_url.clone(),
        config.geo.api_key.clone(),
        TimezoneLookup::new(),
    )?;
    let country = config.geo.default_country.as_str();

    let use_cases = match &config.store {
        UserStoreConfig::Memory => {
            tracing::warn!("USER_STORE=memory: users are kept in process memory only");
            UserUseCases::wire(InMemoryUserRepository::new(), geo_resolver, country)
        }
        UserStoreConfig::Firebase(firebase) => {
            let client = Arc::new(
                Client::builder()
                    .timeout(Duration::from_secs(STORE_TIMEOUT_SECS))
                    .build()?,
            );

            let credentials = match &firebase.service_account {
                Some(account) => FirebaseCredentials::ServiceAccount(
                    ServiceAccountTokenSource::new(
                        Arc::clone(&client),
                        account.client_email.clone(),
                        &account.private_key,
                    )?,
                ),
                None => {
                    tracing::warn!("No Firebase service account configured, using anonymous access");
                    FirebaseCredentials::Anonymous
                }
            };

            let repository =
                UserRepositoryFirebase::new(client, &firebase.database_url, credentials)?;
            info!("Using Firebase Realtime Database at {}", firebase.database_url);
            UserUseCases::wire(repository, geo_resolver, country)
        }
    };

    Ok(use_cases)
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    let server_url = config.bind_address();

    let state = AppState {
        user: build_user_use_cases(&config)?,
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::index);
    cfg.service(crate::health::health);
    // Users
    cfg.service(crate::modules::user::adapter::incoming::web::routes::create_user_handler);
    cfg.service(crate::modules::user::adapter::incoming::web::routes::get_users_handler);
    cfg.service(crate::modules::user::adapter::incoming::web::routes::get_user_by_id_handler);
    cfg.service(crate::modules::user::adapter::incoming::web::routes::patch_user_handler);
    cfg.service(crate::modules::user::adapter::incoming::web::routes::delete_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
