use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    modules::user::{
        adapter::incoming::web::routes::map_input_error,
        application::{
            domain::entities::User,
            ports::incoming::use_cases::{CreateUserCommand, CreateUserError},
        },
    },
    shared::api::{ApiError, ApiResponse},
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Only `name` and `zip` are accepted; location fields are always derived.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Ana")]
    pub name: Option<String>,

    /// 4 to 10 digits
    #[schema(example = "10001")]
    pub zip: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a user
///
/// Resolves latitude, longitude and timezone from the zip code before the
/// record is stored.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid name or zip", body = ApiError,
            example = json!({ "error": "zip must contain 4 to 10 digits" })),
        (status = 502, description = "Zip could not be geolocated", body = ApiError,
            example = json!({ "error": "Could not resolve coordinates for zip 99999" })),
        (status = 500, description = "Store failure", body = ApiError),
    )
)]
#[post("/api/users")]
pub async fn create_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> impl Responder {
    let CreateUserRequest { name, zip } = payload.into_inner();

    // 1️⃣ Build command (validation happens here)
    let command = match CreateUserCommand::new(name, zip) {
        Ok(cmd) => cmd,
        Err(err) => return map_input_error(err),
    };

    // 2️⃣ Execute use case
    match data.user.create.execute(command).await {
        Ok(user) => ApiResponse::created(user),
        Err(CreateUserError::Geolocation(msg)) => ApiResponse::bad_gateway(&msg),
        Err(CreateUserError::RepositoryError(e)) => {
            error!("Repository error creating user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
