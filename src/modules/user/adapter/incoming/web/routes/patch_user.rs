use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    modules::user::{
        adapter::incoming::web::routes::map_input_error,
        application::{
            domain::entities::{User, UserId},
            ports::incoming::use_cases::{PatchUserCommand, PatchUserError},
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

/// Absent or `null` fields are left untouched. At least one must be given.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct PatchUserRequest {
    #[schema(example = "Ana Maria")]
    pub name: Option<String>,

    #[schema(example = "94105")]
    pub zip: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Partially update a user
///
/// A changed zip is geolocated again; otherwise location fields stay as they
/// are. `updatedAt` is refreshed on every successful call.
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "Store-assigned user id")),
    request_body = PatchUserRequest,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Invalid or empty update", body = ApiError,
            example = json!({ "error": "No fields to update" })),
        (status = 404, description = "No such user", body = ApiError),
        (status = 502, description = "New zip could not be geolocated", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError),
    )
)]
#[patch("/api/users/{id}")]
pub async fn patch_user_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<PatchUserRequest>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());
    let PatchUserRequest { name, zip } = payload.into_inner();

    let command = match PatchUserCommand::new(name, zip) {
        Ok(cmd) => cmd,
        Err(err) => return map_input_error(err),
    };

    match data.user.patch.execute(user_id, command).await {
        Ok(user) => ApiResponse::success(user),
        Err(PatchUserError::NotFound) => ApiResponse::not_found(),
        Err(PatchUserError::Geolocation(msg)) => ApiResponse::bad_gateway(&msg),
        Err(PatchUserError::RepositoryError(e)) => {
            error!("Repository error patching user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
