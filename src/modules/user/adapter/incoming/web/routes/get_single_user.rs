use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    modules::user::application::{
        domain::entities::{User, UserId},
        ports::incoming::use_cases::GetSingleUserError,
    },
    shared::api::{ApiError, ApiResponse},
    AppState,
};

/// Get a user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "Store-assigned user id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No such user", body = ApiError,
            example = json!({ "error": "Not found" })),
        (status = 500, description = "Store failure", body = ApiError),
    )
)]
#[get("/api/users/{id}")]
pub async fn get_user_by_id_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data.user.get_single.execute(user_id).await {
        Ok(user) => ApiResponse::success(user),
        Err(GetSingleUserError::NotFound) => ApiResponse::not_found(),
        Err(GetSingleUserError::RepositoryError(e)) => {
            error!("Repository error fetching user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
