use actix_web::{delete, web, Responder};
use tracing::error;

use crate::{
    modules::user::application::{
        domain::entities::UserId, ports::incoming::use_cases::DeleteUserError,
    },
    shared::api::{ApiError, ApiResponse},
    AppState,
};

/// Delete a user
///
/// Idempotent: an unknown id still answers 204.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "Store-assigned user id")),
    responses(
        (status = 204, description = "Deleted, or never existed"),
        (status = 500, description = "Store failure", body = ApiError),
    )
)]
#[delete("/api/users/{id}")]
pub async fn delete_user_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data.user.delete.execute(user_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteUserError::RepositoryError(e)) => {
            error!("Repository error deleting user: {}", e);
            ApiResponse::internal_error()
        }
    }
}
