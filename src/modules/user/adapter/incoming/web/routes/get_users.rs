use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    modules::user::application::{
        domain::entities::User, ports::incoming::use_cases::GetUsersError,
    },
    shared::api::{ApiError, ApiResponse},
    AppState,
};

/// List users
///
/// Returns every stored user, or an empty array when the collection is empty.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Store failure", body = ApiError),
    )
)]
#[get("/api/users")]
pub async fn get_users_handler(data: web::Data<AppState>) -> impl Responder {
    match data.user.get_list.execute().await {
        Ok(users) => ApiResponse::success(users),
        Err(GetUsersError::RepositoryError(e)) => {
            error!("Repository error listing users: {}", e);
            ApiResponse::internal_error()
        }
    }
}
