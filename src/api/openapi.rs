use utoipa::OpenApi;

use crate::modules::user::adapter::incoming::web::routes::{CreateUserRequest, PatchUserRequest};
use crate::modules::user::application::domain::entities::User;
use crate::shared::api::ApiError;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Geo Users API",
        version = "1.0.0",
        description = "User records enriched with coordinates and timezone resolved from a zip code"
    ),
    paths(
        crate::modules::user::adapter::incoming::web::routes::create_user::create_user_handler,
        crate::modules::user::adapter::incoming::web::routes::get_users::get_users_handler,
        crate::modules::user::adapter::incoming::web::routes::get_single_user::get_user_by_id_handler,
        crate::modules::user::adapter::incoming::web::routes::patch_user::patch_user_handler,
        crate::modules::user::adapter::incoming::web::routes::delete_user::delete_user_handler,
    ),
    components(
        schemas(
            User,
            CreateUserRequest,
            PatchUserRequest,
            ApiError
        )
    ),
    tags(
        (name = "users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;
