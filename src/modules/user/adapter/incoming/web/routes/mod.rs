pub mod create_user;
pub mod delete_user;
pub mod get_single_user;
pub mod get_users;
pub mod patch_user;

pub use create_user::{create_user_handler, CreateUserRequest};
pub use delete_user::delete_user_handler;
pub use get_single_user::get_user_by_id_handler;
pub use get_users::get_users_handler;
pub use patch_user::{patch_user_handler, PatchUserRequest};

use crate::modules::user::application::domain::policies::UserInputError;
use crate::shared::api::ApiResponse;

fn map_input_error(err: UserInputError) -> actix_web::HttpResponse {
    ApiResponse::bad_request(&err.to_string())
}
