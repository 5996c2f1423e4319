mod create_user_service;
mod delete_user_service;
mod get_single_user_service;
mod get_users_service;
mod patch_user_service;

pub use create_user_service::CreateUserService;
pub use delete_user_service::DeleteUserService;
pub use get_single_user_service::GetSingleUserService;
pub use get_users_service::GetUsersService;
pub use patch_user_service::PatchUserService;

/// Epoch milliseconds used for `createdAt` / `updatedAt`.
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
