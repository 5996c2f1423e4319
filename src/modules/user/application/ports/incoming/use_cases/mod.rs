mod create_user;
mod delete_user;
mod get_single_user;
mod get_users;
mod patch_user;

pub use create_user::{CreateUserCommand, CreateUserError, CreateUserUseCase};
pub use delete_user::{DeleteUserError, DeleteUserUseCase};
pub use get_single_user::{GetSingleUserError, GetSingleUserUseCase};
pub use get_users::{GetUsersError, GetUsersUseCase};
pub use patch_user::{PatchUserCommand, PatchUserError, PatchUserUseCase};
