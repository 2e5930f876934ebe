//! User Use Cases
//!
//! Email uniqueness is enforced here, by checking before inserting.

mod create_user;
mod delete_user;
mod list_users;
mod update_user_role;

pub use create_user::CreateUserUseCase;
pub use delete_user::DeleteUserUseCase;
pub use list_users::ListUsersUseCase;
pub use update_user_role::UpdateUserRoleUseCase;
