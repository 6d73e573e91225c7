//! User application handlers.

mod create_user;
mod get_user_debug;

pub use create_user::{CreateUserCommand, CreateUserHandler, CreateUserResult};
pub use get_user_debug::{GetUserDebugHandler, UserDebugView};
