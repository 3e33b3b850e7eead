pub mod users;

pub use users::UsersScreen;
