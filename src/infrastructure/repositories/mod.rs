pub mod mock;
pub mod users;
