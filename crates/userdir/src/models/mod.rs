mod user;

pub use user::CreateUsername;
