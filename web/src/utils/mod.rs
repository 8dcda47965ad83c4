pub mod auth;
pub mod dates;
