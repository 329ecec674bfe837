pub mod auth;
pub mod common;
pub mod entries;
pub mod logs;
pub mod users;
