pub mod log_entry;
pub mod logistic_entry;
pub mod user;
