pub mod audit;
pub mod auth;
pub mod entry_field;
pub mod role;

pub use audit::LogAction;
pub use auth::{Claims, VerifiedUser};
pub use entry_field::EntryField;
pub use role::Role;
