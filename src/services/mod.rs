// Services layer - business logic

pub mod admin_service;
pub mod audit_logger;
pub mod authorizer;
pub mod credential_verifier;
pub mod entry_service;
pub mod token_service;

pub use admin_service::AdminService;
pub use audit_logger::AuditLogger;
pub use credential_verifier::CredentialVerifier;
pub use entry_service::EntryService;
pub use token_service::TokenService;
