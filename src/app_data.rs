use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::BootstrapSettings;
use crate::services::{AdminService, AuditLogger, CredentialVerifier, EntryService, TokenService};
use crate::stores::{EntryStore, FileStore, LogStore, UserStore};

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once in main.rs and shared across the API
/// structs via Arc, so no component reaches for ambient globals and every
/// collaborator can be swapped for a fake in tests.
pub struct AppData {
    pub db: DatabaseConnection,
    pub user_store: Arc<UserStore>,
    pub entry_store: Arc<EntryStore>,
    pub log_store: Arc<LogStore>,
    pub file_store: Arc<FileStore>,
    pub credential_verifier: Arc<CredentialVerifier>,
    pub token_service: Arc<TokenService>,
    pub audit_logger: Arc<AuditLogger>,
    pub entry_service: Arc<EntryService>,
    pub admin_service: Arc<AdminService>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database connection must already be established and migrated.
    pub fn init(db: DatabaseConnection, settings: &BootstrapSettings) -> Self {
        tracing::debug!("Creating stores and services...");

        let user_store = Arc::new(UserStore::new(db.clone()));
        let entry_store = Arc::new(EntryStore::new(db.clone()));
        let log_store = Arc::new(LogStore::new(db.clone()));
        let file_store = Arc::new(FileStore::new(settings.upload_dir().clone()));

        let credential_verifier = Arc::new(CredentialVerifier::new(
            Arc::clone(&user_store),
            settings.password_pepper().to_string(),
        ));
        let token_service = Arc::new(TokenService::new(settings.jwt_secret().to_string()));
        let audit_logger = Arc::new(AuditLogger::new(Arc::clone(&log_store)));

        let entry_service = Arc::new(EntryService::new(
            Arc::clone(&entry_store),
            Arc::clone(&file_store),
            Arc::clone(&audit_logger),
        ));
        let admin_service = Arc::new(AdminService::new(
            Arc::clone(&user_store),
            Arc::clone(&credential_verifier),
            Arc::clone(&audit_logger),
        ));

        tracing::debug!("Stores and services created");

        Self {
            db,
            user_store,
            entry_store,
            log_store,
            file_store,
            credential_verifier,
            token_service,
            audit_logger,
            entry_service,
            admin_service,
        }
    }
}
