// Common test utilities for integration tests

use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, EntityTrait};
use std::sync::Arc;

use logistics_backend::services::{
    AdminService, AuditLogger, CredentialVerifier, EntryService, TokenService,
};
use logistics_backend::stores::{EntryStore, FileStore, LogStore, UserStore};
use logistics_backend::types::db::log_entry;
use logistics_backend::types::internal::{Claims, Role};

/// Fully wired backend over an in-memory database
pub struct TestBackend {
    pub db: DatabaseConnection,
    pub user_store: Arc<UserStore>,
    pub entry_store: Arc<EntryStore>,
    pub log_store: Arc<LogStore>,
    pub credential_verifier: Arc<CredentialVerifier>,
    pub token_service: Arc<TokenService>,
    pub entry_service: Arc<EntryService>,
    pub admin_service: Arc<AdminService>,
}

/// Creates a test database with migrations applied and wires every store and
/// service over it
pub async fn setup_backend() -> TestBackend {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let user_store = Arc::new(UserStore::new(db.clone()));
    let entry_store = Arc::new(EntryStore::new(db.clone()));
    let log_store = Arc::new(LogStore::new(db.clone()));
    let file_store = Arc::new(FileStore::new(
        std::env::temp_dir().join("logistics-backend-test-uploads"),
    ));

    let credential_verifier = Arc::new(CredentialVerifier::new(
        Arc::clone(&user_store),
        "test-pepper-for-integration-tests".to_string(),
    ));
    let token_service = Arc::new(TokenService::new(
        "test-secret-key-minimum-32-characters-long".to_string(),
    ));
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

    TestBackend {
        db,
        user_store,
        entry_store,
        log_store,
        credential_verifier,
        token_service,
        entry_service,
        admin_service,
    }
}

/// Insert a user with a hashed password; returns the user id
pub async fn seed_user(
    backend: &TestBackend,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
    active: bool,
) -> String {
    let hash = backend
        .credential_verifier
        .hash_password(password)
        .expect("Failed to hash password");

    let user_id = backend
        .user_store
        .insert(name, email, &hash, role)
        .await
        .expect("Failed to insert user");

    if !active {
        backend
            .user_store
            .set_active(&user_id, false)
            .await
            .expect("Failed to deactivate user");
    }

    user_id
}

/// Claims as the token verifier would produce them for this user
pub fn claims_for(user_id: &str, role: Role) -> Claims {
    let now = Utc::now().timestamp();
    Claims {
        sub: user_id.to_string(),
        role,
        iat: now,
        exp: now + 24 * 3600,
    }
}

/// Read all audit log rows
pub async fn all_logs(db: &DatabaseConnection) -> Vec<log_entry::Model> {
    log_entry::Entity::find()
        .all(db)
        .await
        .expect("Failed to read logs")
}

/// Wait until the fire-and-forget audit writer has produced `expected` rows
///
/// The log insert runs on a spawned task, so tests poll briefly instead of
/// racing it.
pub async fn wait_for_logs(db: &DatabaseConnection, expected: usize) -> Vec<log_entry::Model> {
    for _ in 0..100 {
        let logs = all_logs(db).await;
        if logs.len() >= expected {
            return logs;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    panic!("Timed out waiting for {} audit log rows", expected);
}

/// Give the spawned audit writer a chance to run, then assert nothing was
/// written
pub async fn assert_no_logs(db: &DatabaseConnection) {
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert!(all_logs(db).await.is_empty(), "Expected no audit log rows");
}
