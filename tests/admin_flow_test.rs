mod common;

use common::{claims_for, seed_user, setup_backend, wait_for_logs};
use logistics_backend::errors::AdminError;
use logistics_backend::types::dto::users::CreateUserRequest;
use logistics_backend::types::internal::Role;

fn new_user_request(role: Role) -> CreateUserRequest {
    CreateUserRequest {
        name: "New Dev".to_string(),
        email: "newdev@example.com".to_string(),
        password: "initial-pass".to_string(),
        role,
    }
}

#[tokio::test]
async fn test_super_admin_creates_dev_admin_who_can_then_log_in() {
    let backend = setup_backend().await;
    let admin_id = seed_user(
        &backend,
        "Admin",
        "admin@example.com",
        "admin-pass",
        Role::SuperAdmin,
        true,
    )
    .await;

    let user_id = backend
        .admin_service
        .create_user(
            &claims_for(&admin_id, Role::SuperAdmin),
            new_user_request(Role::DevAdmin),
        )
        .await
        .expect("Expected user creation to succeed");

    // the created account is immediately usable with the chosen password
    let verified = backend
        .credential_verifier
        .verify("newdev@example.com", "initial-pass")
        .await
        .expect("Expected new account to authenticate");
    assert_eq!(verified.id, user_id);
    assert_eq!(verified.role, Role::DevAdmin);

    let logs = wait_for_logs(&backend.db, 1).await;
    assert_eq!(logs[0].action, "CREATE_USER");
    assert_eq!(logs[0].entry_id, None);
    assert_eq!(logs[0].user_id, admin_id);
    assert!(logs[0].description.contains("newdev@example.com"));
}

#[tokio::test]
async fn test_non_super_admin_cannot_create_users() {
    let backend = setup_backend().await;
    let dev_id = seed_user(
        &backend,
        "Dev",
        "dev@example.com",
        "dev-pass",
        Role::DevAdmin,
        true,
    )
    .await;

    let result = backend
        .admin_service
        .create_user(
            &claims_for(&dev_id, Role::DevAdmin),
            new_user_request(Role::User),
        )
        .await;

    assert!(matches!(result, Err(AdminError::AccessDenied(_))));
}

#[tokio::test]
async fn test_created_role_must_be_user_or_dev_admin() {
    let backend = setup_backend().await;
    let admin_id = seed_user(
        &backend,
        "Admin",
        "admin@example.com",
        "admin-pass",
        Role::SuperAdmin,
        true,
    )
    .await;

    let result = backend
        .admin_service
        .create_user(
            &claims_for(&admin_id, Role::SuperAdmin),
            new_user_request(Role::SuperAdmin),
        )
        .await;

    assert!(matches!(result, Err(AdminError::InvalidRole(_))));
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let backend = setup_backend().await;
    let admin_id = seed_user(
        &backend,
        "Admin",
        "admin@example.com",
        "admin-pass",
        Role::SuperAdmin,
        true,
    )
    .await;
    seed_user(
        &backend,
        "Existing",
        "newdev@example.com",
        "pass",
        Role::User,
        true,
    )
    .await;

    let result = backend
        .admin_service
        .create_user(
            &claims_for(&admin_id, Role::SuperAdmin),
            new_user_request(Role::User),
        )
        .await;

    assert!(matches!(result, Err(AdminError::DuplicateEmail(_))));
}

#[tokio::test]
async fn test_toggle_flips_activation_state_and_logs_it() {
    let backend = setup_backend().await;
    let admin_id = seed_user(
        &backend,
        "Admin",
        "admin@example.com",
        "admin-pass",
        Role::SuperAdmin,
        true,
    )
    .await;
    let staff_id = seed_user(
        &backend,
        "Staff",
        "staff@example.com",
        "staff-pass",
        Role::User,
        true,
    )
    .await;
    let admin_claims = claims_for(&admin_id, Role::SuperAdmin);

    let is_active = backend
        .admin_service
        .toggle_user_active(&admin_claims, &staff_id)
        .await
        .expect("Expected toggle to succeed");
    assert!(!is_active);

    let logs = wait_for_logs(&backend.db, 1).await;
    assert_eq!(logs[0].action, "DEACTIVATE_USER");
    assert_eq!(logs[0].entry_id, None);

    // toggling again re-activates
    let is_active = backend
        .admin_service
        .toggle_user_active(&admin_claims, &staff_id)
        .await
        .unwrap();
    assert!(is_active);

    let logs = wait_for_logs(&backend.db, 2).await;
    assert!(logs.iter().any(|l| l.action == "ACTIVATE_USER"));
}

#[tokio::test]
async fn test_self_toggle_fails_for_every_role() {
    let backend = setup_backend().await;
    let admin_id = seed_user(
        &backend,
        "Admin",
        "admin@example.com",
        "admin-pass",
        Role::SuperAdmin,
        true,
    )
    .await;
    let staff_id = seed_user(
        &backend,
        "Staff",
        "staff@example.com",
        "staff-pass",
        Role::User,
        true,
    )
    .await;

    let result = backend
        .admin_service
        .toggle_user_active(&claims_for(&admin_id, Role::SuperAdmin), &admin_id)
        .await;
    assert!(matches!(result, Err(AdminError::CannotModifySelf(_))));

    // the self-modification rule fires before the role check
    let result = backend
        .admin_service
        .toggle_user_active(&claims_for(&staff_id, Role::User), &staff_id)
        .await;
    assert!(matches!(result, Err(AdminError::CannotModifySelf(_))));
}

#[tokio::test]
async fn test_non_super_admin_cannot_toggle_other_accounts() {
    let backend = setup_backend().await;
    let dev_id = seed_user(
        &backend,
        "Dev",
        "dev@example.com",
        "dev-pass",
        Role::DevAdmin,
        true,
    )
    .await;
    let staff_id = seed_user(
        &backend,
        "Staff",
        "staff@example.com",
        "staff-pass",
        Role::User,
        true,
    )
    .await;

    let result = backend
        .admin_service
        .toggle_user_active(&claims_for(&dev_id, Role::DevAdmin), &staff_id)
        .await;

    assert!(matches!(result, Err(AdminError::AccessDenied(_))));
}

#[tokio::test]
async fn test_toggle_of_unknown_user_is_not_found() {
    let backend = setup_backend().await;
    let admin_id = seed_user(
        &backend,
        "Admin",
        "admin@example.com",
        "admin-pass",
        Role::SuperAdmin,
        true,
    )
    .await;

    let result = backend
        .admin_service
        .toggle_user_active(&claims_for(&admin_id, Role::SuperAdmin), "no-such-user")
        .await;

    assert!(matches!(result, Err(AdminError::UserNotFound(_))));
}
