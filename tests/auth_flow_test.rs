mod common;

use common::{seed_user, setup_backend};
use logistics_backend::errors::AuthError;
use logistics_backend::types::internal::Role;

#[tokio::test]
async fn test_login_succeeds_with_valid_credentials() {
    let backend = setup_backend().await;
    let user_id = seed_user(
        &backend,
        "Asha",
        "asha@example.com",
        "correct-horse",
        Role::User,
        true,
    )
    .await;

    let user = backend
        .credential_verifier
        .verify("asha@example.com", "correct-horse")
        .await
        .expect("Expected successful verification");

    assert_eq!(user.id, user_id);
    assert_eq!(user.name, "Asha");
    assert_eq!(user.email, "asha@example.com");
    assert_eq!(user.role, Role::User);
}

#[tokio::test]
async fn test_login_fails_with_wrong_password() {
    let backend = setup_backend().await;
    seed_user(
        &backend,
        "Asha",
        "asha@example.com",
        "correct-horse",
        Role::User,
        true,
    )
    .await;

    let result = backend
        .credential_verifier
        .verify("asha@example.com", "wrong-password")
        .await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
}

#[tokio::test]
async fn test_login_fails_for_unknown_email() {
    let backend = setup_backend().await;

    let result = backend
        .credential_verifier
        .verify("nobody@example.com", "anything")
        .await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
}

#[tokio::test]
async fn test_inactive_user_with_correct_password_reports_account_inactive() {
    let backend = setup_backend().await;
    seed_user(
        &backend,
        "Asha",
        "asha@example.com",
        "correct-horse",
        Role::User,
        false,
    )
    .await;

    let result = backend
        .credential_verifier
        .verify("asha@example.com", "correct-horse")
        .await;

    // the distinction matters: this is an activation failure, not a
    // credential failure
    assert!(matches!(result, Err(AuthError::AccountInactive(_))));
}

#[tokio::test]
async fn test_issued_token_verifies_back_to_the_same_identity() {
    let backend = setup_backend().await;
    let user_id = seed_user(
        &backend,
        "Dev",
        "dev@example.com",
        "secret-pass",
        Role::DevAdmin,
        true,
    )
    .await;

    let user = backend
        .credential_verifier
        .verify("dev@example.com", "secret-pass")
        .await
        .unwrap();
    let token = backend.token_service.issue(&user.id, user.role).unwrap();
    let claims = backend.token_service.verify(&token).unwrap();

    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.role, Role::DevAdmin);
}

#[tokio::test]
async fn test_deactivation_does_not_invalidate_outstanding_tokens() {
    let backend = setup_backend().await;
    let user_id = seed_user(
        &backend,
        "Asha",
        "asha@example.com",
        "correct-horse",
        Role::User,
        true,
    )
    .await;

    let token = backend.token_service.issue(&user_id, Role::User).unwrap();

    backend.user_store.set_active(&user_id, false).await.unwrap();

    // verification is signature + expiry only; the staleness window is a
    // documented trade-off
    let claims = backend.token_service.verify(&token).unwrap();
    assert_eq!(claims.sub, user_id);
}
