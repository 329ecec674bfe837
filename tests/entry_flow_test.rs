mod common;

use common::{assert_no_logs, claims_for, seed_user, setup_backend, wait_for_logs, TestBackend};
use logistics_backend::errors::EntryError;
use logistics_backend::services::entry_service::CreateEntryData;
use logistics_backend::types::db::logistic_entry;
use logistics_backend::types::dto::entries::UpdateEntryRequest;
use logistics_backend::types::internal::Role;
use sea_orm::EntityTrait;

fn minimal_entry() -> CreateEntryData {
    CreateEntryData {
        exporter_name: Some("Acme Exports".to_string()),
        invoice_no: Some("INV-1001".to_string()),
        container_no: Some("MSKU1234567".to_string()),
        transporter: Some("Roadways Ltd".to_string()),
        ..Default::default()
    }
}

async fn seed_staff(backend: &TestBackend) -> String {
    seed_user(
        backend,
        "Staff",
        "staff@example.com",
        "staff-pass",
        Role::User,
        true,
    )
    .await
}

async fn seed_admin(backend: &TestBackend) -> String {
    seed_user(
        backend,
        "Admin",
        "admin@example.com",
        "admin-pass",
        Role::SuperAdmin,
        true,
    )
    .await
}

#[tokio::test]
async fn test_create_entry_writes_row_and_one_create_log() {
    let backend = setup_backend().await;
    let staff_id = seed_staff(&backend).await;
    let claims = claims_for(&staff_id, Role::User);

    let entry_id = backend
        .entry_service
        .create(&claims, minimal_entry(), None)
        .await
        .expect("Expected entry creation to succeed");

    let entry = logistic_entry::Entity::find_by_id(entry_id)
        .one(&backend.db)
        .await
        .unwrap()
        .expect("Expected entry row");
    assert_eq!(entry.user_id, staff_id);
    assert_eq!(entry.invoice_no, "INV-1001");
    assert_eq!(entry.value, 0.0);

    let logs = wait_for_logs(&backend.db, 1).await;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action, "CREATE");
    assert_eq!(logs[0].entry_id, Some(entry_id));
    assert_eq!(logs[0].user_id, staff_id);
}

#[tokio::test]
async fn test_create_entry_missing_exporter_name_writes_nothing() {
    let backend = setup_backend().await;
    let staff_id = seed_staff(&backend).await;
    let claims = claims_for(&staff_id, Role::User);

    let mut data = minimal_entry();
    data.exporter_name = None;

    let result = backend.entry_service.create(&claims, data, None).await;

    assert!(matches!(result, Err(EntryError::MissingRequiredFields(_))));
    assert!(logistic_entry::Entity::find()
        .all(&backend.db)
        .await
        .unwrap()
        .is_empty());
    assert_no_logs(&backend.db).await;
}

#[tokio::test]
async fn test_admin_list_includes_creator_identity_and_staff_list_does_not() {
    let backend = setup_backend().await;
    let staff_id = seed_staff(&backend).await;
    let admin_id = seed_admin(&backend).await;

    backend
        .entry_service
        .create(&claims_for(&staff_id, Role::User), minimal_entry(), None)
        .await
        .unwrap();

    let admin_view = backend
        .entry_service
        .list(&claims_for(&admin_id, Role::SuperAdmin))
        .await
        .unwrap();
    assert_eq!(admin_view.len(), 1);
    assert_eq!(admin_view[0].created_by_name.as_deref(), Some("Staff"));
    assert_eq!(
        admin_view[0].created_by_email.as_deref(),
        Some("staff@example.com")
    );

    let staff_view = backend
        .entry_service
        .list(&claims_for(&staff_id, Role::User))
        .await
        .unwrap();
    assert_eq!(staff_view.len(), 1);
    assert!(staff_view[0].created_by_name.is_none());
    assert!(staff_view[0].created_by_email.is_none());
}

#[tokio::test]
async fn test_staff_update_keeps_only_staff_editable_fields() {
    let backend = setup_backend().await;
    let staff_id = seed_staff(&backend).await;
    let claims = claims_for(&staff_id, Role::User);

    let entry_id = backend
        .entry_service
        .create(&claims, minimal_entry(), None)
        .await
        .unwrap();

    let payload = UpdateEntryRequest {
        invoice_no: Some("INV-TAMPERED".to_string()),
        remarks: Some("inspected at gate".to_string()),
        ..Default::default()
    };

    backend
        .entry_service
        .update(&claims, entry_id, payload)
        .await
        .expect("Expected update to succeed");

    let entry = logistic_entry::Entity::find_by_id(entry_id)
        .one(&backend.db)
        .await
        .unwrap()
        .unwrap();
    // the identifying field is untouched; only the staff-editable field moved
    assert_eq!(entry.invoice_no, "INV-1001");
    assert_eq!(entry.remarks.as_deref(), Some("inspected at gate"));
}

#[tokio::test]
async fn test_staff_update_with_no_editable_field_is_rejected_before_any_write() {
    let backend = setup_backend().await;
    let staff_id = seed_staff(&backend).await;
    let claims = claims_for(&staff_id, Role::User);

    let entry_id = backend
        .entry_service
        .create(&claims, minimal_entry(), None)
        .await
        .unwrap();
    wait_for_logs(&backend.db, 1).await;

    let payload = UpdateEntryRequest {
        invoice_no: Some("INV-TAMPERED".to_string()),
        ..Default::default()
    };

    let result = backend.entry_service.update(&claims, entry_id, payload).await;

    assert!(matches!(result, Err(EntryError::NoValidFields(_))));

    let entry = logistic_entry::Entity::find_by_id(entry_id)
        .one(&backend.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entry.invoice_no, "INV-1001");

    // still only the CREATE log - the rejected update logged nothing
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert_eq!(common::all_logs(&backend.db).await.len(), 1);
}

#[tokio::test]
async fn test_admin_update_may_change_identifying_fields() {
    let backend = setup_backend().await;
    let staff_id = seed_staff(&backend).await;
    let admin_id = seed_admin(&backend).await;

    let entry_id = backend
        .entry_service
        .create(&claims_for(&staff_id, Role::User), minimal_entry(), None)
        .await
        .unwrap();

    let payload = UpdateEntryRequest {
        invoice_no: Some("INV-2002".to_string()),
        detention_charges: Some(1250.5),
        ..Default::default()
    };

    backend
        .entry_service
        .update(&claims_for(&admin_id, Role::SuperAdmin), entry_id, payload)
        .await
        .expect("Expected admin update to succeed");

    let entry = logistic_entry::Entity::find_by_id(entry_id)
        .one(&backend.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entry.invoice_no, "INV-2002");
    assert_eq!(entry.detention_charges, 1250.5);
}

#[tokio::test]
async fn test_successful_update_writes_exactly_one_update_log() {
    let backend = setup_backend().await;
    let staff_id = seed_staff(&backend).await;
    let claims = claims_for(&staff_id, Role::User);

    let entry_id = backend
        .entry_service
        .create(&claims, minimal_entry(), None)
        .await
        .unwrap();
    wait_for_logs(&backend.db, 1).await;

    let payload = UpdateEntryRequest {
        status: Some("CLEARED".to_string()),
        ..Default::default()
    };

    backend
        .entry_service
        .update(&claims, entry_id, payload)
        .await
        .unwrap();

    let logs = wait_for_logs(&backend.db, 2).await;
    let update_logs: Vec<_> = logs.iter().filter(|l| l.action == "UPDATE").collect();
    assert_eq!(update_logs.len(), 1);
    assert_eq!(update_logs[0].entry_id, Some(entry_id));
    assert_eq!(update_logs[0].user_id, staff_id);
}

#[tokio::test]
async fn test_update_of_missing_entry_is_not_found() {
    let backend = setup_backend().await;
    let admin_id = seed_admin(&backend).await;

    let payload = UpdateEntryRequest {
        remarks: Some("x".to_string()),
        ..Default::default()
    };

    let result = backend
        .entry_service
        .update(&claims_for(&admin_id, Role::SuperAdmin), 9999, payload)
        .await;

    assert!(matches!(result, Err(EntryError::EntryNotFound(_))));
    assert_no_logs(&backend.db).await;
}

#[tokio::test]
async fn test_staff_cannot_delete_and_entry_survives() {
    let backend = setup_backend().await;
    let staff_id = seed_staff(&backend).await;
    let claims = claims_for(&staff_id, Role::User);

    let entry_id = backend
        .entry_service
        .create(&claims, minimal_entry(), None)
        .await
        .unwrap();
    wait_for_logs(&backend.db, 1).await;

    let result = backend.entry_service.delete(&claims, entry_id).await;

    assert!(matches!(result, Err(EntryError::AccessDenied(_))));
    assert!(logistic_entry::Entity::find_by_id(entry_id)
        .one(&backend.db)
        .await
        .unwrap()
        .is_some());

    // dev admins are equally locked out of deletion
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
        .entry_service
        .delete(&claims_for(&dev_id, Role::DevAdmin), entry_id)
        .await;
    assert!(matches!(result, Err(EntryError::AccessDenied(_))));
}

#[tokio::test]
async fn test_super_admin_delete_removes_row_and_logs_delete() {
    let backend = setup_backend().await;
    let staff_id = seed_staff(&backend).await;
    let admin_id = seed_admin(&backend).await;
    let admin_claims = claims_for(&admin_id, Role::SuperAdmin);

    let entry_id = backend
        .entry_service
        .create(&claims_for(&staff_id, Role::User), minimal_entry(), None)
        .await
        .unwrap();
    wait_for_logs(&backend.db, 1).await;

    backend
        .entry_service
        .delete(&admin_claims, entry_id)
        .await
        .expect("Expected delete to succeed");

    assert!(logistic_entry::Entity::find_by_id(entry_id)
        .one(&backend.db)
        .await
        .unwrap()
        .is_none());

    let logs = wait_for_logs(&backend.db, 2).await;
    let delete_logs: Vec<_> = logs.iter().filter(|l| l.action == "DELETE").collect();
    assert_eq!(delete_logs.len(), 1);
    assert_eq!(delete_logs[0].entry_id, Some(entry_id));
    assert_eq!(delete_logs[0].user_id, admin_id);
}

#[tokio::test]
async fn test_delete_of_missing_entry_is_not_found() {
    let backend = setup_backend().await;
    let admin_id = seed_admin(&backend).await;

    let result = backend
        .entry_service
        .delete(&claims_for(&admin_id, Role::SuperAdmin), 12345)
        .await;

    assert!(matches!(result, Err(EntryError::EntryNotFound(_))));
}
