//! Pure role-based authorization decisions
//!
//! No I/O happens here: every function is a plain decision over role, action
//! and payload, which is what makes the permission matrix testable in
//! isolation. The privilege order is deliberately not linear - DEV_ADMIN
//! shares log visibility with SUPER_ADMIN but has none of its exclusive
//! rights.

use crate::types::internal::entry_field::EntryField;
use crate::types::internal::role::Role;

/// Coarse actions subject to role checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateEntry,
    ReadEntries,
    UpdateEntry,
    DeleteEntry,
    ViewLogs,
    CreateUser,
    ToggleUserStatus,
}

/// Decide whether a role may perform an action
pub fn can_perform(role: Role, action: Action) -> bool {
    match action {
        Action::CreateUser | Action::DeleteEntry | Action::ToggleUserStatus => {
            role == Role::SuperAdmin
        }
        Action::ViewLogs => matches!(role, Role::SuperAdmin | Role::DevAdmin),
        Action::CreateEntry | Action::ReadEntries | Action::UpdateEntry => true,
    }
}

/// Narrow an update payload to the fields the role may write
///
/// Identity for every role with full entry-write access; for USER only the
/// staff-editable fields survive, in their original order. Callers must
/// reject an empty result instead of issuing a no-op write.
pub fn filter_entry_update<V>(role: Role, fields: Vec<(EntryField, V)>) -> Vec<(EntryField, V)> {
    match role {
        Role::User => fields
            .into_iter()
            .filter(|(field, _)| field.is_staff_editable())
            .collect(),
        Role::SuperAdmin | Role::DevAdmin => fields,
    }
}

/// Roles that may be assigned to accounts created through the API
///
/// SUPER_ADMIN is excluded: additional super-admins cannot be minted.
pub fn allowed_new_user_role(role: Role) -> bool {
    matches!(role, Role::User | Role::DevAdmin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_super_admin_exclusive_actions() {
        for action in [Action::CreateUser, Action::DeleteEntry, Action::ToggleUserStatus] {
            assert!(can_perform(Role::SuperAdmin, action));
            assert!(!can_perform(Role::DevAdmin, action));
            assert!(!can_perform(Role::User, action));
        }
    }

    #[test]
    fn test_view_logs_allows_both_admin_roles() {
        assert!(can_perform(Role::SuperAdmin, Action::ViewLogs));
        assert!(can_perform(Role::DevAdmin, Action::ViewLogs));
        assert!(!can_perform(Role::User, Action::ViewLogs));
    }

    #[test]
    fn test_entry_read_write_open_to_all_roles() {
        for role in [Role::SuperAdmin, Role::DevAdmin, Role::User] {
            assert!(can_perform(role, Action::CreateEntry));
            assert!(can_perform(role, Action::ReadEntries));
            assert!(can_perform(role, Action::UpdateEntry));
        }
    }

    #[test]
    fn test_filter_is_identity_for_admin_roles() {
        let fields = vec![
            (EntryField::InvoiceNo, "INV-1"),
            (EntryField::Remarks, "checked"),
            (EntryField::SealCharges, "450"),
        ];

        for role in [Role::SuperAdmin, Role::DevAdmin] {
            assert_eq!(filter_entry_update(role, fields.clone()), fields);
        }
    }

    #[test]
    fn test_filter_keeps_only_staff_editable_fields_for_user() {
        let fields = vec![
            (EntryField::Remarks, "x"),
            (EntryField::InvoiceNo, "y"),
        ];

        let filtered = filter_entry_update(Role::User, fields);

        assert_eq!(filtered, vec![(EntryField::Remarks, "x")]);
    }

    #[test]
    fn test_filter_preserves_input_order_for_user() {
        let fields = vec![
            (EntryField::Status, "CLEARED"),
            (EntryField::InvoiceNo, "INV-2"),
            (EntryField::Remarks, "ok"),
            (EntryField::VehicleNo, "MH-12"),
        ];

        let filtered = filter_entry_update(Role::User, fields);

        assert_eq!(
            filtered,
            vec![
                (EntryField::Status, "CLEARED"),
                (EntryField::Remarks, "ok"),
                (EntryField::VehicleNo, "MH-12"),
            ]
        );
    }

    #[test]
    fn test_filter_yields_empty_when_no_field_is_staff_editable() {
        let fields = vec![(EntryField::InvoiceNo, "y")];

        assert!(filter_entry_update(Role::User, fields).is_empty());
    }

    #[test]
    fn test_new_user_role_restricted_to_user_and_dev_admin() {
        assert!(allowed_new_user_role(Role::User));
        assert!(allowed_new_user_role(Role::DevAdmin));
        assert!(!allowed_new_user_role(Role::SuperAdmin));
    }
}
