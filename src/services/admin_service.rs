use std::sync::Arc;

use crate::errors::admin::AdminError;
use crate::services::authorizer::{self, Action};
use crate::services::{AuditLogger, CredentialVerifier};
use crate::stores::UserStore;
use crate::types::dto::users::CreateUserRequest;
use crate::types::internal::audit::LogAction;
use crate::types::internal::auth::Claims;

/// User management operations
///
/// Orchestrates the user store, credential hashing and audit logging for the
/// SUPER_ADMIN-only account actions, with the self-modification guard applied
/// before the role check so a self-target always reads as CannotModifySelf.
pub struct AdminService {
    user_store: Arc<UserStore>,
    credential_verifier: Arc<CredentialVerifier>,
    audit_logger: Arc<AuditLogger>,
}

impl AdminService {
    /// Create a new AdminService
    pub fn new(
        user_store: Arc<UserStore>,
        credential_verifier: Arc<CredentialVerifier>,
        audit_logger: Arc<AuditLogger>,
    ) -> Self {
        Self {
            user_store,
            credential_verifier,
            audit_logger,
        }
    }

    /// Create a new active user account
    ///
    /// Only SUPER_ADMIN may call this, and only USER or DEV_ADMIN accounts
    /// can be created - there is no path that mints another SUPER_ADMIN.
    pub async fn create_user(
        &self,
        claims: &Claims,
        request: CreateUserRequest,
    ) -> Result<String, AdminError> {
        if !authorizer::can_perform(claims.role, Action::CreateUser) {
            return Err(AdminError::access_denied());
        }

        if request.name.trim().is_empty()
            || request.email.trim().is_empty()
            || request.password.is_empty()
        {
            return Err(AdminError::missing_fields());
        }

        if !authorizer::allowed_new_user_role(request.role) {
            return Err(AdminError::invalid_role(request.role));
        }

        if self.user_store.find_by_email(&request.email).await?.is_some() {
            return Err(AdminError::duplicate_email());
        }

        let password_hash = self
            .credential_verifier
            .hash_password(&request.password)
            .map_err(|e| AdminError::internal_error(e.message()))?;

        let user_id = self
            .user_store
            .insert(&request.name, &request.email, &password_hash, request.role)
            .await?;

        self.audit_logger.record(
            &claims.sub,
            None,
            LogAction::CreateUser,
            format!("Created user {} ({})", request.email, request.role),
        );

        Ok(user_id)
    }

    /// Flip the activation flag on another user's account
    ///
    /// Returns the new activation state.
    pub async fn toggle_user_active(
        &self,
        claims: &Claims,
        target_id: &str,
    ) -> Result<bool, AdminError> {
        // self-target fails the same way for every role
        if claims.sub == target_id {
            return Err(AdminError::cannot_modify_self());
        }

        if !authorizer::can_perform(claims.role, Action::ToggleUserStatus) {
            return Err(AdminError::access_denied());
        }

        let user = self
            .user_store
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| AdminError::user_not_found(target_id))?;

        let new_status = !user.is_active;

        self.user_store.set_active(target_id, new_status).await?;

        let action = if new_status {
            LogAction::ActivateUser
        } else {
            LogAction::DeactivateUser
        };

        self.audit_logger.record(
            &claims.sub,
            None,
            action,
            format!("User {} status changed to {}", target_id, new_status),
        );

        Ok(new_status)
    }
}
