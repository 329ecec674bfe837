use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::db::user::{self, Entity as User};
use crate::types::internal::role::Role;

/// UserStore manages user accounts in the database
///
/// Password hashing lives in the credential verifier; this store only moves
/// already-hashed material.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create a new UserStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Look up a user by email (the login handle)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, InternalError> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_email", e))
    }

    /// Look up a user by id
    pub async fn find_by_id(&self, id: &str) -> Result<Option<user::Model>, InternalError> {
        User::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_id", e))
    }

    /// Insert a new active user and return its generated id
    pub async fn insert(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<String, InternalError> {
        let user_id = Uuid::new_v4().to_string();

        let new_user = user::ActiveModel {
            id: Set(user_id.clone()),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            role: Set(role.as_str().to_string()),
            is_active: Set(true),
            created_at: Set(Utc::now().timestamp()),
        };

        new_user
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_user", e))?;

        Ok(user_id)
    }

    /// Set the activation flag on an existing user
    pub async fn set_active(&self, id: &str, is_active: bool) -> Result<(), InternalError> {
        let user = user::ActiveModel {
            id: Set(id.to_string()),
            is_active: Set(is_active),
            ..Default::default()
        };

        user.update(&self.db)
            .await
            .map_err(|e| InternalError::database("set_user_active", e))?;

        Ok(())
    }
}
