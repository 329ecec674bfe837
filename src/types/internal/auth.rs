use serde::{Deserialize, Serialize};

use crate::types::internal::role::Role;

/// JWT Claims structure
///
/// Validity is fully determined by signature and expiry at verification time.
/// The datastore is not consulted again, so a deactivated user keeps a working
/// token until it expires (at most 24 hours) - an accepted staleness window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,

    /// Role embedded at issuance
    pub role: Role,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// User identity returned by a successful credential check
///
/// Never carries the password hash.
#[derive(Debug, Clone)]
pub struct VerifiedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}
