use std::fmt;

/// Action tags for audit log rows
///
/// Closed set - one row is written per successful mutation and the tag names
/// the mutation kind. Entry actions carry the entry id; user-management
/// actions do not reference an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogAction {
    Create,
    Update,
    Delete,
    CreateUser,
    ActivateUser,
    DeactivateUser,
}

impl LogAction {
    /// String representation stored in the `logs.action` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::CreateUser => "CREATE_USER",
            Self::ActivateUser => "ACTIVATE_USER",
            Self::DeactivateUser => "DEACTIVATE_USER",
        }
    }
}

impl fmt::Display for LogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
