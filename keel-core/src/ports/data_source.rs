//! Remote account data source port
//!
//! Defines the interface for performing account operations against an
//! external endpoint (HTTP API, demo directory, etc.) together with the
//! wire model and the failure type raised at this boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Credentials, User};

/// Error raised by a data source
///
/// Implementation-defined detail lives in the message; the repository is
/// the sole caller and wraps any of these into a domain `Server` error.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Connection timed out")]
    Timeout,

    #[error("Unable to reach {0}")]
    Unreachable(String),

    /// The endpoint answered and refused the request
    #[error("{0}")]
    Rejected(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Wire model for a user as returned by a data source
///
/// Kept separate from the domain `User`; the repository converts at its
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl UserRecord {
    /// Convert the wire model into the domain entity
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            email: self.email,
            display_name: self.display_name,
        }
    }
}

/// Remote account operations
///
/// Implementations perform the actual I/O. Connectivity decisions and
/// error translation are the repository's job, not theirs.
#[async_trait]
pub trait AccountDataSource: Send + Sync {
    /// Source name (e.g. "http", "demo")
    fn name(&self) -> &str;

    /// Authenticate and return the wire-level user record
    async fn login(&self, credentials: &Credentials) -> Result<UserRecord, SourceError>;

    /// End the session on the remote side
    async fn logout(&self, everywhere: bool) -> Result<(), SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_to_entity_conversion() {
        let record = UserRecord {
            id: 1,
            email: "a@b.com".to_string(),
            display_name: Some("Ada".to_string()),
        };
        let user = record.into_user();
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.display_name.as_deref(), Some("Ada"));
    }
}
