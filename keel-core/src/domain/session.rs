//! Session domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::User;

/// A local login session
///
/// Created by the repository after a successful login and persisted by the
/// session store. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub user: User,
    /// Name of the data source that produced this session (e.g. "http", "demo")
    pub source: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: User, source: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            source: source.into(),
            started_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_creation() {
        let session = Session::new(User::new(1, "a@b.com"), "demo");
        assert_eq!(session.user.id, 1);
        assert_eq!(session.source, "demo");
        assert!(!session.id.is_nil());
    }
}
