//! Local session store port

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::Session;

/// Local persistence for the current session
///
/// The local counterpart to the remote data source: reads never require
/// network connectivity.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist the session, replacing any existing one
    async fn save(&self, session: &Session) -> Result<()>;

    /// Load the persisted session, if any
    async fn load(&self) -> Result<Option<Session>>;

    /// Remove the persisted session
    async fn clear(&self) -> Result<()>;
}
