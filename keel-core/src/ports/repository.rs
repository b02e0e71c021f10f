//! Account repository port
//!
//! The domain-facing boundary over the remote account source and the local
//! session store. Implementations decide whether an operation can reach
//! the remote side and translate source-level failures into domain errors.

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{Credentials, Session, User};

/// Account repository abstraction
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Authenticate against the remote source and persist the session
    async fn login(&self, credentials: &Credentials) -> Result<User>;

    /// End the remote session and clear the local one
    ///
    /// With `everywhere` set, every session for this user is ended, not
    /// just the local one.
    async fn logout(&self, everywhere: bool) -> Result<()>;

    /// The locally persisted session, if any
    async fn current_session(&self) -> Result<Option<Session>>;
}
