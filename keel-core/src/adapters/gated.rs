//! Connectivity-gated account repository
//!
//! The production `AccountRepository`: checks the network monitor before
//! any remote-backed operation, translates source failures into domain
//! errors, and converts wire records into domain entities. Failures pass
//! through the use-case layer to the caller unmodified.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::result::{Error, Result};
use crate::domain::{Credentials, Session, User};
use crate::ports::{AccountDataSource, AccountRepository, NetworkMonitor, SessionStore};

/// Repository over a remote source, gated by network reachability
pub struct GatedAccountRepository {
    network: Arc<dyn NetworkMonitor>,
    remote: Arc<dyn AccountDataSource>,
    sessions: Arc<dyn SessionStore>,
}

impl GatedAccountRepository {
    pub fn new(
        network: Arc<dyn NetworkMonitor>,
        remote: Arc<dyn AccountDataSource>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            network,
            remote,
            sessions,
        }
    }

    /// Gate for remote-backed operations
    ///
    /// The check-then-act window is not atomic; connectivity may drop
    /// between this answer and the remote call, in which case the source
    /// error surfaces as a Server failure instead.
    async fn require_connectivity(&self) -> Result<()> {
        if self.network.is_connected().await {
            Ok(())
        } else {
            Err(Error::NoConnectivity)
        }
    }
}

#[async_trait]
impl AccountRepository for GatedAccountRepository {
    async fn login(&self, credentials: &Credentials) -> Result<User> {
        self.require_connectivity().await?;

        let record = self
            .remote
            .login(credentials)
            .await
            .map_err(|e| Error::server(e.to_string()))?;

        let user = record.into_user();
        let session = Session::new(user.clone(), self.remote.name());
        self.sessions.save(&session).await?;

        Ok(user)
    }

    async fn logout(&self, everywhere: bool) -> Result<()> {
        self.require_connectivity().await?;

        self.remote
            .logout(everywhere)
            .await
            .map_err(|e| Error::server(e.to_string()))?;

        self.sessions.clear().await
    }

    async fn current_session(&self) -> Result<Option<Session>> {
        // Local read; no connectivity needed.
        self.sessions.load().await
    }
}
