//! Status service - wiring and session summary

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use crate::config::Config;
use crate::ports::{AccountRepository, NetworkMonitor};

/// Status service for the presentation layer
pub struct StatusService {
    endpoint: Option<String>,
    demo_mode: bool,
    network: Arc<dyn NetworkMonitor>,
    repository: Arc<dyn AccountRepository>,
}

impl StatusService {
    pub fn new(
        config: &Config,
        network: Arc<dyn NetworkMonitor>,
        repository: Arc<dyn AccountRepository>,
    ) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            demo_mode: config.demo_mode,
            network,
            repository,
        }
    }

    /// Get overall status summary
    pub async fn get_status(&self) -> Result<StatusSummary> {
        let connected = self.network.is_connected().await;
        let session = self.repository.current_session().await?;

        Ok(StatusSummary {
            mode: if self.demo_mode { "demo" } else { "live" }.to_string(),
            endpoint: self.endpoint.clone(),
            connected,
            session: session.map(|s| SessionSummary {
                email: s.user.email,
                display_name: s.user.display_name,
                source: s.source,
                started_at: s.started_at.to_rfc3339(),
            }),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub mode: String,
    pub endpoint: Option<String>,
    pub connected: bool,
    pub session: Option<SessionSummary>,
}

#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub email: String,
    pub display_name: Option<String>,
    pub source: String,
    pub started_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MemorySessionStore, MockAccountSource};
    use crate::adapters::gated::GatedAccountRepository;
    use crate::adapters::probe::FixedNetworkMonitor;
    use crate::domain::{Session, User};
    use crate::ports::{SessionStore, UserRecord};

    #[tokio::test]
    async fn test_status_without_session() {
        let config = Config::default();
        let repository = Arc::new(GatedAccountRepository::new(
            Arc::new(FixedNetworkMonitor::offline()),
            Arc::new(MockAccountSource::succeeding(UserRecord {
                id: 1,
                email: "a@b.com".to_string(),
                display_name: None,
            })),
            Arc::new(MemorySessionStore::new()),
        ));
        let service = StatusService::new(
            &config,
            Arc::new(FixedNetworkMonitor::offline()),
            repository,
        );

        let status = service.get_status().await.unwrap();
        assert_eq!(status.mode, "live");
        assert!(!status.connected);
        assert!(status.session.is_none());
    }

    #[tokio::test]
    async fn test_status_reports_session() {
        let config = Config::default();
        let sessions = Arc::new(MemorySessionStore::new());
        sessions
            .save(&Session::new(
                User::new(1, "a@b.com").with_display_name("Ada"),
                "demo",
            ))
            .await
            .unwrap();

        let repository = Arc::new(GatedAccountRepository::new(
            Arc::new(FixedNetworkMonitor::online()),
            Arc::new(MockAccountSource::failing("unused")),
            sessions,
        ));
        let service = StatusService::new(
            &config,
            Arc::new(FixedNetworkMonitor::online()),
            repository,
        );

        let status = service.get_status().await.unwrap();
        assert!(status.connected);
        let session = status.session.unwrap();
        assert_eq!(session.email, "a@b.com");
        assert_eq!(session.display_name.as_deref(), Some("Ada"));
        assert_eq!(session.source, "demo");
    }
}
