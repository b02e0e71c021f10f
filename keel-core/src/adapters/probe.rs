//! Network monitor implementations

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::ports::NetworkMonitor;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Reachability probe against the configured endpoint
///
/// Issues a HEAD request with a short timeout on every call; any answer
/// from the server, including an HTTP error status, counts as connected.
/// Answers are never cached.
#[derive(Debug)]
pub struct HttpProbe {
    client: Client,
    endpoint: String,
}

impl HttpProbe {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl NetworkMonitor for HttpProbe {
    async fn is_connected(&self) -> bool {
        self.client.head(&self.endpoint).send().await.is_ok()
    }
}

/// Monitor with a constant answer
///
/// Used by demo-mode wiring (always online) and by tests exercising the
/// offline paths.
#[derive(Debug, Clone, Copy)]
pub struct FixedNetworkMonitor {
    connected: bool,
}

impl FixedNetworkMonitor {
    pub fn online() -> Self {
        Self { connected: true }
    }

    pub fn offline() -> Self {
        Self { connected: false }
    }
}

#[async_trait]
impl NetworkMonitor for FixedNetworkMonitor {
    async fn is_connected(&self) -> bool {
        self.connected
    }
}
