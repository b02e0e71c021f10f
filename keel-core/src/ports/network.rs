//! Network reachability port

use async_trait::async_trait;

/// Answers whether the remote endpoint is currently reachable
///
/// The answer reflects the moment of the call; implementations must not
/// cache it across calls. Repositories consult this before every
/// remote-backed operation.
#[async_trait]
pub trait NetworkMonitor: Send + Sync {
    async fn is_connected(&self) -> bool;
}
