//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - HTTP client for AccountDataSource
//! - Canned demo directory for AccountDataSource (demo mode)
//! - HEAD-probe and fixed-answer implementations of NetworkMonitor
//! - JSON file storage for SessionStore
//! - Connectivity-gated composition of the above for AccountRepository

pub mod demo;
pub mod gated;
pub mod http;
pub mod probe;
pub mod session_file;

#[cfg(test)]
pub mod mock;
