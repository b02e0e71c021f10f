//! Keel Core - layered client runtime
//!
//! This crate implements the core application logic following hexagonal
//! architecture:
//!
//! - **domain**: Core entities and values (User, Credentials, Session)
//! - **ports**: Trait definitions for external dependencies (repository,
//!   data source, session store, network monitor, use-case shapes)
//! - **services**: Use cases and orchestration
//! - **adapters**: Concrete implementations (HTTP, demo directory, JSON
//!   session file, reachability probes)
//! - **container**: Startup-scoped dependency registry

pub mod adapters;
pub mod config;
pub mod container;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use adapters::demo::DemoAccountSource;
use adapters::gated::GatedAccountRepository;
use adapters::http::HttpAccountSource;
use adapters::probe::{FixedNetworkMonitor, HttpProbe};
use adapters::session_file::FileSessionStore;
use config::Config;
use container::Container;
use ports::{AccountDataSource, AccountRepository, NetworkMonitor, SessionStore};
use services::{CurrentUserUseCase, LoginUseCase, LogoutUseCase, StatusService};

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{Credentials, LogoutParams, Session, User};
pub use services::{EntryPoint, LogEvent, LoggingService};

fn missing_endpoint() -> Error {
    Error::config("No endpoint configured. Set app.endpoint in settings.json, KEEL_ENDPOINT, or enable demo mode.")
}

/// Main context for Keel operations
///
/// The primary entry point for all application logic. Wiring happens once
/// here: every dependency is registered in a container, resolved eagerly
/// so configuration mistakes fail at startup, and exposed as immutable
/// fields. Runtime code never consults the container.
pub struct KeelContext {
    pub config: Config,
    pub login: Arc<LoginUseCase>,
    pub logout: Arc<LogoutUseCase>,
    pub current_user: Arc<CurrentUserUseCase>,
    pub status_service: StatusService,
}

impl KeelContext {
    /// Create a new Keel context
    pub fn new(keel_dir: &Path) -> Result<Self> {
        let config = Config::load(keel_dir)?;

        let container = Container::new();

        let dir = keel_dir.to_path_buf();
        container.register_singleton::<Arc<dyn SessionStore>, _>(move |_| {
            Ok(Arc::new(FileSessionStore::new(&dir)) as Arc<dyn SessionStore>)
        })?;

        let demo_mode = config.demo_mode;
        let endpoint = config.endpoint.clone();
        container.register_singleton::<Arc<dyn NetworkMonitor>, _>(move |_| {
            if demo_mode {
                // Demo wiring never touches the network.
                Ok(Arc::new(FixedNetworkMonitor::online()) as Arc<dyn NetworkMonitor>)
            } else {
                let endpoint = endpoint.clone().ok_or_else(missing_endpoint)?;
                Ok(Arc::new(HttpProbe::new(endpoint)) as Arc<dyn NetworkMonitor>)
            }
        })?;

        let endpoint = config.endpoint.clone();
        container.register_singleton::<Arc<dyn AccountDataSource>, _>(move |_| {
            if demo_mode {
                Ok(Arc::new(DemoAccountSource::new()) as Arc<dyn AccountDataSource>)
            } else {
                let endpoint = endpoint.clone().ok_or_else(missing_endpoint)?;
                let source = HttpAccountSource::new(&endpoint)
                    .map_err(|e| Error::config(e.to_string()))?;
                Ok(Arc::new(source) as Arc<dyn AccountDataSource>)
            }
        })?;

        container.register_singleton::<Arc<dyn AccountRepository>, _>(|c| {
            Ok(Arc::new(GatedAccountRepository::new(
                c.resolve()?,
                c.resolve()?,
                c.resolve()?,
            )) as Arc<dyn AccountRepository>)
        })?;

        container.register_singleton::<Arc<LoginUseCase>, _>(|c| {
            Ok(Arc::new(LoginUseCase::new(c.resolve()?)))
        })?;
        container.register_singleton::<Arc<LogoutUseCase>, _>(|c| {
            Ok(Arc::new(LogoutUseCase::new(c.resolve()?)))
        })?;
        container.register_singleton::<Arc<CurrentUserUseCase>, _>(|c| {
            Ok(Arc::new(CurrentUserUseCase::new(c.resolve()?)))
        })?;

        // Wiring errors are startup errors: construct everything now.
        container
            .ensure_initialized()
            .context("Failed to wire Keel context")?;

        let network: Arc<dyn NetworkMonitor> = container.resolve()?;
        let repository: Arc<dyn AccountRepository> = container.resolve()?;
        let status_service = StatusService::new(&config, network, repository);

        let context = Self {
            config,
            login: container.resolve()?,
            logout: container.resolve()?,
            current_user: container.resolve()?,
            status_service,
        };

        // The container drops here; runtime code holds its dependencies
        // directly.
        Ok(context)
    }
}
