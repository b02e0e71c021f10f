//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! depends only on these traits, not on concrete implementations.

mod data_source;
mod network;
mod repository;
mod session;
mod usecase;

pub use data_source::{AccountDataSource, SourceError, UserRecord};
pub use network::NetworkMonitor;
pub use repository::AccountRepository;
pub use session::SessionStore;
pub use usecase::{NoParamsUseCase, UseCase, VoidUseCase};
