//! Service layer - use cases and orchestration
//!
//! Each use case wraps exactly one repository operation behind one of the
//! uniform call shapes from `ports::usecase`. The status and logging
//! services support the presentation layer.

mod current_user;
mod login;
mod logout;
pub mod logging;
mod status;

pub use current_user::CurrentUserUseCase;
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use login::LoginUseCase;
pub use logout::LogoutUseCase;
pub use status::{SessionSummary, StatusService, StatusSummary};
