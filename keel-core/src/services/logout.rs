//! Logout use case

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::LogoutParams;
use crate::ports::{AccountRepository, VoidUseCase};

/// End the current session
pub struct LogoutUseCase {
    repository: Arc<dyn AccountRepository>,
}

impl LogoutUseCase {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl VoidUseCase<LogoutParams> for LogoutUseCase {
    async fn call(&self, params: LogoutParams) -> Result<()> {
        self.repository.logout(params.everywhere).await
    }
}
