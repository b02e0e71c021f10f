//! Current-user use case

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::User;
use crate::ports::{AccountRepository, NoParamsUseCase};

/// The locally signed-in user, if any
///
/// Served from the session store; works offline.
pub struct CurrentUserUseCase {
    repository: Arc<dyn AccountRepository>,
}

impl CurrentUserUseCase {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl NoParamsUseCase<Option<User>> for CurrentUserUseCase {
    async fn call(&self) -> Result<Option<User>> {
        let session = self.repository.current_session().await?;
        Ok(session.map(|s| s.user))
    }
}
