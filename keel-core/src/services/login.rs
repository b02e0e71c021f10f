//! Login use case

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{Credentials, User};
use crate::ports::{AccountRepository, UseCase};

/// Authenticate a user
///
/// Stateless between calls; holds only the injected repository. Repository
/// failures propagate unmodified.
pub struct LoginUseCase {
    repository: Arc<dyn AccountRepository>,
}

impl LoginUseCase {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase<User, Credentials> for LoginUseCase {
    async fn call(&self, params: Credentials) -> Result<User> {
        self.repository.login(&params).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;
    use crate::domain::result::Error;
    use crate::domain::Session;

    /// Repository double recording what the use case passes through
    struct RecordingRepository {
        calls: AtomicUsize,
        seen_email: Mutex<Option<String>>,
        fail: bool,
    }

    impl RecordingRepository {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                seen_email: Mutex::new(None),
                fail,
            }
        }
    }

    #[async_trait]
    impl AccountRepository for RecordingRepository {
        async fn login(&self, credentials: &Credentials) -> Result<User> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_email.lock().unwrap() = Some(credentials.email.clone());
            if self.fail {
                Err(Error::NoConnectivity)
            } else {
                Ok(User::new(1, credentials.email.clone()))
            }
        }

        async fn logout(&self, _everywhere: bool) -> Result<()> {
            Ok(())
        }

        async fn current_session(&self) -> Result<Option<Session>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_call_invokes_repository_exactly_once() {
        let repository = Arc::new(RecordingRepository::new(false));
        let use_case = LoginUseCase::new(repository.clone());

        let params = Credentials::new("a@b.com", "x").unwrap();
        let user = use_case.call(params).await.unwrap();

        assert_eq!(user.email, "a@b.com");
        assert_eq!(repository.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            repository.seen_email.lock().unwrap().as_deref(),
            Some("a@b.com"),
            "arguments must derive solely from the params object"
        );
    }

    #[tokio::test]
    async fn test_failures_propagate_unmodified() {
        let repository = Arc::new(RecordingRepository::new(true));
        let use_case = LoginUseCase::new(repository.clone());

        let params = Credentials::new("a@b.com", "x").unwrap();
        let result = use_case.call(params).await;

        assert!(matches!(result, Err(Error::NoConnectivity)));
        assert_eq!(repository.calls.load(Ordering::SeqCst), 1);
    }
}
