//! Mock adapters for testing
//!
//! Programmable doubles for the remote source and the session store, with
//! invocation counters so tests can assert how often the boundary was
//! crossed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::result::Result as DomainResult;
use crate::domain::{Credentials, Session};
use crate::ports::{AccountDataSource, SessionStore, SourceError, UserRecord};

enum Outcome {
    Succeed(UserRecord),
    Fail(String),
}

/// Account source with a scripted outcome
pub struct MockAccountSource {
    outcome: Outcome,
    login_calls: AtomicUsize,
    logout_calls: AtomicUsize,
}

impl MockAccountSource {
    pub fn succeeding(record: UserRecord) -> Self {
        Self {
            outcome: Outcome::Succeed(record),
            login_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Fail(message.into()),
            login_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
        }
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountDataSource for MockAccountSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn login(&self, _credentials: &Credentials) -> Result<UserRecord, SourceError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Outcome::Succeed(record) => Ok(record.clone()),
            Outcome::Fail(message) => Err(SourceError::Rejected(message.clone())),
        }
    }

    async fn logout(&self, _everywhere: bool) -> Result<(), SourceError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Outcome::Succeed(_) => Ok(()),
            Outcome::Fail(message) => Err(SourceError::Rejected(message.clone())),
        }
    }
}

/// In-memory session store
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save(&self, session: &Session) -> DomainResult<()> {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner()) = Some(session.clone());
        Ok(())
    }

    async fn load(&self) -> DomainResult<Option<Session>> {
        Ok(self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    async fn clear(&self) -> DomainResult<()> {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}
