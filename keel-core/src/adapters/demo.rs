//! Demo account source
//!
//! A fixed in-memory account directory so the full login flow runs without
//! a server. Active when demo mode is enabled in settings. Ids are stable
//! across runs so sessions survive restarts.

use async_trait::async_trait;

use crate::domain::Credentials;
use crate::ports::{AccountDataSource, SourceError, UserRecord};

struct DemoAccount {
    id: i64,
    email: &'static str,
    password: &'static str,
    display_name: &'static str,
}

const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        id: 1,
        email: "ada@example.com",
        password: "demo",
        display_name: "Ada Lovelace",
    },
    DemoAccount {
        id: 2,
        email: "grace@example.com",
        password: "demo",
        display_name: "Grace Hopper",
    },
    DemoAccount {
        id: 3,
        email: "edsger@example.com",
        password: "demo",
        display_name: "Edsger Dijkstra",
    },
];

/// In-memory demo directory
#[derive(Debug, Default)]
pub struct DemoAccountSource;

impl DemoAccountSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AccountDataSource for DemoAccountSource {
    fn name(&self) -> &str {
        "demo"
    }

    async fn login(&self, credentials: &Credentials) -> Result<UserRecord, SourceError> {
        DEMO_ACCOUNTS
            .iter()
            .find(|account| {
                account.email == credentials.email && account.password == credentials.password
            })
            .map(|account| UserRecord {
                id: account.id,
                email: account.email.to_string(),
                display_name: Some(account.display_name.to_string()),
            })
            .ok_or_else(|| {
                SourceError::Rejected(
                    "Authentication failed. Demo accounts use password \"demo\".".to_string(),
                )
            })
    }

    async fn logout(&self, _everywhere: bool) -> Result<(), SourceError> {
        Ok(())
    }
}
