//! Use-case parameter objects

use std::fmt;

use crate::domain::result::{Error, Result};

/// Login parameters
///
/// Constructed by the presentation layer and consumed by exactly one
/// `LoginUseCase` call. Validated at construction so invalid input never
/// reaches the repository layer. Deliberately not serializable.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let email = email.into();
        let password = password.into();

        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(Error::validation(format!("Invalid email address: {}", email)));
        }
        if password.is_empty() {
            return Err(Error::validation("Password must not be empty"));
        }

        Ok(Self { email, password })
    }
}

// The password must never end up in logs or terminal output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Logout parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogoutParams {
    /// End every session for this user, not just the local one
    pub everywhere: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials() {
        let creds = Credentials::new("a@b.com", "secret").unwrap();
        assert_eq!(creds.email, "a@b.com");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn test_reject_malformed_email() {
        assert!(Credentials::new("not-an-email", "x").is_err());
        assert!(Credentials::new("@b.com", "x").is_err());
        assert!(Credentials::new("a@", "x").is_err());
    }

    #[test]
    fn test_reject_empty_password() {
        let result = Credentials::new("a@b.com", "");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Password"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("a@b.com", "hunter2").unwrap();
        let printed = format!("{:?}", creds);
        assert!(printed.contains("a@b.com"));
        assert!(!printed.contains("hunter2"));
    }
}
