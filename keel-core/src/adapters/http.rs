//! HTTP account data source
//!
//! Talks to a Keel-compatible account API: `POST {endpoint}/session` to
//! log in, `DELETE {endpoint}/session` to log out.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::Credentials;
use crate::ports::{AccountDataSource, SourceError, UserRecord};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote account source over HTTP
#[derive(Debug)]
pub struct HttpAccountSource {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    user: UserRecord,
}

impl HttpAccountSource {
    /// Create a new source from an endpoint URL
    ///
    /// The endpoint must parse, carry a host, and use HTTPS; plain HTTP is
    /// accepted for loopback hosts only (local development servers).
    pub fn new(endpoint: &str) -> Result<Self, SourceError> {
        let parsed = Url::parse(endpoint)
            .map_err(|e| SourceError::Malformed(format!("Invalid endpoint URL: {}", e)))?;

        let host = parsed
            .host_str()
            .ok_or_else(|| SourceError::Malformed("Endpoint URL has no host".to_string()))?;

        let loopback = host == "localhost" || host == "127.0.0.1" || host == "::1";
        if parsed.scheme() != "https" && !loopback {
            return Err(SourceError::Malformed(
                "Endpoint must use HTTPS".to_string(),
            ));
        }

        let base_url = endpoint.trim_end_matches('/').to_string();

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SourceError::Malformed(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Map transport-level request errors to source errors
    fn map_request_error(&self, error: reqwest::Error) -> SourceError {
        if error.is_timeout() {
            SourceError::Timeout
        } else if error.is_connect() {
            SourceError::Unreachable(self.base_url.clone())
        } else {
            SourceError::Rejected(format!("Request failed: {}", error))
        }
    }

    /// Map non-success statuses to descriptive rejections
    fn check_status(&self, status: StatusCode) -> Result<(), SourceError> {
        match status.as_u16() {
            200..=299 => Ok(()),
            401 | 403 => Err(SourceError::Rejected(
                "Authentication failed. Check your email and password.".to_string(),
            )),
            429 => Err(SourceError::Rejected(
                "Too many attempts. Try again later.".to_string(),
            )),
            code => Err(SourceError::Rejected(format!("API error: HTTP {}", code))),
        }
    }
}

#[async_trait]
impl AccountDataSource for HttpAccountSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn login(&self, credentials: &Credentials) -> Result<UserRecord, SourceError> {
        let url = format!("{}/session", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&LoginRequest {
                email: &credentials.email,
                password: &credentials.password,
            })
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        self.check_status(response.status())?;

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Malformed(format!("Failed to parse login response: {}", e)))?;

        Ok(body.user)
    }

    async fn logout(&self, everywhere: bool) -> Result<(), SourceError> {
        let mut url = format!("{}/session", self.base_url);
        if everywhere {
            url.push_str("?everywhere=true");
        }

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        self.check_status(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_https_endpoint() {
        let source = HttpAccountSource::new("https://api.example.com/v1");
        assert!(source.is_ok());
        assert_eq!(source.unwrap().name(), "http");
    }

    #[test]
    fn test_accept_loopback_http() {
        assert!(HttpAccountSource::new("http://localhost:8080").is_ok());
        assert!(HttpAccountSource::new("http://127.0.0.1:8080").is_ok());
    }

    #[test]
    fn test_reject_plain_http() {
        let result = HttpAccountSource::new("http://api.example.com");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("HTTPS"));
    }

    #[test]
    fn test_reject_unparseable_url() {
        let result = HttpAccountSource::new("not a url");
        assert!(result.is_err());
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let source = HttpAccountSource::new("https://api.example.com/").unwrap();
        assert_eq!(source.base_url, "https://api.example.com");
    }

    #[test]
    fn test_status_mapping() {
        let source = HttpAccountSource::new("https://api.example.com").unwrap();
        assert!(source.check_status(StatusCode::OK).is_ok());

        let unauthorized = source.check_status(StatusCode::UNAUTHORIZED).unwrap_err();
        assert!(unauthorized.to_string().contains("Authentication failed"));

        let server_error = source
            .check_status(StatusCode::INTERNAL_SERVER_ERROR)
            .unwrap_err();
        assert!(server_error.to_string().contains("500"));
    }
}
