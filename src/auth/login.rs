// src/auth/login.rs
use crate::auth::Credentials;
use crate::config::{AuthConfig, ConfigError};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Why a login request did not succeed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("invalid credentials (HTTP {0})")]
    InvalidCredentials(u16),
    #[error("login rejected (HTTP {0})")]
    Rejected(u16),
    #[error("auth server error (HTTP {0})")]
    Server(u16),
    #[error("network error: {0}")]
    Network(String),
}

impl LoginError {
    /// Classify a non-success status.
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            code @ (401 | 403) => LoginError::InvalidCredentials(code),
            code @ 400..=499 => LoginError::Rejected(code),
            code => LoginError::Server(code),
        }
    }
}

/// The auth endpoint credentials are posted to.
pub trait LoginApi: Send + Sync {
    fn login(&self, credentials: &Credentials) -> Result<(), LoginError>;
}

/// Posts `{"username":..,"password":..}` to `{origin}{login_path}`.
pub struct HttpLoginApi {
    client: Client,
    endpoint: Url,
}

impl HttpLoginApi {
    pub fn new(cfg: &AuthConfig) -> Result<Self, ConfigError> {
        let endpoint = cfg.login_url()?;
        let client = Client::builder()
            .timeout(cfg.timeout())
            .build()
            .map_err(|e| ConfigError::Invalid(format!("http client: {e}")))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl LoginApi for HttpLoginApi {
    fn login(&self, credentials: &Credentials) -> Result<(), LoginError> {
        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(credentials)
            .send()
            .map_err(|e| LoginError::Network(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(LoginError::from_status(status))
        }
    }
}
