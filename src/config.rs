// config.rs
use crate::releases::RepoConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Env var pointing at an explicit config file.
pub const CONFIG_ENV: &str = "PORTAL_CONFIG";
/// Looked up in the working directory when `PORTAL_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "portal.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Outbound GitHub settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// REST API root, e.g. `https://api.github.com`.
    pub api_base: String,
    /// Web root the source archives are served from.
    pub archive_base: String,
    /// GitHub rejects API calls without a User-Agent.
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            archive_base: "https://github.com".to_string(),
            user_agent: concat!("release-portal/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
        }
    }
}

impl GithubConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Where credentials are posted and where the browser goes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Scheme + host (+ port) of the auth API.
    pub origin: String,
    pub login_path: String,
    /// Navigation target after a successful login.
    pub success_path: String,
    pub timeout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            origin: "http://127.0.0.1:7091".to_string(),
            login_path: "/api/v1/auth/login".to_string(),
            success_path: "/secure".to_string(),
            timeout_secs: 10,
        }
    }
}

impl AuthConfig {
    pub fn login_url(&self) -> Result<Url, ConfigError> {
        let origin = Url::parse(&self.origin)
            .map_err(|e| ConfigError::Invalid(format!("auth.origin {:?}: {e}", self.origin)))?;
        origin
            .join(&self.login_path)
            .map_err(|e| ConfigError::Invalid(format!("auth.login_path {:?}: {e}", self.login_path)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Global configuration, usually loaded from `portal.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub github: GithubConfig,
    /// Repositories with a downloads page. The first one is served at `/`.
    pub repos: Vec<RepoConfig>,
    pub auth: AuthConfig,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            github: GithubConfig::default(),
            repos: vec![
                RepoConfig::new("zussel", "matador"),
                RepoConfig::new("zussel", "oos"),
            ],
            auth: AuthConfig::default(),
        }
    }
}

impl PortalConfig {
    /// Resolve the config file (`PORTAL_CONFIG`, then `./portal.toml`) and load it.
    /// Falls back to defaults when neither exists.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::from_file(&path),
            None => {
                tracing::info!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: PortalConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        tracing::info!(path = %path.display(), repos = cfg.repos.len(), "config loaded");
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repos.is_empty() {
            return Err(ConfigError::Invalid("at least one [[repos]] entry is required".into()));
        }
        if self.max_workers == 0 {
            return Err(ConfigError::Invalid("max_workers must be at least 1".into()));
        }
        for (field, value) in [
            ("github.api_base", &self.github.api_base),
            ("github.archive_base", &self.github.archive_base),
        ] {
            let url = Url::parse(value)
                .map_err(|e| ConfigError::Invalid(format!("{field} {value:?}: {e}")))?;
            if url.cannot_be_a_base() {
                return Err(ConfigError::Invalid(format!("{field} {value:?} is not a base URL")));
            }
        }
        self.auth.login_url()?;
        if !self.auth.success_path.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "auth.success_path {:?} must be an absolute path",
                self.auth.success_path
            )));
        }
        Ok(())
    }

    /// Repository served at `/`.
    pub fn default_repo(&self) -> Option<&RepoConfig> {
        self.repos.first()
    }

    /// Configured repository whose name is `repo`.
    pub fn find_repo(&self, repo: &str) -> Option<&RepoConfig> {
        self.repos.iter().find(|r| r.repo == repo)
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(explicit));
    }
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    local.is_file().then_some(local)
}
