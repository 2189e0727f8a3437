// client.rs
use crate::config::GithubConfig;
use crate::releases::{ReleaseError, ReleaseInfo, RepoConfig};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use url::Url;

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Either the release, or the reason it could not be fetched.
pub type FetchOutcome = Result<ReleaseInfo, ReleaseError>;

/// Anything that can answer "what is the latest release of this repo".
pub trait ReleaseSource: Send + Sync {
    fn latest_release(&self, repo: &RepoConfig) -> FetchOutcome;
}

/// GitHub REST implementation. One GET per call, no retries.
pub struct GithubReleases {
    client: Client,
    api_base: Url,
}

impl GithubReleases {
    pub fn new(cfg: &GithubConfig) -> Result<Self, ReleaseError> {
        let client = Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .timeout(cfg.timeout())
            .build()
            .map_err(|e| ReleaseError::Network(e.to_string()))?;

        let api_base = Url::parse(&cfg.api_base).map_err(|e| ReleaseError::Url(e.to_string()))?;

        Ok(Self { client, api_base })
    }

    /// `{api_base}/repos/{owner}/{repo}/releases/latest`
    pub fn latest_url(&self, repo: &RepoConfig) -> Result<Url, ReleaseError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| ReleaseError::Url(format!("{} cannot be a base", self.api_base)))?
            .pop_if_empty()
            .extend(["repos", repo.owner.as_str(), repo.repo.as_str(), "releases", "latest"]);
        Ok(url)
    }
}

impl ReleaseSource for GithubReleases {
    fn latest_release(&self, repo: &RepoConfig) -> FetchOutcome {
        let url = self.latest_url(repo)?;
        tracing::debug!(%url, "fetching latest release");

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .map_err(|e| ReleaseError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ReleaseError::Status(status.as_u16()));
        }

        resp.json::<ReleaseInfo>()
            .map_err(|e| ReleaseError::Decode(e.to_string()))
    }
}
