// app.rs
use crate::auth::{generate_form_id, HttpLoginApi, LoginApi, LoginForm, SubmitGate};
use crate::config::PortalConfig;
use crate::releases::{GithubReleases, ReleaseSource};

/// Everything a request handler needs. Built once, shared by all workers.
pub struct App {
    pub config: PortalConfig,
    releases: Box<dyn ReleaseSource>,
    login: Box<dyn LoginApi>,
    gate: SubmitGate,
}

impl App {
    pub fn new(
        config: PortalConfig,
        releases: impl ReleaseSource + 'static,
        login: impl LoginApi + 'static,
    ) -> Self {
        Self {
            config,
            releases: Box::new(releases),
            login: Box::new(login),
            gate: SubmitGate::new(),
        }
    }

    /// Wire up the real GitHub and auth clients.
    pub fn from_config(config: PortalConfig) -> anyhow::Result<Self> {
        let releases = GithubReleases::new(&config.github)?;
        let login = HttpLoginApi::new(&config.auth)?;
        tracing::info!(auth = %login.endpoint(), "login endpoint configured");
        Ok(Self::new(config, releases, login))
    }

    pub fn releases(&self) -> &dyn ReleaseSource {
        self.releases.as_ref()
    }

    /// Page state for one login form at `location`.
    ///
    /// `form_id` is the id a posted form came back with; `None` (or an empty
    /// id) starts a new form with a fresh one.
    pub fn login_form(&self, location: &str, form_id: Option<String>) -> LoginForm<'_> {
        let form_id = form_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(generate_form_id);
        LoginForm::new(
            self.login.as_ref(),
            &self.gate,
            &self.config.auth.success_path,
            location,
            form_id,
        )
    }
}
