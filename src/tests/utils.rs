use crate::app::App;
use crate::auth::{Credentials, LoginApi, LoginError};
use crate::config::PortalConfig;
use crate::releases::{Asset, FetchOutcome, ReleaseError, ReleaseInfo, ReleaseSource, RepoConfig};
use astra::{Body, Response};
use parking_lot::Mutex;
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

/// Release source with a canned answer. Clones share the call log.
#[derive(Clone)]
pub struct FakeReleases {
    outcome: FetchOutcome,
    calls: Arc<Mutex<Vec<RepoConfig>>>,
}

impl FakeReleases {
    pub fn returning(release: ReleaseInfo) -> Self {
        Self {
            outcome: Ok(release),
            calls: Arc::default(),
        }
    }

    pub fn failing(err: ReleaseError) -> Self {
        Self {
            outcome: Err(err),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<RepoConfig> {
        self.calls.lock().clone()
    }
}

impl ReleaseSource for FakeReleases {
    fn latest_release(&self, repo: &RepoConfig) -> FetchOutcome {
        self.calls.lock().push(repo.clone());
        self.outcome.clone()
    }
}

/// Login API with a canned answer. Clones share the call log.
#[derive(Clone)]
pub struct FakeLoginApi {
    result: Result<(), LoginError>,
    delay: Duration,
    calls: Arc<Mutex<Vec<Credentials>>>,
}

impl FakeLoginApi {
    pub fn accepting() -> Self {
        Self {
            result: Ok(()),
            delay: Duration::ZERO,
            calls: Arc::default(),
        }
    }

    pub fn failing(err: LoginError) -> Self {
        Self {
            result: Err(err),
            delay: Duration::ZERO,
            calls: Arc::default(),
        }
    }

    /// Answer only after `delay`, like a slow auth server.
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Vec<Credentials> {
        self.calls.lock().clone()
    }
}

impl LoginApi for FakeLoginApi {
    fn login(&self, credentials: &Credentials) -> Result<(), LoginError> {
        self.calls.lock().push(credentials.clone());
        std::thread::sleep(self.delay);
        self.result.clone()
    }
}

/// `v1.2.3` with a single `pkg.tar.gz` asset of 1024 bytes.
pub fn sample_release() -> ReleaseInfo {
    ReleaseInfo {
        tag_name: "v1.2.3".into(),
        assets: vec![Asset {
            name: "pkg.tar.gz".into(),
            browser_download_url: "https://x/pkg.tar.gz".into(),
            size: 1024,
        }],
    }
}

/// App on default config with fake collaborators.
pub fn test_app(releases: &FakeReleases, login: &FakeLoginApi) -> App {
    App::new(PortalConfig::default(), releases.clone(), login.clone())
}

/// Value of the hidden `form_id` input in a rendered login page.
pub fn form_id_in(body: &str) -> Option<String> {
    let marker = r#"name="form_id" value=""#;
    let start = body.find(marker)? + marker.len();
    let len = body[start..].find('"')?;
    Some(body[start..start + len].to_string())
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    let mut raw: Body = resp.into_body();
    raw.reader().read_to_string(&mut body).unwrap();
    body
}
