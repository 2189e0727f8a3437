// view.rs
use crate::releases::{archive_url, ArchiveKind, ReleaseInfo, RepoConfig};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveLink {
    pub kind: ArchiveKind,
    pub label: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRow {
    pub name: String,
    /// `None` when the API handed us something that is not an http(s) URL.
    pub url: Option<String>,
    pub size: u64,
}

/// Everything the downloads page shows for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadsView {
    pub repo: RepoConfig,
    pub tag_name: Option<String>,
    pub archives: Vec<ArchiveLink>,
    pub rows: Vec<AssetRow>,
}

impl DownloadsView {
    pub fn from_release(repo: &RepoConfig, archive_base: &str, release: &ReleaseInfo) -> Self {
        let archives = ArchiveKind::ALL
            .into_iter()
            .filter_map(|kind| {
                match archive_url(archive_base, repo, &release.tag_name, kind) {
                    Ok(url) => Some(ArchiveLink {
                        kind,
                        label: kind.label(),
                        url: url.into(),
                    }),
                    Err(e) => {
                        tracing::warn!(%repo, error = %e, "cannot build archive link");
                        None
                    }
                }
            })
            .collect();

        let rows = release
            .assets
            .iter()
            .map(|asset| AssetRow {
                name: asset.name.clone(),
                url: safe_link(&asset.browser_download_url),
                size: asset.size,
            })
            .collect();

        Self {
            repo: repo.clone(),
            tag_name: Some(release.tag_name.clone()),
            archives,
            rows,
        }
    }

    /// Page state after a failed fetch: no links, no rows.
    pub fn unavailable(repo: &RepoConfig) -> Self {
        Self {
            repo: repo.clone(),
            tag_name: None,
            archives: Vec::new(),
            rows: Vec::new(),
        }
    }
}

fn safe_link(raw: &str) -> Option<String> {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(raw.to_string()),
        _ => {
            tracing::warn!(url = raw, "dropping non-http asset link");
            None
        }
    }
}
