use crate::releases::{ReleaseError, RepoConfig};
use url::Url;

/// Source archives GitHub generates for every tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    TarGz,
}

impl ArchiveKind {
    /// Render order on the downloads page.
    pub const ALL: [ArchiveKind; 2] = [ArchiveKind::Zip, ArchiveKind::TarGz];

    pub fn extension(self) -> &'static str {
        match self {
            ArchiveKind::Zip => "zip",
            ArchiveKind::TarGz => "tar.gz",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArchiveKind::Zip => "Source code (zip)",
            ArchiveKind::TarGz => "Source code (tar.gz)",
        }
    }
}

/// `{archive_base}/{owner}/{repo}/archive/{tag}.{ext}`
///
/// Segments are appended one by one, so a tag containing `/` or `?` is
/// percent-encoded instead of changing the URL structure.
pub fn archive_url(
    archive_base: &str,
    repo: &RepoConfig,
    tag: &str,
    kind: ArchiveKind,
) -> Result<Url, ReleaseError> {
    let mut url = Url::parse(archive_base).map_err(|e| ReleaseError::Url(e.to_string()))?;
    let file = format!("{tag}.{}", kind.extension());

    url.path_segments_mut()
        .map_err(|_| ReleaseError::Url(format!("{archive_base} cannot be a base")))?
        .pop_if_empty()
        .extend([repo.owner.as_str(), repo.repo.as_str(), "archive", file.as_str()]);

    Ok(url)
}
