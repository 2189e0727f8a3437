mod archive;
mod client;
mod models;
mod release_error;
mod view;

pub use archive::{archive_url, ArchiveKind};
pub use client::{FetchOutcome, GithubReleases, ReleaseSource};
pub use models::{Asset, ReleaseInfo, RepoConfig};
pub use release_error::ReleaseError;
pub use view::{ArchiveLink, AssetRow, DownloadsView};
