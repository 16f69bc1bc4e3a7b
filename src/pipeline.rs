//! End-to-end pipeline: read the declared version, query both indexes,
//! resolve the final tag

use std::path::Path;

use tracing::{info, warn};

use crate::context::BuildContext;
use crate::error::SourceError;
use crate::index::IndexClient;
use crate::release_set::ReleaseSet;
use crate::resolver::{self, Resolution};
use crate::source;

/// Fetches one index's releases, degrading any failure to an empty set.
///
/// An index outage must never block a release decision; it only disables
/// collision detection against that index.
async fn fetch_or_empty(client: &IndexClient, package: &str) -> ReleaseSet {
    match client.fetch_releases(package).await {
        Ok(releases) => releases,
        Err(e) => {
            warn!("Failed to fetch releases from {}: {}", client.host(), e);
            ReleaseSet::new()
        }
    }
}

/// Resolves the release version for `package`.
///
/// The base version is read first; a missing or malformed declaration is the
/// only fatal outcome and aborts before any network call. The two index
/// fetches are independent and run concurrently.
pub async fn resolve_release_version(
    version_file: &Path,
    package: &str,
    primary: &IndexClient,
    secondary: &IndexClient,
    ctx: &BuildContext,
) -> Result<Resolution, SourceError> {
    let base = source::read_base_version(version_file)?;

    let (primary_releases, secondary_releases) = tokio::join!(
        fetch_or_empty(primary, package),
        fetch_or_empty(secondary, package),
    );

    let resolution = resolver::resolve(&base, &primary_releases, &secondary_releases, ctx);

    if !resolution.primary_conflicts.is_empty() {
        info!(
            "Versions of {} already on {}: {}",
            package,
            primary.host(),
            resolution.primary_conflicts.join(", ")
        );
    }
    if !resolution.secondary_conflicts.is_empty() {
        info!(
            "Versions of {} already on {}: {}",
            package,
            secondary.host(),
            resolution.secondary_conflicts.join(", ")
        );
    }
    if resolution.missing_run_number {
        warn!(
            "Version {} needs a suffix but no run number is set; keeping it unchanged",
            base
        );
    }
    if let Some(run_number) = &ctx.run_number {
        if resolution.version != base.as_str() {
            info!("Using build run number {}: {}", run_number, resolution.version);
        }
    }

    Ok(resolution)
}
