//! Shared write-or-compare step of the use cases

use tracing::info;

use crate::application::{ApplicationError, OutputService};
use crate::generation::Artifact;

/// Write `artifact` unless it matches `current`; in check mode only compare.
///
/// Returns whether the artifact differs from what is on disk.
pub async fn sync_artifact(
    output: &dyn OutputService,
    artifact: Artifact,
    current: Option<&str>,
    check: bool,
) -> Result<bool, ApplicationError> {
    if current == Some(artifact.content.as_str()) {
        info!(path = %artifact.path.display(), "Up to date");
        return Ok(false);
    }

    if check {
        info!(path = %artifact.path.display(), "Out of date");
    } else {
        output.write_artifacts(std::slice::from_ref(&artifact)).await?;
        info!(path = %artifact.path.display(), "Updated");
    }
    Ok(true)
}
