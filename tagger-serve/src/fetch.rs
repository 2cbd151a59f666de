//! One-time retrieval of the model artifact.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::TaggerError;

/// Ensure a local copy of the model artifact exists at `dest`.
///
/// No-op when the destination already exists; the artifact cache is keyed
/// by filename only, never revalidated by content. Otherwise the full
/// response body is written to a temporary sibling path and renamed into
/// place, so a download killed mid-write can never satisfy the existence
/// check on a later run.
///
/// The parent directory of `dest` must exist and be writable.
pub async fn download_file(url: &str, dest: &Path) -> Result<(), TaggerError> {
    if dest.exists() {
        debug!("model artifact {} already present", dest.display());
        return Ok(());
    }

    info!("fetching model artifact from {}", url);

    let response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| TaggerError::Fetch(e.to_string()))?;
    let body = response
        .bytes()
        .await
        .map_err(|e| TaggerError::Fetch(e.to_string()))?;

    let tmp = dest.with_extension("download");
    fs::write(&tmp, &body)
        .and_then(|_| fs::rename(&tmp, dest))
        .map_err(|e| TaggerError::Fetch(format!("{}: {}", dest.display(), e)))?;

    info!("stored model artifact at {} ({} bytes)", dest.display(), body.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn existing_artifact_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("model.pb");
        fs::write(&dest, b"cached").unwrap();

        // The host does not resolve; touching the network would error.
        download_file("http://invalid.invalid/model.pb", &dest)
            .await
            .unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"cached");
    }

    #[tokio::test]
    async fn unreachable_url_surfaces_a_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("model.pb");

        let err = download_file("http://127.0.0.1:1/model.pb", &dest)
            .await
            .unwrap_err();

        assert!(matches!(err, TaggerError::Fetch(_)));
        assert!(!dest.exists());
    }
}
