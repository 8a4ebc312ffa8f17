//! Startup check of the static user collection.
//!
//! DESIGN
//! ======
//! The file is served as-is by `ServeFile`, so edits are picked up without a
//! restart. Loading it once at boot only reports problems early; a missing or
//! malformed file is logged and the server starts anyway.

use std::path::{Path, PathBuf};

use client::net::types::UserDirectory;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse the collection at `path`.
pub async fn load(path: &Path) -> Result<UserDirectory, DirectoryError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DirectoryError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw).map_err(|source| DirectoryError::Parse { path: path.to_path_buf(), source })
}

/// Load the collection and log its size and any duplicate ids.
/// Returns the number of records, or `None` when the file is unusable.
pub async fn check(path: &Path) -> Option<usize> {
    match load(path).await {
        Ok(directory) => {
            for id in directory.duplicate_ids() {
                tracing::warn!(documento = id, "duplicate user id; lookups return the first match");
            }
            tracing::info!(path = %path.display(), users = directory.users.len(), "user collection loaded");
            Some(directory.users.len())
        }
        Err(e) => {
            tracing::warn!(error = %e, "user collection unavailable; lookups will fail");
            None
        }
    }
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
