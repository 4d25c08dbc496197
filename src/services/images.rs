// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage for uploaded item photos.

use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Public URL prefix under which stored photos are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Writes uploaded photos to disk under generated names.
#[derive(Debug, Clone)]
pub struct ImageStorage {
    dir: PathBuf,
}

impl ImageStorage {
    /// Create the storage, making sure the upload directory exists.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self, ImageStorageError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|source| ImageStorageError {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store a photo and return its public path ("/uploads/<name>").
    ///
    /// The file name is a fresh UUID keeping the client file's extension.
    pub async fn store(
        &self,
        original_name: Option<&str>,
        bytes: &[u8],
    ) -> Result<String, ImageStorageError> {
        let file_name = generated_file_name(original_name);
        let path = self.dir.join(&file_name);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| ImageStorageError {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Photo stored");
        Ok(format!("{}/{}", UPLOADS_URL_PREFIX, file_name))
    }

    /// Delete a photo previously returned by [`store`](Self::store).
    ///
    /// Best effort: failures are logged and otherwise ignored.
    pub async fn remove(&self, public_path: &str) {
        let Some(file_name) = public_path
            .strip_prefix(UPLOADS_URL_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|name| !name.is_empty() && !name.contains('/'))
        else {
            tracing::warn!(public_path, "Not a stored photo path");
            return;
        };

        let path = self.dir.join(file_name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::debug!(path = %path.display(), "Photo removed"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "Failed to remove photo"),
        }
    }
}

/// Build `<uuid>.<ext>` from the client's file name.
fn generated_file_name(original_name: Option<&str>) -> String {
    let extension = original_name
        .map(Path::new)
        .and_then(|p| p.extension())
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty());

    match extension {
        Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
        None => Uuid::new_v4().to_string(),
    }
}

/// Failed to write a photo.
#[derive(Debug, thiserror::Error)]
#[error("Failed to write {path}: {source}")]
pub struct ImageStorageError {
    path: PathBuf,
    #[source]
    source: std::io::Error,
}
