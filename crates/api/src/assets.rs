//! Filesystem-backed store for uploaded assets.
//!
//! Uploads are anonymous blobs: no owner association, no cleanup, no
//! expiry. Each upload is written verbatim under a collision-resistant
//! name generated by [`geomark_core::asset_naming`] and becomes
//! retrievable at `/uploads/<stored name>`.

use std::path::PathBuf;

use serde::Serialize;

/// Result of storing an upload: the generated file name and the public
/// reference clients embed in placements.
#[derive(Debug, Clone, Serialize)]
pub struct StoredAsset {
    /// Generated `<token>.<extension>` file name.
    pub file_name: String,
    /// Public reference, usable as the `asset` field of a placement.
    pub url: String,
}

/// Blob directory for uploaded assets.
#[derive(Debug)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the blob directory if it does not yet exist.
    pub async fn ensure_root(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    /// Store upload content verbatim under a freshly generated name.
    ///
    /// All inputs are accepted as-is: no content sniffing, no size cap,
    /// empty content included. A write failure is surfaced to the caller
    /// and the partial file is unlinked so no stored name ever refers to
    /// a half-written blob.
    pub async fn save(
        &self,
        original_filename: &str,
        content: &[u8],
    ) -> std::io::Result<StoredAsset> {
        let file_name = geomark_core::asset_naming::stored_name(original_filename);
        let path = self.root.join(&file_name);

        if let Err(err) = tokio::fs::write(&path, content).await {
            // Best-effort cleanup; the write error is what the caller sees.
            let _ = tokio::fs::remove_file(&path).await;
            return Err(err);
        }

        Ok(StoredAsset {
            url: format!("/uploads/{file_name}"),
            file_name,
        })
    }
}
