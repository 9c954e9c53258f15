use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use super::commands::PhotoUpload;

// ============================================================================
// Photo Store - file/image collaborator
// ============================================================================
//
// Keeps uploaded area photos and reports their pixel dimensions. Storage
// and image decoding live outside this crate; the area handler only records
// the metadata this collaborator returns.
//
// ============================================================================

#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// Write the upload to `destination`
    async fn upload(&self, photo: &PhotoUpload, destination: &Path) -> Result<()>;

    /// Pixel `(width, height)` of the image stored at `path`
    async fn dimensions(&self, path: &Path) -> Result<(u32, u32)>;
}
