use std::path::Path;

use crate::{errors::ToolResult, tools::StorageTool};

pub struct Uploader {
    tool: Box<dyn StorageTool>,
}

impl Clone for Uploader {
    fn clone(&self) -> Self {
        Self {
            tool: dyn_clone::clone_box(&*self.tool),
        }
    }
}

impl Uploader {
    #[must_use]
    pub fn new(tool: Box<dyn StorageTool>) -> Self {
        Self { tool }
    }

    /// Requests creation of the named container in the storage account.
    ///
    /// Creation is idempotent from the flow's point of view: the
    /// underlying tool reports success when the container already
    /// exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blob_seed::ToolConfig;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let uploader = ToolConfig::InMem().build().await.unwrap();
    ///     uploader.create_container("margies").await.unwrap();
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying `StorageTool` fails to create
    /// the container.
    pub async fn create_container(&self, container: &str) -> ToolResult<()> {
        tracing::info!(container, "creating container");
        self.tool.create_container(container).await
    }

    /// Uploads every file under `source` into the named container,
    /// recursively, preserving relative paths as blob names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blob_seed::ToolConfig;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let source = std::env::temp_dir().join("uploader-docs");
    ///     std::fs::create_dir_all(&source).unwrap();
    ///
    ///     let uploader = ToolConfig::InMem().build().await.unwrap();
    ///     uploader.create_container("margies").await.unwrap();
    ///     uploader
    ///         .upload_batch("margies", source.as_path())
    ///         .await
    ///         .unwrap();
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying `StorageTool` fails the batch
    /// upload.
    pub async fn upload_batch(&self, container: &str, source: &Path) -> ToolResult<()> {
        tracing::info!(container, source = %source.display(), "uploading batch");
        self.tool.upload_batch(container, source).await
    }

    /// Runs the full seeding flow: create the container, then upload the
    /// batch. The two calls are strictly sequential, and a failed
    /// container creation stops the flow before any upload is attempted.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the underlying `StorageTool`.
    pub async fn seed(&self, container: &str, source: &Path) -> ToolResult<()> {
        self.create_container(container).await?;
        self.upload_batch(container, source).await
    }
}
