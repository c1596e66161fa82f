use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};

use tokio::fs;

use super::{StorageTool, ToolResult};
use crate::errors::ToolError;

type Containers = BTreeMap<String, BTreeMap<PathBuf, Vec<u8>>>;

/// An in-memory stand-in for the external tool, simulating a storage
/// account for development and testing. Uploads read the real local
/// source directory; only the remote side is simulated.
///
/// Clones share the same backing account, so a handle kept aside still
/// observes writes made through an [`crate::uploader::Uploader`] that
/// owns another clone.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTool {
    containers: Arc<Mutex<Containers>>,
}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::ResourceNotFound,
            _ => Self::Any(Box::new(err)),
        }
    }
}

impl InMemoryTool {
    fn lock(&self) -> MutexGuard<'_, Containers> {
        self.containers
            .lock()
            .expect("inmem account failed getting a lock")
    }

    #[must_use]
    pub fn container_exists(&self, container: &str) -> bool {
        self.lock().contains_key(container)
    }

    /// Blob names held by the container, in sorted order. An unknown
    /// container yields an empty list.
    #[must_use]
    pub fn blob_names(&self, container: &str) -> Vec<PathBuf> {
        self.lock()
            .get(container)
            .map(|blobs| blobs.keys().cloned().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn blob_content(&self, container: &str, name: &Path) -> Option<Vec<u8>> {
        self.lock()
            .get(container)
            .and_then(|blobs| blobs.get(name).cloned())
    }
}

/// Collects every file under `root`, recursively.
async fn collect_files(root: &Path) -> ToolResult<Vec<PathBuf>> {
    let mut pending = vec![root.to_path_buf()];
    let mut files = Vec::new();

    while let Some(dir) = pending.pop() {
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                pending.push(entry.path());
            } else {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    Ok(files)
}

#[async_trait::async_trait]
impl StorageTool for InMemoryTool {
    /// Creates the container if it is absent. Creating a container that
    /// already exists succeeds and leaves its blobs untouched, matching
    /// the external tool.
    async fn create_container(&self, container: &str) -> ToolResult<()> {
        self.lock().entry(container.to_string()).or_default();
        Ok(())
    }

    /// Stores every file under `source` as a blob named by its relative
    /// path. An empty source directory stores nothing and succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::ResourceNotFound`] when the destination
    /// container was never created or the source directory does not
    /// exist.
    async fn upload_batch(&self, container: &str, source: &Path) -> ToolResult<()> {
        if !self.container_exists(container) {
            return Err(ToolError::ResourceNotFound);
        }

        let files = collect_files(source).await?;

        for file in files {
            let content = fs::read(&file).await?;
            let name = file
                .strip_prefix(source)
                .map_err(|_| ToolError::InvalidPath)?
                .to_path_buf();

            self.lock()
                .get_mut(container)
                .ok_or(ToolError::ResourceNotFound)?
                .insert(name, content);
        }

        Ok(())
    }
}
