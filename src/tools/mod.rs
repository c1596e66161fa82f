//! # Storage Tool Module
//!
//! The `tools` module defines a trait `StorageTool` that represents the
//! external storage-management tool, providing the two operations the
//! seeding flow is built from.
//!
use std::path::Path;

use dyn_clone::DynClone;

use crate::errors::ToolResult;

pub mod az;

pub mod inmem;

#[async_trait::async_trait]
pub trait StorageTool: DynClone + Sync + Send {
    /// Requests creation of a named container in the storage account.
    /// Whether an already-existing container is an error is decided by
    /// the tool, not here; `az` treats it as a success.
    async fn create_container(&self, container: &str) -> ToolResult<()>;

    /// Uploads every file under `source` into `container`, recursively,
    /// preserving relative paths as blob names.
    async fn upload_batch(&self, container: &str, source: &Path) -> ToolResult<()>;
}
