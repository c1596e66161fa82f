//! # Blob Seed
//!
//! Blob Seed populates an Azure Blob Storage container from a local
//! directory by driving the `az` command-line tool: one call to create
//! the container, one call to batch-upload the directory. Everything
//! beyond that orchestration — authentication, idempotent container
//! creation, the batch-upload semantics, retries — is delegated to
//! `az` itself.
//!
//! An in-memory simulation of the storage account is included for
//! development and testing, and backs the binary's `--dry-run` mode.
//!
//! ## Tools
//!
//! * Az — spawns the `az` executable as a subprocess.
//! * In Memory — simulates the remote account, reading real local files.
//!
//! ## Examples
//!
//! ```rust
//! use blob_seed::ToolConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = std::env::temp_dir().join("blob-seed-docs");
//!     std::fs::create_dir_all(&source).unwrap();
//!
//!     let uploader = ToolConfig::InMem().build().await.unwrap();
//!     uploader.seed("margies", source.as_path()).await.unwrap();
//! }
//! ```

pub mod config;
pub mod errors;
pub mod tools;
pub mod uploader;

/// The [`ToolConfig`] enum represents configuration options for building
/// the seeding flow. It includes one variant per storage tool backend.
///
/// ## Enum Variants
///
/// - `InMem`: In-memory simulation of the storage account.
///
/// - `Az`: The real `az` executable, invoked as a subprocess. It
///   includes the storage account configuration.
pub enum ToolConfig {
    InMem(),
    Az(config::Config),
}

/// `ToolConfig` represents the configuration for creating an
/// [`uploader::Uploader`] instance.
impl ToolConfig {
    /// Builds an [`uploader::Uploader`] instance based on the configured
    /// tool backend.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_seed::ToolConfig;
    ///
    /// async fn example() {
    ///     let uploader = ToolConfig::InMem().build().await.unwrap();
    ///     uploader.create_container("margies").await.unwrap();
    /// }
    /// ```
    /// # Errors
    ///
    /// Returns an [`errors::ToolResult`] when the tool backend could not
    /// be initialized.
    #[allow(clippy::unused_async)]
    pub async fn build(self) -> errors::ToolResult<uploader::Uploader> {
        let tool = match self {
            Self::InMem() => {
                Box::<tools::inmem::InMemoryTool>::default() as Box<dyn tools::StorageTool>
            }
            Self::Az(config) => {
                Box::new(tools::az::AzCli::new(config)) as Box<dyn tools::StorageTool>
            }
        };

        Ok(uploader::Uploader::new(tool))
    }

    /// Creates an [`uploader::Uploader`] instance with the provided
    /// storage tool.
    #[must_use]
    pub fn with_tool(tool: Box<dyn tools::StorageTool>) -> uploader::Uploader {
        uploader::Uploader::new(tool)
    }
}
