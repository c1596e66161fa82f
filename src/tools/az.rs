use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    process::{Output, Stdio},
};

use dyn_clone::DynClone;
use tokio::process::Command;

use super::{StorageTool, ToolResult};
use crate::{
    config::{Config, Credentials},
    errors::ToolError,
};

/// Executable used when no override is given.
pub const DEFAULT_PROGRAM: &str = "az";

// Define a trait for running the external executable
#[async_trait::async_trait]
pub trait CommandRunner: DynClone + Sync + Send {
    async fn run(&self, args: &[String]) -> std::io::Result<Output>;
}

// Runner that spawns the real subprocess
#[derive(Clone)]
struct Subprocess {
    program: PathBuf,
}

#[async_trait::async_trait]
impl CommandRunner for Subprocess {
    async fn run(&self, args: &[String]) -> std::io::Result<Output> {
        // Stdout is suppressed; stderr is kept for failure reports.
        let child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;

        child.wait_with_output().await
    }
}

#[allow(clippy::module_name_repetitions)]
pub struct AzCli {
    config: Config,
    runner: Box<dyn CommandRunner>,
}

impl Clone for AzCli {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            runner: dyn_clone::clone_box(&*self.runner),
        }
    }
}

impl AzCli {
    /// Create a new instance of [`AzCli`] with the provided
    /// configuration, invoking the `az` executable found on `PATH`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_program(config, DEFAULT_PROGRAM)
    }

    /// Create a new instance of [`AzCli`] invoking the executable at
    /// `program` instead of `az`.
    #[must_use]
    pub fn with_program(config: Config, program: impl Into<PathBuf>) -> Self {
        Self {
            config,
            runner: Box::new(Subprocess {
                program: program.into(),
            }),
        }
    }

    /// Creates a new [`AzCli`] instance with the provided runner.
    #[must_use]
    pub fn with_runner(config: Config, runner: Box<dyn CommandRunner>) -> Self {
        Self { config, runner }
    }

    // Account arguments shared by both subcommands. The subscription is
    // passed on container creation only.
    fn account_args(&self) -> Vec<String> {
        let Credentials::AccessKey(access_key) = &self.config.credentials;

        vec![
            "--account-name".to_string(),
            self.config.account.clone(),
            "--auth-mode".to_string(),
            "key".to_string(),
            "--account-key".to_string(),
            access_key.clone(),
        ]
    }

    fn container_create_args(&self, container: &str) -> Vec<String> {
        let mut args = vec![
            "storage".to_string(),
            "container".to_string(),
            "create".to_string(),
            "--subscription".to_string(),
            self.config.subscription.clone(),
            "--name".to_string(),
            container.to_string(),
        ];
        args.extend(self.account_args());
        args.extend(["--output".to_string(), "none".to_string()]);
        args
    }

    fn upload_batch_args(&self, container: &str, source: &Path) -> ToolResult<Vec<String>> {
        let source = source.to_str().ok_or(ToolError::InvalidPath)?;

        let mut args = vec![
            "storage".to_string(),
            "blob".to_string(),
            "upload-batch".to_string(),
            "--destination".to_string(),
            container.to_string(),
            "--source".to_string(),
            source.to_string(),
        ];
        args.extend(self.account_args());
        args.extend(["--output".to_string(), "none".to_string()]);
        Ok(args)
    }

    async fn invoke(&self, args: Vec<String>) -> ToolResult<()> {
        let output = match self.runner.run(&args).await {
            Ok(output) => output,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(ToolError::ToolNotFound);
            }
            Err(err) => return Err(ToolError::Any(Box::new(err))),
        };

        if output.status.success() {
            return Ok(());
        }

        Err(classify_failure(&output))
    }
}

// Map a non-zero exit onto the crate error taxonomy by sniffing the
// error codes `az` prints to stderr. Anything unrecognized surfaces as
// `CommandFailed` with the captured stderr.
fn classify_failure(output: &Output) -> ToolError {
    let stderr = String::from_utf8_lossy(&output.stderr);

    if stderr.contains("AuthenticationFailed") || stderr.contains("AuthorizationFailure") {
        ToolError::AuthenticationFailed
    } else if stderr.contains("ContainerNotFound") {
        ToolError::ResourceNotFound
    } else {
        ToolError::CommandFailed {
            status: output.status,
            stderr: stderr.trim().to_string(),
        }
    }
}

#[async_trait::async_trait]
impl StorageTool for AzCli {
    /// Requests creation of the named container via
    /// `storage container create`.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable cannot be spawned or exits
    /// unsuccessfully.
    async fn create_container(&self, container: &str) -> ToolResult<()> {
        tracing::debug!(container, "dispatching storage container create");
        self.invoke(self.container_create_args(container)).await
    }

    /// Uploads the source directory via `storage blob upload-batch`.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidPath`] when the source path is not
    /// valid UTF-8, or an error if the executable cannot be spawned or
    /// exits unsuccessfully.
    async fn upload_batch(&self, container: &str, source: &Path) -> ToolResult<()> {
        tracing::debug!(
            container,
            source = %source.display(),
            "dispatching storage blob upload-batch"
        );
        self.invoke(self.upload_batch_args(container, source)?).await
    }
}
