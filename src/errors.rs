#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("storage tool executable not found")]
    ToolNotFound,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("Resource not found")]
    ResourceNotFound,

    #[error("The provided path contains invalid characters")]
    InvalidPath,

    #[error("the storage tool failed with {status}: {stderr}")]
    CommandFailed {
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error(transparent)]
    Any(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

pub type ToolResult<T> = std::result::Result<T, ToolError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
