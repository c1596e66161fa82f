use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use blob_seed::{config::Config, ToolConfig};

/// Create a blob container and batch-upload a local directory into it.
///
/// The storage account is configured through the environment (or a
/// `.env` file): `AZURE_SUBSCRIPTION_ID`, `AZURE_STORAGE_ACCOUNT` and
/// `AZURE_STORAGE_KEY`.
#[derive(Parser)]
#[command(name = "blob-seed", version, about)]
struct Cli {
    /// Destination container name
    #[arg(long, default_value = "margies")]
    container: String,

    /// Local directory to upload
    #[arg(long, default_value = "data")]
    source: PathBuf,

    /// Path to the az executable
    #[arg(long, default_value = "az", env = "AZ_CLI_PATH")]
    az: PathBuf,

    /// Seed an in-memory account instead of calling az
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let uploader = if cli.dry_run {
        ToolConfig::InMem().build().await?
    } else {
        let config = Config::from_env().context("failed to resolve the storage account")?;
        ToolConfig::with_tool(Box::new(blob_seed::tools::az::AzCli::with_program(
            config, cli.az,
        )))
    };

    uploader
        .seed(&cli.container, cli.source.as_path())
        .await
        .with_context(|| format!("failed to seed container {}", cli.container))?;

    Ok(())
}
