use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fraudwatch::config::{Config, API_URL_ENV};
use fraudwatch::logging::init_tracing;
use fraudwatch::ui::runtime;

/// Terminal dashboard for the fraud detection backend.
#[derive(Debug, Parser)]
#[command(name = "fraudwatch", version, about)]
struct Args {
    /// Backend base URL, e.g. http://localhost:5000
    #[arg(long, env = API_URL_ENV)]
    api_url: Option<String>,

    /// Config file (defaults to ~/.config/fraudwatch/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?
    .with_api_url(args.api_url)
    .context("Invalid --api-url")?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let result = runtime::run(config, rt.handle().clone());
    rt.shutdown_timeout(std::time::Duration::from_secs(1));
    result
}
