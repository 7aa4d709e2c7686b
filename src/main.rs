use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use pngdims::cli::Cli;
use pngdims::report;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v/-q
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let paths = cli.collect_paths().with_context(|| {
        let list = cli.from.as_deref().map(|p| p.display().to_string());
        format!("Failed to read path list: {}", list.unwrap_or_default())
    })?;

    if paths.is_empty() {
        warn!("no paths given, nothing to inspect");
        return Ok(());
    }

    debug!(count = paths.len(), format = ?cli.format, "inspecting files");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::run(&paths, cli.format, &mut out).context("Failed to write report")?;

    Ok(())
}
