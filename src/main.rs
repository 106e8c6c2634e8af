use std::io::Write;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use csvview::cli::CliArgs;
use csvview::config::ViewerConfig;

fn main() -> Result<()> {
    csvview::tracing::init();

    let args = CliArgs::parse();
    let config = ViewerConfig::load();
    let startup = args.into_config(config).map_err(|e| anyhow!(e))?;

    tracing::debug!(?startup, "Starting viewer");

    let output = csvview::app::run(&startup)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    stdout.flush().context("Failed to flush output")?;

    Ok(())
}
