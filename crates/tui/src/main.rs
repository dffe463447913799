mod app;
mod input;
mod painter;
mod theme;

use std::{
    fs::{self, OpenOptions},
    sync::Mutex,
};

use anyhow::{Context, Result};
use memmatch_core::{config::LoggingConfig, AppConfig};
use tracing_subscriber::{prelude::*, EnvFilter};

const LOG_FILE: &str = "memmatch.log";

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_logging(&config.logging)?;

    let mut app = app::MemoryMatchApp::new(config);
    let result = app.run().await;
    if let Err(err) = &result {
        tracing::error!(?err, "Memory Match exited with an error");
    }
    result
}

fn init_logging(logging: &LoggingConfig) -> Result<()> {
    fs::create_dir_all(&logging.directory).with_context(|| {
        format!(
            "failed to create log directory {}",
            logging.directory.display()
        )
    })?;
    let log_path = logging.directory.join(LOG_FILE);
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .context("invalid log filter")?;

    // The terminal belongs to the game, so nothing is written to stdout.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .compact()
        .with_writer(Mutex::new(log_file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}
