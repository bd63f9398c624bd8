//! Lumenet - Art-Net show driver
//!
//! Reads `lumenet.toml` (or the file named by `LUMENET_CONFIG`) and plays
//! the demonstration show on the configured universe.

#![warn(missing_docs)]

mod logging_setup;
mod settings;
mod show;

use anyhow::{Context, Result};
use lumenet_control::ArtNetSender;
use std::path::PathBuf;
use tracing::info;

use settings::{AppConfig, CONFIG_ENV, DEFAULT_CONFIG_FILE};

fn main() -> Result<()> {
    let config_path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = AppConfig::load_or_default(&config_path)?;

    let _log_guard = logging_setup::init(&config.logging)?;
    info!("Using configuration {:?}", config_path);

    let mut sender =
        ArtNetSender::new(&config.sender).context("Failed to create Art-Net sender")?;

    loop {
        let sent = show::run_show(&mut sender, &config.demo, std::thread::sleep)
            .context("Art-Net show aborted")?;
        info!("Show finished after {} packets", sent);

        if !config.demo.repeat {
            break;
        }
    }

    Ok(())
}
