//! Application configuration file

use anyhow::{Context, Result};
use lumenet_control::color::{MAX_KELVIN, MIN_KELVIN};
use lumenet_control::{LogConfig, SenderConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "LUMENET_CONFIG";
/// Configuration file used when the environment variable is unset
pub const DEFAULT_CONFIG_FILE: &str = "lumenet.toml";

/// Everything read from `lumenet.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sender: SenderConfig,
    pub logging: LogConfig,
    pub demo: DemoConfig,
}

/// Timing of the demonstration show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Hold time of each color step
    pub step_delay_ms: u64,
    /// Pause between two values of a fade
    pub ramp_delay_ms: u64,
    /// Finish with a sweep across the color temperature range
    pub kelvin_sweep: bool,
    pub kelvin_step: u32,
    /// Repeat the show until the process is stopped
    pub repeat: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 1000,
            ramp_delay_ms: 0,
            kelvin_sweep: false,
            kelvin_step: 250,
            repeat: false,
        }
    }
}

impl AppConfig {
    /// Load `path`, or the defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.sender.validate().context("Invalid [sender] section")?;

        if self.demo.kelvin_sweep
            && !(1..=MAX_KELVIN - MIN_KELVIN).contains(&self.demo.kelvin_step)
        {
            anyhow::bail!(
                "Invalid [demo] section: kelvin_step {} must be 1-{}",
                self.demo.kelvin_step,
                MAX_KELVIN - MIN_KELVIN
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("lumenet.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lumenet.toml");
        std::fs::write(
            &path,
            r#"
[sender]
destination = "10.20.255.255"

[logging]
level = "debug"

[demo]
step_delay_ms = 250
kelvin_sweep = true
"#,
        )
        .unwrap();

        let config = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config.sender.destination, "10.20.255.255");
        assert_eq!(config.sender.universe, 3);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.demo.step_delay_ms, 250);
        assert!(config.demo.kelvin_sweep);
        assert_eq!(config.demo.kelvin_step, 250);
    }

    #[test]
    fn test_invalid_sender_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lumenet.toml");
        std::fs::write(&path, "[sender]\nfixture_count = 200\n").unwrap();

        let err = AppConfig::load_or_default(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("channel overflow"));
    }

    #[test]
    fn test_zero_kelvin_step_rejected() {
        let mut config = AppConfig::default();
        config.demo.kelvin_sweep = true;
        config.demo.kelvin_step = 0;
        assert!(config.validate().is_err());
    }
}
