//! Sender configuration
//!
//! Loaded from the `[sender]` table of a TOML file. Every field is optional
//! and falls back to the Art-Net broadcast defaults.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use crate::dmx::artnet::{ART_NET_PORT, DMX_CHANNELS};
use crate::dmx::FixtureProfile;
use crate::{error::ControlError, Result};

/// Configuration of one Art-Net sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SenderConfig {
    /// Destination IP address (IPv4 or IPv6 literal)
    pub destination: String,
    /// Destination UDP port
    pub port: u16,
    /// DMX universe (0-255)
    pub universe: i64,
    /// Number of fixtures sharing the universe
    pub fixture_count: usize,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            destination: "255.255.255.255".to_string(),
            port: ART_NET_PORT,
            universe: 3,
            fixture_count: 12,
        }
    }
}

impl SenderConfig {
    /// Create a configuration for `destination` with default port, universe
    /// and fixture count
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_universe(mut self, universe: i64) -> Self {
        self.universe = universe;
        self
    }

    pub fn with_fixture_count(mut self, fixture_count: usize) -> Self {
        self.fixture_count = fixture_count;
        self
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Number of DMX channels the configured fixtures occupy, if it fits in
    /// a `usize`
    pub fn channel_count(&self) -> Option<usize> {
        self.fixture_count
            .checked_mul(FixtureProfile::umbrella().channel_count())
    }

    /// Check the channel budget and the universe range
    pub fn validate(&self) -> Result<()> {
        match self.channel_count() {
            Some(channels) if channels <= DMX_CHANNELS => {}
            _ => {
                return Err(ControlError::ConfigError(format!(
                    "channel overflow: {} fixtures do not fit in {} DMX channels",
                    self.fixture_count, DMX_CHANNELS
                )))
            }
        }

        if !(0..=255).contains(&self.universe) {
            return Err(ControlError::ConfigError(format!(
                "invalid universe: {} (must be 0-255)",
                self.universe
            )));
        }

        Ok(())
    }

    /// Parse `destination` and `port` into a socket address.
    ///
    /// Only IP literals are accepted; host names are not resolved.
    pub fn resolve_destination(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.destination.trim().parse().map_err(|_| {
            ControlError::ConfigError(format!(
                "invalid destination {}: expected an IP address",
                self.destination
            ))
        })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}
