//! Lumenet Control - Art-Net output for RGB/WA fixtures
//!
//! This crate drives a row of identical five-channel fixtures (red, green,
//! blue, amber, white) on a single Art-Net universe:
//! - **DMX**: ArtDmx packet encoding and a sequencing UDP sender
//! - **Color**: RGB values and color temperature conversion
//! - **Config**: TOML sender and logging configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lumenet_control::{kelvin_to_rgb, ArtNetSender, SenderConfig};
//!
//! # fn main() -> lumenet_control::Result<()> {
//! let mut sender = ArtNetSender::new(&SenderConfig::default())?;
//! sender.send_rgb(255, 255, 255)?;
//!
//! if let Some(warm) = kelvin_to_rgb(2700) {
//!     sender.send_color(warm)?;
//! }
//!
//! // Untyped values are range-checked; 300 is rejected and nothing is sent
//! assert!(sender.send_rgb_checked(300, 0, 0).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`dmx`] - Art-Net packet encoding, fixtures and transport
//! - [`color`] - RGB values and Kelvin conversion
//! - [`config`] - Sender configuration
//! - [`logging`] - Logging configuration
//! - [`error`] - Error types

#![allow(missing_docs)]

/// Error types
pub mod error;

/// Color values and conversions
pub mod color;
/// Sender configuration
pub mod config;
/// DMX output (Art-Net)
pub mod dmx;
/// Logging configuration
pub mod logging;

// Re-exports
pub use color::{kelvin_to_rgb, Rgb};
pub use config::SenderConfig;
pub use dmx::{ArtDmx, ArtNetSender, DmxTransport, FixtureFrame, FixtureProfile};
pub use error::{ControlError, Result};
pub use logging::LogConfig;
