//! DMX output system
//!
//! This module provides DMX512 output via Art-Net.
//!
//! ## Art-Net
//!
//! Art-Net is a UDP broadcast protocol for DMX transmission over Ethernet.
//! - Uses UDP broadcast (255.255.255.255:6454) by default
//! - One sender addresses a single universe (0-255)
//! - Includes sequence numbering, wrapping after 255
//!
//! Packets are fire-and-forget: a send succeeds once the datagram is handed
//! to the OS, and nothing is retried.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use lumenet_control::dmx::ArtNetSender;
//! use lumenet_control::SenderConfig;
//!
//! # fn main() -> lumenet_control::Result<()> {
//! let config = SenderConfig::new("10.20.255.255").with_fixture_count(12);
//! let mut sender = ArtNetSender::new(&config)?;
//!
//! sender.send_rgb(255, 0, 128)?;
//! sender.send_white_amber(255, 64)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Fixtures
//!
//! ```rust
//! use lumenet_control::dmx::{FixtureFrame, FixtureProfile};
//! use lumenet_control::Rgb;
//!
//! let profile = FixtureProfile::umbrella();
//! let data = FixtureFrame::Rgb(Rgb::new(255, 128, 64)).fill(&profile, 2);
//! assert_eq!(data, [255, 128, 64, 0, 0, 255, 128, 64, 0, 0]);
//! ```

pub mod artnet;
pub mod fixtures;
pub mod transport;

pub use artnet::{ArtDmx, ArtNetSender};
pub use fixtures::{ChannelType, FixtureChannel, FixtureFrame, FixtureProfile};
pub use transport::DmxTransport;
