//! Art-Net protocol implementation (ArtDmx)
//!
//! Art-Net is a UDP-based protocol for transmitting DMX512 over Ethernet.

use std::io;
use std::net::{SocketAddr, UdpSocket};

use super::fixtures::{FixtureFrame, FixtureProfile};
use super::transport::{open_socket, DmxTransport};
use crate::color::Rgb;
use crate::config::SenderConfig;
use crate::{error::ControlError, Result};

/// Protocol identifier opening every Art-Net packet
pub const ART_NET_ID: &[u8; 8] = b"Art-Net\0";
/// OpDmx
pub const OP_DMX: u16 = 0x5000;
/// Art-Net protocol revision
pub const PROTOCOL_VERSION: u16 = 14;
/// Registered Art-Net UDP port
pub const ART_NET_PORT: u16 = 0x1936;
/// Channels in one DMX universe
pub const DMX_CHANNELS: usize = 512;

/// A single ArtDmx packet, borrowed from the caller's channel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtDmx<'a> {
    sequence: u8,
    /// SubUni in the low byte, Net in the high byte
    port_address: u16,
    length: u16,
    data: &'a [u8],
}

impl<'a> ArtDmx<'a> {
    pub const HEADER_LEN: usize = 18;

    /// Create a packet, rejecting more than [`DMX_CHANNELS`] values
    pub fn new(sequence: u8, port_address: u16, data: &'a [u8]) -> Result<Self> {
        let length = u16::try_from(data.len())
            .ok()
            .filter(|&length| usize::from(length) <= DMX_CHANNELS)
            .ok_or_else(|| {
                ControlError::InvalidParameter(format!(
                    "{} DMX values exceed one universe ({} channels)",
                    data.len(),
                    DMX_CHANNELS
                ))
            })?;

        Ok(Self {
            sequence,
            port_address,
            length,
            data,
        })
    }

    pub fn sequence(&self) -> u8 {
        self.sequence
    }

    pub fn port_address(&self) -> u16 {
        self.port_address
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Serialize the packet
    pub fn encode(&self) -> Vec<u8> {
        let mut packet = vec![0u8; Self::HEADER_LEN + self.data.len()];

        // Header: "Art-Net\0"
        packet[0..8].copy_from_slice(ART_NET_ID);

        // OpCode (little-endian)
        packet[8..10].copy_from_slice(&OP_DMX.to_le_bytes());

        // Protocol version (big-endian)
        packet[10..12].copy_from_slice(&PROTOCOL_VERSION.to_be_bytes());

        packet[12] = self.sequence;

        // Physical port, unused
        packet[13] = 0;

        // Port-Address (little-endian)
        packet[14..16].copy_from_slice(&self.port_address.to_le_bytes());

        // Length (big-endian)
        packet[16..18].copy_from_slice(&self.length.to_be_bytes());

        packet[Self::HEADER_LEN..].copy_from_slice(self.data);

        packet
    }
}

/// Art-Net sender driving a row of identical fixtures on one universe.
///
/// The sequence number advances only after a packet was handed to the
/// transport in full. Sends take `&mut self`; share a sender between threads
/// behind a mutex.
pub struct ArtNetSender<T: DmxTransport = UdpSocket> {
    transport: T,
    destination: SocketAddr,
    universe: u8,
    profile: FixtureProfile,
    fixture_count: usize,
    sequence: u8,
}

impl ArtNetSender<UdpSocket> {
    /// Create a new Art-Net sender with its own UDP socket
    pub fn new(config: &SenderConfig) -> Result<Self> {
        config.validate()?;
        let destination = config.resolve_destination()?;
        let socket = open_socket(&destination).map_err(ControlError::TransportError)?;

        Self::from_parts(config, destination, socket)
    }
}

impl<T: DmxTransport> ArtNetSender<T> {
    /// Create a sender writing through an existing transport
    pub fn with_transport(config: &SenderConfig, transport: T) -> Result<Self> {
        config.validate()?;
        let destination = config.resolve_destination()?;

        Self::from_parts(config, destination, transport)
    }

    fn from_parts(config: &SenderConfig, destination: SocketAddr, transport: T) -> Result<Self> {
        let universe = u8::try_from(config.universe).map_err(|_| {
            ControlError::ConfigError(format!("invalid universe: {}", config.universe))
        })?;

        tracing::info!(
            "Art-Net sender created for universe {} ({} fixtures) -> {}",
            universe,
            config.fixture_count,
            destination
        );

        Ok(Self {
            transport,
            destination,
            universe,
            profile: FixtureProfile::umbrella(),
            fixture_count: config.fixture_count,
            sequence: 0,
        })
    }

    /// Send a color to every fixture, white and amber off
    pub fn send_rgb(&mut self, r: u8, g: u8, b: u8) -> Result<()> {
        self.send_frame(FixtureFrame::Rgb(Rgb::new(r, g, b)))
    }

    /// Send a white/amber mix to every fixture, color off
    pub fn send_white_amber(&mut self, white: u8, amber: u8) -> Result<()> {
        self.send_frame(FixtureFrame::WhiteAmber { white, amber })
    }

    /// Send a color from untyped channel values.
    ///
    /// Values outside 0-255 fail with [`ControlError::InvalidParameter`]
    /// and nothing is sent.
    pub fn send_rgb_checked(&mut self, r: i64, g: i64, b: i64) -> Result<()> {
        self.send_color(Rgb::try_from_components(r, g, b)?)
    }

    pub fn send_color(&mut self, color: Rgb) -> Result<()> {
        self.send_frame(FixtureFrame::Rgb(color))
    }

    /// Encode `frame` for all fixtures and send it
    pub fn send_frame(&mut self, frame: FixtureFrame) -> Result<()> {
        let packet = self.build_packet(&frame)?;

        let written = self
            .transport
            .send_to(&packet, self.destination)
            .map_err(|e| {
                tracing::debug!("Art-Net send to {} failed: {}", self.destination, e);
                ControlError::TransportError(e)
            })?;

        if written != packet.len() {
            return Err(ControlError::TransportError(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short write: {} of {} bytes", written, packet.len()),
            )));
        }

        tracing::trace!(
            "Sent Art-Net DMX packet {} for universe {}",
            self.sequence,
            self.universe
        );
        self.sequence = self.sequence.wrapping_add(1);

        Ok(())
    }

    /// Build the packet the next send would transmit
    pub fn build_packet(&self, frame: &FixtureFrame) -> Result<Vec<u8>> {
        let data = frame.fill(&self.profile, self.fixture_count);
        let packet = ArtDmx::new(self.sequence, u16::from(self.universe), &data)?;

        Ok(packet.encode())
    }

    /// Sequence number of the next packet
    pub fn sequence(&self) -> u8 {
        self.sequence
    }

    pub fn universe(&self) -> u8 {
        self.universe
    }

    pub fn destination(&self) -> SocketAddr {
        self.destination
    }

    pub fn fixture_count(&self) -> usize {
        self.fixture_count
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
