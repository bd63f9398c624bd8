//! DMX fixture profiles

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// DMX fixture profile defining channel layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureProfile {
    pub name: String,
    pub channels: Vec<FixtureChannel>,
}

/// A channel in a fixture profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureChannel {
    pub name: String,
    pub channel_type: ChannelType,
}

/// Type of DMX channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelType {
    Red,
    Green,
    Blue,
    Amber,
    White,
}

impl FixtureProfile {
    /// The umbrella light: five channels, RGB followed by amber and cold white.
    ///
    /// The fixture shows either the RGB or the white/amber pair, never both.
    pub fn umbrella() -> Self {
        let channel = |name: &str, channel_type| FixtureChannel {
            name: name.to_string(),
            channel_type,
        };

        Self {
            name: "Umbrella RGB/WA".to_string(),
            channels: vec![
                channel("Red", ChannelType::Red),
                channel("Green", ChannelType::Green),
                channel("Blue", ChannelType::Blue),
                channel("Amber", ChannelType::Amber),
                channel("White", ChannelType::White),
            ],
        }
    }

    /// Get the number of channels this fixture uses
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}

/// Values sent to every fixture in a universe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFrame {
    /// Color mix, white and amber off
    Rgb(Rgb),
    /// White and amber mix, color off
    WhiteAmber { white: u8, amber: u8 },
}

impl FixtureFrame {
    /// Value of one channel type in this frame
    pub fn value(&self, channel_type: ChannelType) -> u8 {
        match (self, channel_type) {
            (FixtureFrame::Rgb(rgb), ChannelType::Red) => rgb.r,
            (FixtureFrame::Rgb(rgb), ChannelType::Green) => rgb.g,
            (FixtureFrame::Rgb(rgb), ChannelType::Blue) => rgb.b,
            (FixtureFrame::WhiteAmber { white, .. }, ChannelType::White) => *white,
            (FixtureFrame::WhiteAmber { amber, .. }, ChannelType::Amber) => *amber,
            _ => 0,
        }
    }

    /// Render the channel values of a single fixture
    pub fn render(&self, profile: &FixtureProfile) -> Vec<u8> {
        profile
            .channels
            .iter()
            .map(|channel| self.value(channel.channel_type))
            .collect()
    }

    /// Render the same values for `fixture_count` consecutive fixtures
    pub fn fill(&self, profile: &FixtureProfile, fixture_count: usize) -> Vec<u8> {
        self.render(profile).repeat(fixture_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_umbrella_profile() {
        let profile = FixtureProfile::umbrella();
        assert_eq!(profile.channel_count(), 5);
        assert_eq!(profile.channels[3].channel_type, ChannelType::Amber);
        assert_eq!(profile.channels[4].channel_type, ChannelType::White);
    }

    #[test]
    fn test_render_rgb() {
        let profile = FixtureProfile::umbrella();
        let frame = FixtureFrame::Rgb(Rgb::new(255, 0, 128));
        assert_eq!(frame.render(&profile), vec![0xFF, 0x00, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn test_render_white_amber() {
        let profile = FixtureProfile::umbrella();
        let frame = FixtureFrame::WhiteAmber {
            white: 10,
            amber: 20,
        };
        assert_eq!(frame.render(&profile), vec![0x00, 0x00, 0x00, 0x14, 0x0A]);
    }

    #[test]
    fn test_fill_repeats_per_fixture() {
        let profile = FixtureProfile::umbrella();
        let frame = FixtureFrame::Rgb(Rgb::new(255, 0, 128));
        assert_eq!(
            frame.fill(&profile, 2),
            vec![0xFF, 0x00, 0x80, 0x00, 0x00, 0xFF, 0x00, 0x80, 0x00, 0x00]
        );
        assert!(frame.fill(&profile, 0).is_empty());
    }
}
