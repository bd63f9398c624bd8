//! Color values and conversions for DMX output

pub mod kelvin;

pub use kelvin::{kelvin_to_rgb, MAX_KELVIN, MIN_KELVIN};

use serde::{Deserialize, Serialize};

use crate::{error::ControlError, Result};

/// An 8-bit RGB triple as sent on three DMX channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a new color from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from untyped channel values, rejecting anything
    /// outside 0-255
    pub fn try_from_components(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self {
            r: channel_value("red", r)?,
            g: channel_value("green", g)?,
            b: channel_value("blue", b)?,
        })
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(color: Rgb) -> Self {
        (color.r, color.g, color.b)
    }
}

/// Convert a wide integer into a DMX channel value
pub fn channel_value(name: &str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        ControlError::InvalidParameter(format!(
            "{} channel value {} out of range (must be 0-255)",
            name, value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_components_in_range() {
        let color = Rgb::try_from_components(255, 0, 128).unwrap();
        assert_eq!(color, Rgb::new(255, 0, 128));
    }

    #[test]
    fn test_try_from_components_rejects_out_of_range() {
        assert!(matches!(
            Rgb::try_from_components(256, 0, 0),
            Err(ControlError::InvalidParameter(_))
        ));
        assert!(matches!(
            Rgb::try_from_components(0, -1, 0),
            Err(ControlError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_tuple_conversion() {
        let color: Rgb = (1, 2, 3).into();
        let (r, g, b) = color.into();
        assert_eq!((r, g, b), (1, 2, 3));
    }
}
