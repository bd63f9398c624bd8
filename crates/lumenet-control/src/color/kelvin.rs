//! Color temperature to RGB conversion
//!
//! Approximates the Planckian locus in CIE 1931 xy chromaticity with the
//! piecewise cubics of Kim et al. and maps the chromaticity (x, y, 1 - x - y)
//! into linear CIE RGB.

use glam::{DMat3, DVec3};

use super::Rgb;

/// Lowest color temperature covered by the approximation
pub const MIN_KELVIN: u32 = 1667;
/// Highest color temperature covered by the approximation
pub const MAX_KELVIN: u32 = 25000;

/// XYZ to linear CIE RGB (illuminant E), column-major
const XYZ_TO_CIE_RGB: DMat3 = DMat3::from_cols_array(&[
    2.3706743, -0.5138850, 0.0052982, // X
    -0.9000405, 1.4253036, -0.0146949, // Y
    -0.4706338, 0.0885814, 1.0093968, // Z
]);

/// Convert a color temperature in Kelvin to an 8-bit RGB triple.
///
/// Returns `None` outside [`MIN_KELVIN`]..=[`MAX_KELVIN`]. Channels are
/// rounded to nearest and clamped to 0-255; the matrix overshoots near the
/// ends of the range.
pub fn kelvin_to_rgb(kelvin: u32) -> Option<Rgb> {
    let (x, y) = planckian_xy(kelvin)?;
    let rgb = XYZ_TO_CIE_RGB * DVec3::new(x, y, 1.0 - x - y) * 255.0;

    Some(Rgb::new(to_channel(rgb.x), to_channel(rgb.y), to_channel(rgb.z)))
}

/// Chromaticity of a black body at `kelvin`
pub fn planckian_xy(kelvin: u32) -> Option<(f64, f64)> {
    if !(MIN_KELVIN..=MAX_KELVIN).contains(&kelvin) {
        return None;
    }

    let t = kelvin as f64;
    let (t1, t2, t3) = (1e3 / t, 1e6 / (t * t), 1e9 / (t * t * t));

    let x = if kelvin <= 4000 {
        -0.2661239 * t3 - 0.2343580 * t2 + 0.8776956 * t1 + 0.179910
    } else {
        -3.0258469 * t3 + 2.1070379 * t2 + 0.2226347 * t1 + 0.240390
    };

    let (x2, x3) = (x * x, x * x * x);
    let y = if kelvin <= 2222 {
        -1.1063814 * x3 - 1.34811020 * x2 + 2.18555832 * x - 0.20219683
    } else if kelvin <= 4000 {
        -0.9549476 * x3 - 1.37418593 * x2 + 2.09137015 * x - 0.16748867
    } else {
        3.0817580 * x3 - 5.87338670 * x2 + 3.75112997 * x - 0.37001483
    };

    Some((x, y))
}

fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_is_none() {
        assert_eq!(kelvin_to_rgb(1000), None);
        assert_eq!(kelvin_to_rgb(MIN_KELVIN - 1), None);
        assert_eq!(kelvin_to_rgb(MAX_KELVIN + 1), None);
        assert_eq!(kelvin_to_rgb(0), None);
    }

    #[test]
    fn test_range_bounds_are_defined() {
        assert!(kelvin_to_rgb(MIN_KELVIN).is_some());
        assert!(kelvin_to_rgb(MAX_KELVIN).is_some());
    }

    #[test]
    fn test_known_values() {
        assert_eq!(kelvin_to_rgb(1667), Some(Rgb::new(245, 73, 8)));
        assert_eq!(kelvin_to_rgb(2700), Some(Rgb::new(168, 92, 33)));
        assert_eq!(kelvin_to_rgb(6500), Some(Rgb::new(72, 85, 93)));
        assert_eq!(kelvin_to_rgb(25000), Some(Rgb::new(35, 70, 127)));
    }

    #[test]
    fn test_daylight_is_balanced() {
        let rgb = kelvin_to_rgb(6500).unwrap();
        let max = rgb.r.max(rgb.g).max(rgb.b);
        let min = rgb.r.min(rgb.g).min(rgb.b);
        assert!(max - min < 25, "6500K should be close to neutral: {:?}", rgb);
    }

    #[test]
    fn test_warm_to_cool_ordering() {
        // Red falls and blue rises as temperature increases
        let mut previous = kelvin_to_rgb(MIN_KELVIN).unwrap();
        for kelvin in (2000..=MAX_KELVIN).step_by(1000) {
            let rgb = kelvin_to_rgb(kelvin).unwrap();
            assert!(rgb.r <= previous.r, "red rose at {}K", kelvin);
            assert!(rgb.b >= previous.b, "blue fell at {}K", kelvin);
            previous = rgb;
        }
    }

    #[test]
    fn test_segment_boundaries_are_continuous() {
        for kelvin in [2222, 4000] {
            let (x0, y0) = planckian_xy(kelvin).unwrap();
            let (x1, y1) = planckian_xy(kelvin + 1).unwrap();
            assert!((x0 - x1).abs() < 1e-3);
            assert!((y0 - y1).abs() < 1e-3);
        }
    }

    #[test]
    fn test_chromaticity_of_d65_region() {
        let (x, y) = planckian_xy(6500).unwrap();
        assert!((x - 0.3135).abs() < 1e-3);
        assert!((y - 0.3237).abs() < 1e-3);
    }
}
