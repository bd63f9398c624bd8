//! Demonstration show for a row of umbrella lights
//!
//! Steps through the primary mixes, fades white and amber up, and can
//! finish with a color temperature sweep. Timing is driven by the caller's
//! `pause` function.

use lumenet_control::color::{MAX_KELVIN, MIN_KELVIN};
use lumenet_control::{kelvin_to_rgb, ArtNetSender, DmxTransport, Result, Rgb};
use std::time::Duration;

use crate::settings::DemoConfig;

/// Colors shown one after another at the start of the show
pub const COLOR_STEPS: [Rgb; 5] = [
    Rgb::WHITE,
    Rgb::new(0, 255, 255),
    Rgb::new(0, 0, 255),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 0, 0),
];

/// Run the show once, returning the number of packets sent
pub fn run_show<T: DmxTransport>(
    sender: &mut ArtNetSender<T>,
    demo: &DemoConfig,
    mut pause: impl FnMut(Duration),
) -> Result<usize> {
    let step = Duration::from_millis(demo.step_delay_ms);
    let ramp = Duration::from_millis(demo.ramp_delay_ms);
    let mut sent = 0;

    for color in COLOR_STEPS {
        tracing::debug!("Color step {:?}", color);
        sender.send_color(color)?;
        sent += 1;
        pause(step);
    }

    sender.send_white_amber(255, 255)?;
    sent += 1;
    pause(step);

    tracing::debug!("White fade");
    for level in 0..u8::MAX {
        sender.send_white_amber(level, 0)?;
        sent += 1;
        pause(ramp);
    }

    tracing::debug!("Amber fade");
    for level in 0..u8::MAX {
        sender.send_white_amber(0, level)?;
        sent += 1;
        pause(ramp);
    }

    if demo.kelvin_sweep {
        tracing::debug!("Color temperature sweep");
        for kelvin in (MIN_KELVIN..=MAX_KELVIN).step_by(demo.kelvin_step.max(1) as usize) {
            if let Some(color) = kelvin_to_rgb(kelvin) {
                sender.send_color(color)?;
                sent += 1;
                pause(ramp);
            }
        }
    }

    Ok(sent)
}
