//! Joystick subsystem - axis sampling and the two mappings derived from it.
//!
//! ## Components
//!
//! - **Sampler**: reads X then Y from the multiplexed ADC
//! - **Mapping**: deflection → LED duty levels, position → cursor pixel

pub mod mapping;
pub mod sampler;

pub use mapping::{compute_brightness, compute_square_position};
pub use sampler::sample_axes;

/// One raw joystick reading, both axes in 0..=4095.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisSample {
    pub x: u16,
    pub y: u16,
}

impl AxisSample {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// PWM duty levels for the two indicator LEDs.
///
/// The X axis drives `red`, the Y axis drives `blue`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness {
    pub red: u16,
    pub blue: u16,
}
