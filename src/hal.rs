//! Hardware seams between the application logic and the board.
//!
//! The firmware implements these on top of `embassy-nrf` and `ssd1306`
//! (see `board.rs`); host tests implement them with in-memory fakes.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::DrawTarget;

use crate::joystick::Brightness;

/// Index of an analog input on the converter's multiplexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcChannel(pub u8);

/// Multiplexed analog input producing 12-bit readings.
#[allow(async_fn_in_trait)]
pub trait AxisAdc {
    /// Route the converter to `channel`.
    fn select(&mut self, channel: AdcChannel);

    /// Convert the currently selected channel (0..=4095).
    async fn read(&mut self) -> u16;
}

/// The two PWM-driven indicator LEDs.
pub trait LedPwm {
    /// Apply both duty levels.
    fn set_levels(&mut self, levels: Brightness);
}

/// A monochrome framebuffer that can be pushed to the panel.
pub trait FrameSink: DrawTarget<Color = BinaryColor> {
    type SendError;

    /// Transmit the whole in-memory frame to the device.
    fn send_frame(&mut self) -> Result<(), Self::SendError>;
}
