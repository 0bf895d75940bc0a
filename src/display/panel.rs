//! SSD1306 OLED panel wrapper.

use embedded_graphics::prelude::DrawTarget;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::config::DISPLAY_I2C_ADDRESS;
use crate::error::{DisplayStage, Error};
use crate::hal::FrameSink;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();

    display.init().map_err(|_| DisplayStage::Init)?;
    display.flush().map_err(|_| DisplayStage::Flush)?;
    display.clear_buffer();
    display.flush().map_err(|_| DisplayStage::Flush)?;
    Ok(display)
}

impl<I2C> FrameSink for Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type SendError = <Self as DrawTarget>::Error;

    fn send_frame(&mut self) -> Result<(), Self::SendError> {
        self.flush()
    }
}
