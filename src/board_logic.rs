//! Pure helpers behind the nRF52840 bring-up in `board.rs`.
//!
//! Kept free of `embassy-nrf` types so they build and test on the host.

use crate::config::{PWM_MAX_LEVEL, PWM_PERIOD};

/// Compare value that lights an active-high LED for `level` counts out of
/// [`PWM_PERIOD`].
///
/// `SimplePwm` runs with the rising-edge polarity, so the pin is high for
/// `PWM_PERIOD - duty` counts. Level 0 maps to `PWM_PERIOD` (pin held low)
/// and [`PWM_MAX_LEVEL`] to 1.
pub fn duty_for(level: u16) -> u16 {
    PWM_PERIOD - level.min(PWM_MAX_LEVEL)
}

/// Power-of-two PWM clock divider the hardware can actually use for
/// `divider`, rounded up (1..=128).
pub fn prescaler_divider(divider: u8) -> u8 {
    divider.clamp(1, 128).next_power_of_two()
}

/// TWIM bus clock closest to (not above) `khz`, one of 100, 250 or 400.
pub fn twim_khz(khz: u32) -> u32 {
    match khz {
        0..=249 => 100,
        250..=399 => 250,
        _ => 400,
    }
}
