//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and mapping
//! constants live here so they can be tuned in one place.

// Joystick / ADC

/// Full-scale value of a 12-bit conversion.
pub const ADC_MAX: u16 = 4095;

/// Raw reading of a centred stick.
pub const AXIS_CENTER: i32 = 2048;

/// Deflections strictly smaller than this are treated as centred.
pub const DEAD_ZONE: i32 = 200;

/// SAADC channel index wired to the X axis (VRX).
pub const ADC_CHANNEL_X: u8 = 1;

/// SAADC channel index wired to the Y axis (VRY).
pub const ADC_CHANNEL_Y: u8 = 0;

/// Settle time after switching the ADC input (µs).
pub const ADC_SETTLE_US: u32 = 2;

// PWM

/// PWM counter period (counts). Also the scale of the brightness mapping.
pub const PWM_PERIOD: u16 = 4096;

/// Highest duty level the brightness mapping produces (≈ full intensity).
pub const PWM_MAX_LEVEL: u16 = PWM_PERIOD - 1;

/// PWM clock divider applied to the 16 MHz base clock.
pub const PWM_CLOCK_DIVIDER: u8 = 16;

// Buttons

/// Minimum spacing between two accepted button edges (µs).
///
/// One window shared by both inputs.
pub const DEBOUNCE_WINDOW_US: u32 = 300_000;

// Display

/// SSD1306 I²C address.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// I²C bus clock for the display (kHz).
pub const DISPLAY_I2C_KHZ: u32 = 400;

/// Display geometry (pixels).
pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

/// Edge length of the joystick cursor square (pixels).
pub const SQUARE_SIZE: u32 = 8;

/// Frame polarity. Never flipped at runtime: the screen is cleared to the
/// opposite colour and the border is drawn in this one.
pub const DISPLAY_COLOR_PHASE: bool = false;

/// Full-frame border: (x, y, width, height).
pub const BORDER_FULL: (i32, i32, u32, u32) = (1, 1, 126, 62);

/// Inset border selected by the mode switch: (x, y, width, height).
pub const BORDER_INSET: (i32, i32, u32, u32) = (5, 5, 118, 54);

/// Delay between two rendered frames (ms).
pub const FRAME_PERIOD_MS: u32 = 50;

// GPIO pin assignments (nRF52840-DK headers)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` are
// picked in `board.rs`.  Adjust for your wiring.
//
//   Joystick VRY   → P0.03 (AIN1, SAADC channel 0)
//   Joystick VRX   → P0.04 (AIN2, SAADC channel 1)
//   Joystick SW    → P0.11 (mode select, active-low)
//   Button A       → P0.12 (PWM on/off, active-low)
//   LED red (PWM)  → P1.10
//   LED green      → P1.11 (status, toggled by the mode switch)
//   LED blue (PWM) → P1.12
//
// All three LEDs are active-high (pin high = lit). The PWM peripheral
// counts its compare value as low time, so levels go through
// `board_logic::duty_for` before reaching `SimplePwm`.
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
