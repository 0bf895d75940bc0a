//! Pure mappings from raw axis readings.

use embedded_graphics::prelude::Point;

use super::Brightness;
use crate::config::{AXIS_CENTER, DEAD_ZONE, PWM_MAX_LEVEL, PWM_PERIOD};

/// Full-scale span of the ADC, as used by the position mapping.
const ADC_SPAN: u32 = 4096;

/// Map one axis reading to a duty level.
///
/// Readings within `DEAD_ZONE` of the centre give 0; outside it the
/// deflection is scaled by `PWM_PERIOD / (AXIS_CENTER - DEAD_ZONE)` and
/// saturated at `PWM_MAX_LEVEL`.
fn axis_level(value: u16) -> u16 {
    let mut offset = i32::from(value) - AXIS_CENTER;
    if offset.abs() < DEAD_ZONE {
        offset = 0;
    }
    if offset == 0 {
        return 0;
    }

    let level = offset.abs() * i32::from(PWM_PERIOD) / (AXIS_CENTER - DEAD_ZONE);
    level.min(i32::from(PWM_MAX_LEVEL)) as u16
}

/// Derive the LED duty levels from a joystick reading.
///
/// Cross-wired on purpose: X drives red, Y drives blue.
pub fn compute_brightness(x: u16, y: u16) -> Brightness {
    Brightness {
        red: axis_level(x),
        blue: axis_level(y),
    }
}

/// Top-left corner of the cursor square for a joystick reading.
///
/// Y is inverted so that pushing the stick up moves the square up.
/// Integer division truncates; no rounding.
pub fn compute_square_position(
    x: u16,
    y: u16,
    display_width: u32,
    display_height: u32,
    square_size: u32,
) -> Point {
    let travel_x = display_width.saturating_sub(square_size);
    let travel_y = display_height.saturating_sub(square_size);

    let px = u32::from(x) * travel_x / ADC_SPAN;
    let py = ADC_SPAN.saturating_sub(u32::from(y)) * travel_y / ADC_SPAN;

    Point::new(px as i32, py as i32)
}
