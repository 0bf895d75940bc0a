//! Button input subsystem - two active-low push buttons sharing one
//! debounce window.
//!
//! - **Mode select** (joystick push switch): toggles the border style and
//!   the green status LED
//! - **Action button** (button A): toggles whether the joystick drives the
//!   PWM LEDs
//!
//! The edge handler is the only writer of [`ModeState`]; the render loop
//! only reads it.

#[cfg(feature = "embedded")]
pub mod buttons;
pub mod debounce;

pub use debounce::ModeState;

/// Which physical input produced a falling edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputSource {
    /// Joystick push switch.
    ModeSelect,
    /// Button A.
    ActionButton,
}

/// Result of feeding one edge through the debounce filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Within the shared debounce window; nothing changed.
    Debounced,
    /// Border style flipped; `inset` is the new value.
    BorderToggled { inset: bool },
    /// PWM gating flipped; `enabled` is the new value.
    PwmToggled { enabled: bool },
}

impl EdgeOutcome {
    /// Whether the caller must flip the status LED.
    pub fn toggles_status_led(&self) -> bool {
        matches!(self, EdgeOutcome::BorderToggled { .. })
    }

    pub fn accepted(&self) -> bool {
        !matches!(self, EdgeOutcome::Debounced)
    }
}
