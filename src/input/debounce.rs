//! Mode flags shared between the edge handler and the render loop.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use super::{EdgeOutcome, InputSource};
use crate::config::DEBOUNCE_WINDOW_US;
use crate::display::BorderStyle;

/// Process-wide mode state.
///
/// Each field has exactly one writer (the edge handler). Word-sized
/// atomics keep single reads and writes untorn; `Relaxed` is enough since
/// no field guards another.
pub struct ModeState {
    border_inset: AtomicBool,
    pwm_enabled: AtomicBool,
    last_event_us: AtomicU32,
}

impl ModeState {
    /// Boot state: full border, PWM following the stick, no edge seen.
    pub const fn new() -> Self {
        Self {
            border_inset: AtomicBool::new(false),
            pwm_enabled: AtomicBool::new(true),
            last_event_us: AtomicU32::new(0),
        }
    }

    pub fn border_style(&self) -> BorderStyle {
        if self.border_inset.load(Ordering::Relaxed) {
            BorderStyle::Inset
        } else {
            BorderStyle::Full
        }
    }

    pub fn pwm_enabled(&self) -> bool {
        self.pwm_enabled.load(Ordering::Relaxed)
    }

    /// Timestamp (µs, 32-bit) of the last accepted edge.
    pub fn last_event_us(&self) -> u32 {
        self.last_event_us.load(Ordering::Relaxed)
    }

    /// Feed a falling edge from `source` observed at `now_us`.
    ///
    /// The window is global: an edge on either input within
    /// `DEBOUNCE_WINDOW_US` (inclusive) of the last accepted edge on
    /// either input is dropped. The clock is a wrapping 32-bit µs counter.
    /// Since the timestamp starts at 0, edges in the first 300 ms after
    /// boot are dropped too.
    pub fn on_edge(&self, source: InputSource, now_us: u32) -> EdgeOutcome {
        let elapsed = now_us.wrapping_sub(self.last_event_us());
        if elapsed <= DEBOUNCE_WINDOW_US {
            return EdgeOutcome::Debounced;
        }

        let outcome = match source {
            InputSource::ModeSelect => EdgeOutcome::BorderToggled {
                inset: toggle(&self.border_inset),
            },
            InputSource::ActionButton => EdgeOutcome::PwmToggled {
                enabled: toggle(&self.pwm_enabled),
            },
        };

        self.last_event_us.store(now_us, Ordering::Relaxed);
        outcome
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Flip a single-writer flag and return its new value.
fn toggle(flag: &AtomicBool) -> bool {
    let next = !flag.load(Ordering::Relaxed);
    flag.store(next, Ordering::Relaxed);
    next
}
