//! Unified error type for joystick-oled.
//!
//! Every variant is a fatal bring-up failure: the firmware reports it and
//! halts. Runtime peripheral errors inside the render loop are discarded.
//! We avoid `alloc` - all error variants carry only fixed-size data.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// I²C transaction to the display failed during bring-up.
    Display(DisplayStage),

    /// The edge handler task could not be spawned.
    TaskSpawn,
}

/// Which display bring-up step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayStage {
    /// Controller init / configuration sequence.
    Init,
    /// First framebuffer transfer.
    Flush,
}

impl From<DisplayStage> for Error {
    fn from(stage: DisplayStage) -> Self {
        Error::Display(stage)
    }
}

#[cfg(feature = "embedded")]
impl From<embassy_executor::SpawnError> for Error {
    fn from(_: embassy_executor::SpawnError) -> Self {
        Error::TaskSpawn
    }
}
