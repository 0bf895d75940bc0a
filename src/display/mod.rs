//! Display subsystem - frame composition and the SSD1306 panel.
//!
//! ## Components
//!
//! - **Render**: composes one frame (background, border, cursor square)
//!   on any `BinaryColor` draw target
//! - **Panel**: SSD1306 128×64 OLED via I²C (firmware only)

#[cfg(feature = "embedded")]
pub mod panel;
pub mod render;

pub use render::draw_frame;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::config::{BORDER_FULL, BORDER_INSET};

/// Which of the two border rectangles is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderStyle {
    /// 1 px margin, 126×62.
    Full,
    /// 5 px margin, 118×54.
    Inset,
}

impl BorderStyle {
    pub fn rectangle(self) -> Rectangle {
        let (x, y, w, h) = match self {
            BorderStyle::Full => BORDER_FULL,
            BorderStyle::Inset => BORDER_INSET,
        };
        Rectangle::new(Point::new(x, y), Size::new(w, h))
    }
}
