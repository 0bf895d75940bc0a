//! Frame composition.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};

use super::BorderStyle;
use crate::config::{DISPLAY_COLOR_PHASE, SQUARE_SIZE};

/// Colour the border is drawn in.
fn ink() -> BinaryColor {
    BinaryColor::from(DISPLAY_COLOR_PHASE)
}

/// Colour the frame is cleared to; the cursor is drawn in it as well.
fn paper() -> BinaryColor {
    BinaryColor::from(!DISPLAY_COLOR_PHASE)
}

/// Draw one complete frame into `target`'s buffer.
///
/// Clears to the background, draws the selected border as a filled
/// rectangle, then the `SQUARE_SIZE` cursor at `square` on top of it.
/// Nothing is sent to the device here.
pub fn draw_frame<D>(target: &mut D, border: BorderStyle, square: Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(paper())?;

    let border_style = PrimitiveStyleBuilder::new()
        .stroke_color(ink())
        .stroke_width(1)
        .fill_color(ink())
        .build();
    border.rectangle().into_styled(border_style).draw(target)?;

    Rectangle::new(square, Size::new_equal(SQUARE_SIZE))
        .into_styled(PrimitiveStyle::with_fill(paper()))
        .draw(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    /// 128×64 framebuffer in host memory.
    struct Canvas {
        pixels: [[BinaryColor; 128]; 64],
    }

    impl Canvas {
        fn new() -> Self {
            Self {
                pixels: [[BinaryColor::Off; 128]; 64],
            }
        }

        fn at(&self, x: usize, y: usize) -> BinaryColor {
            self.pixels[y][x]
        }

        fn lit_count(&self) -> usize {
            self.pixels
                .iter()
                .flatten()
                .filter(|p| **p == BinaryColor::On)
                .count()
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size {
            Size::new(128, 64)
        }
    }

    impl DrawTarget for Canvas {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, c) in pixels {
                if (0..128).contains(&p.x) && (0..64).contains(&p.y) {
                    self.pixels[p.y as usize][p.x as usize] = c;
                }
            }
            Ok(())
        }
    }

    #[test]
    fn full_border_leaves_one_lit_pixel_frame() {
        let mut canvas = Canvas::new();
        // Park the square in the lit frame corner so it does not add pixels.
        draw_frame(&mut canvas, BorderStyle::Full, Point::new(-8, -8)).unwrap();

        assert_eq!(canvas.at(0, 0), BinaryColor::On);
        assert_eq!(canvas.at(127, 63), BinaryColor::On);
        assert_eq!(canvas.at(1, 1), BinaryColor::Off);
        assert_eq!(canvas.at(126, 62), BinaryColor::Off);
        assert_eq!(canvas.at(64, 32), BinaryColor::Off);
        // 128*64 minus the 126*62 dark interior.
        assert_eq!(canvas.lit_count(), 128 * 64 - 126 * 62);
    }

    #[test]
    fn inset_border_leaves_five_pixel_frame() {
        let mut canvas = Canvas::new();
        draw_frame(&mut canvas, BorderStyle::Inset, Point::new(-8, -8)).unwrap();

        assert_eq!(canvas.at(4, 4), BinaryColor::On);
        assert_eq!(canvas.at(5, 5), BinaryColor::Off);
        assert_eq!(canvas.at(122, 58), BinaryColor::Off);
        assert_eq!(canvas.at(123, 59), BinaryColor::On);
        assert_eq!(canvas.lit_count(), 128 * 64 - 118 * 54);
    }

    #[test]
    fn square_is_lit_over_dark_interior() {
        let mut canvas = Canvas::new();
        draw_frame(&mut canvas, BorderStyle::Full, Point::new(60, 28)).unwrap();

        for y in 28..36 {
            for x in 60..68 {
                assert_eq!(canvas.at(x, y), BinaryColor::On, "({x}, {y})");
            }
        }
        assert_eq!(canvas.at(59, 28), BinaryColor::Off);
        assert_eq!(canvas.at(68, 35), BinaryColor::Off);
        assert_eq!(canvas.at(60, 36), BinaryColor::Off);
        assert_eq!(canvas.lit_count(), 128 * 64 - 126 * 62 + 64);
    }

    #[test]
    fn previous_frame_is_cleared() {
        let mut canvas = Canvas::new();
        draw_frame(&mut canvas, BorderStyle::Full, Point::new(10, 10)).unwrap();
        draw_frame(&mut canvas, BorderStyle::Full, Point::new(100, 40)).unwrap();

        assert_eq!(canvas.at(10, 10), BinaryColor::Off);
        assert_eq!(canvas.at(100, 40), BinaryColor::On);
    }

    #[test]
    fn border_rectangles() {
        let full = BorderStyle::Full.rectangle();
        assert_eq!(full.top_left, Point::new(1, 1));
        assert_eq!(full.size, Size::new(126, 62));

        let inset = BorderStyle::Inset.rectangle();
        assert_eq!(inset.top_left, Point::new(5, 5));
        assert_eq!(inset.size, Size::new(118, 54));
    }
}
