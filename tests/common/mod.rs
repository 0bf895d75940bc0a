//! In-memory fakes for the hardware seams.

#![allow(dead_code)]

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_hal_async::delay::DelayNs;
use joystick_oled::app::StopToken;
use joystick_oled::hal::{AdcChannel, AxisAdc, FrameSink, LedPwm};
use joystick_oled::joystick::{AxisSample, Brightness};

/// Frame delay as seen by `DelayNs::delay_ns`.
pub const FRAME_SLEEP_NS: u32 = 50_000_000;

/// ADC replaying one `AxisSample` per frame; the last one repeats.
pub struct ScriptedAdc {
    script: Vec<AxisSample>,
    frame: usize,
    selected: Option<u8>,
}

impl ScriptedAdc {
    pub fn new(script: &[AxisSample]) -> Self {
        assert!(!script.is_empty());
        Self {
            script: script.to_vec(),
            frame: 0,
            selected: None,
        }
    }

    pub fn held(sample: AxisSample) -> Self {
        Self::new(&[sample])
    }

    fn current(&self) -> AxisSample {
        self.script[self.frame.min(self.script.len() - 1)]
    }
}

impl AxisAdc for ScriptedAdc {
    fn select(&mut self, channel: AdcChannel) {
        self.selected = Some(channel.0);
    }

    async fn read(&mut self) -> u16 {
        let sample = self.current();
        match self.selected {
            Some(1) => sample.x,
            Some(0) => {
                // Y is read last; move on to the next frame's sample.
                self.frame += 1;
                sample.y
            }
            other => panic!("read on unexpected channel {other:?}"),
        }
    }
}

/// LED pair remembering every write.
#[derive(Default)]
pub struct RecordingLeds {
    pub writes: Vec<Brightness>,
}

impl RecordingLeds {
    pub fn current(&self) -> Brightness {
        self.writes.last().copied().unwrap_or_default()
    }
}

impl LedPwm for RecordingLeds {
    fn set_levels(&mut self, levels: Brightness) {
        self.writes.push(levels);
    }
}

/// 128×64 framebuffer counting transfers.
pub struct TestScreen {
    pixels: [[BinaryColor; 128]; 64],
    pub frames_sent: usize,
    pub fail_sends: bool,
}

impl TestScreen {
    pub fn new() -> Self {
        Self {
            pixels: [[BinaryColor::Off; 128]; 64],
            frames_sent: 0,
            fail_sends: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_sends: true,
            ..Self::new()
        }
    }

    pub fn at(&self, x: usize, y: usize) -> BinaryColor {
        self.pixels[y][x]
    }

    /// Whether the 8×8 block at (x, y) is fully lit.
    pub fn square_at(&self, x: usize, y: usize) -> bool {
        (y..y + 8).all(|row| (x..x + 8).all(|col| self.at(col, row) == BinaryColor::On))
    }
}

impl OriginDimensions for TestScreen {
    fn size(&self) -> Size {
        Size::new(128, 64)
    }
}

impl DrawTarget for TestScreen {
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

impl FrameSink for TestScreen {
    type SendError = ();

    fn send_frame(&mut self) -> Result<(), Self::SendError> {
        if self.fail_sends {
            return Err(());
        }
        self.frames_sent += 1;
        Ok(())
    }
}

/// Delay that returns immediately, records every wait, and requests a
/// stop after a given number of frame sleeps.
pub struct TestDelay<'a> {
    pub waits_ns: Vec<u32>,
    stop: Option<(&'a StopToken, usize)>,
}

impl<'a> TestDelay<'a> {
    pub fn new() -> Self {
        Self {
            waits_ns: Vec::new(),
            stop: None,
        }
    }

    pub fn stopping_after(frames: usize, token: &'a StopToken) -> Self {
        Self {
            waits_ns: Vec::new(),
            stop: Some((token, frames)),
        }
    }

    pub fn frame_sleeps(&self) -> usize {
        self.waits_ns.iter().filter(|ns| **ns == FRAME_SLEEP_NS).count()
    }
}

impl DelayNs for TestDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.waits_ns.push(ns);
        if let Some((token, frames)) = self.stop {
            if self.frame_sleeps() >= frames {
                token.request_stop();
            }
        }
    }
}
