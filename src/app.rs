//! Render loop - sample, drive the LEDs, redraw, flush, sleep.
//!
//! On the target the loop never ends; a [`StopToken`] lets host tests run
//! a bounded number of frames.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_graphics::prelude::Point;
use embedded_hal_async::delay::DelayNs;

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FRAME_PERIOD_MS, SQUARE_SIZE};
use crate::display::{draw_frame, BorderStyle};
use crate::hal::{AxisAdc, FrameSink, LedPwm};
use crate::input::ModeState;
use crate::joystick::{compute_brightness, compute_square_position, sample_axes, AxisSample, Brightness};

/// Cancellation flag for [`App::run`].
pub struct StopToken(AtomicBool);

impl StopToken {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn request_stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for StopToken {
    fn default() -> Self {
        Self::new()
    }
}

/// What one iteration of the loop did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub sample: AxisSample,
    /// Levels written to the LEDs, `None` while PWM is gated off.
    pub levels: Option<Brightness>,
    pub border: BorderStyle,
    pub square: Point,
}

/// The peripherals the render loop drives.
pub struct App<A, L, S, D> {
    adc: A,
    leds: L,
    screen: S,
    delay: D,
}

impl<A, L, S, D> App<A, L, S, D>
where
    A: AxisAdc,
    L: LedPwm,
    S: FrameSink,
    D: DelayNs,
{
    pub fn new(adc: A, leds: L, screen: S, delay: D) -> Self {
        Self {
            adc,
            leds,
            screen,
            delay,
        }
    }

    /// Run one frame, including the trailing frame delay.
    ///
    /// Mode flags are read once each: `pwm_enabled` before the LEDs are
    /// touched, the border style right before drawing. When PWM is off the
    /// LEDs keep whatever level they had.
    pub async fn step(&mut self, state: &ModeState) -> Frame {
        let sample = sample_axes(&mut self.adc, &mut self.delay).await;
        debug!("x: {} y: {}", sample.x, sample.y);

        let levels = if state.pwm_enabled() {
            let levels = compute_brightness(sample.x, sample.y);
            self.leds.set_levels(levels);
            Some(levels)
        } else {
            None
        };

        let border = state.border_style();
        let square = compute_square_position(
            sample.x,
            sample.y,
            DISPLAY_WIDTH,
            DISPLAY_HEIGHT,
            SQUARE_SIZE,
        );

        // Drawing and transfer failures are not fatal; the next frame retries.
        let _ = draw_frame(&mut self.screen, border, square);
        if self.screen.send_frame().is_err() {
            warn!("display: frame transfer failed");
        }

        self.delay.delay_ms(FRAME_PERIOD_MS).await;

        Frame {
            sample,
            levels,
            border,
            square,
        }
    }

    /// Loop until `stop` is requested. Returns the number of frames run.
    pub async fn run(&mut self, state: &ModeState, stop: &StopToken) -> u32 {
        info!("render loop started");
        let mut frames: u32 = 0;
        while !stop.is_stop_requested() {
            self.step(state).await;
            frames = frames.wrapping_add(1);
        }
        info!("render loop stopped after {} frames", frames);
        frames
    }

    /// Give the peripherals back (tests inspect the fakes through this).
    pub fn into_parts(self) -> (A, L, S, D) {
        (self.adc, self.leds, self.screen, self.delay)
    }
}
