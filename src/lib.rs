//! joystick-oled: analog joystick → PWM LEDs + OLED cursor.
//!
//! The hardware-independent modules (mapping, debounce, frame
//! composition, render loop) build on the host and are tested there:
//! `cargo test`.
//!
//! The `embedded` feature adds the nRF52840 bring-up (`board`), the
//! SSD1306 panel and the button edge task; the firmware binary in
//! `main.rs` is built with
//! `cargo build --release --features embedded --target thumbv7em-none-eabihf`.

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to later modules.
mod fmt;

pub mod app;
#[cfg(feature = "embedded")]
pub mod board;
pub mod board_logic;
pub mod config;
pub mod display;
pub mod error;
pub mod hal;
pub mod input;
pub mod joystick;

pub use error::Error;
