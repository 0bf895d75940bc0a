//! Firmware entry point for the nRF52840.
//!
//! Brings up the board, arms the button edge task, then runs the render
//! loop until power-off.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::Delay;
use joystick_oled::app::{App, StopToken};
use joystick_oled::{board, Error};
use joystick_oled::input::{buttons, ModeState};
use {defmt_rtt as _, panic_probe as _};

/// Mode flags: written by the edge task, read by the render loop.
static MODE_STATE: ModeState = ModeState::new();

/// Never requested on the target; the loop runs until reset.
static STOP: StopToken = StopToken::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("joystick-oled starting");

    let p = embassy_nrf::init(Default::default());
    let board = match board::init(p).await {
        Ok(board) => board,
        Err(e) => defmt::panic!("bring-up failed: {}", e),
    };

    let armed = spawner
        .spawn(buttons::edge_task(
            board.mode_select,
            board.action_button,
            board.status_led,
            &MODE_STATE,
        ))
        .map_err(Error::from);
    if let Err(e) = armed {
        defmt::panic!("bring-up failed: {}", e);
    }

    let mut app = App::new(board.axes, board.leds, board.display, Delay);
    app.run(&MODE_STATE, &STOP).await;
}
