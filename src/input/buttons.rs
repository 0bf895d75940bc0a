//! GPIO edge handling for the two mode buttons.
//!
//! Both buttons are active-low with internal pull-ups.  One task awaits a
//! falling edge on either pin (GPIOTE), timestamps it with the monotonic
//! clock, and runs it through [`ModeState::on_edge`].  The task also owns
//! the green status LED, which follows every accepted mode-select press.

use super::{InputSource, ModeState};
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{Input, Output};
use embassy_time::Instant;

/// Microsecond timestamp truncated to the 32-bit counter the debounce
/// filter works on.
fn now_us() -> u32 {
    Instant::now().as_micros() as u32
}

/// Handle falling edges on both buttons forever.
#[embassy_executor::task]
pub async fn edge_task(
    mut mode_select: Input<'static>,
    mut action_button: Input<'static>,
    mut status_led: Output<'static>,
    state: &'static ModeState,
) -> ! {
    info!("Buttons: edge handler armed");

    loop {
        let source = match select(
            mode_select.wait_for_falling_edge(),
            action_button.wait_for_falling_edge(),
        )
        .await
        {
            Either::First(_) => InputSource::ModeSelect,
            Either::Second(_) => InputSource::ActionButton,
        };

        let outcome = state.on_edge(source, now_us());
        if outcome.toggles_status_led() {
            status_led.toggle();
        }

        if outcome.accepted() {
            info!("Buttons: {} -> {}", source, outcome);
        } else {
            debug!("Buttons: {} bounce ignored", source);
        }
    }
}
