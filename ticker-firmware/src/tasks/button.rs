//! Asset-select button task
//!
//! Waits for edges on the button line and flips the live selection.
//! There is no debounce: every electrical edge toggles, exactly as the
//! switch hardware behaves on the shipped unit. The new selection shows
//! up on screen with the next feed update.

use defmt::*;
use embassy_rp::gpio::Input;

use crate::selection;

/// Button task - toggles the displayed asset on any edge
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>) {
    info!("Button task started");

    loop {
        button.wait_for_any_edge().await;
        selection::toggle();
        trace!("Selection now {}", selection::current().label());
    }
}
