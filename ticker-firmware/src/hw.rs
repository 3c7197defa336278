//! RP2040 adapters for the `ticker-hal` traits
//!
//! Bridges embassy-rp GPIO and timing onto the traits the display driver
//! is written against, so the driver itself stays chip-agnostic.

use embassy_rp::gpio::Output;
use embassy_time::{block_for, Duration};
use ticker_display::Hd44780;
use ticker_hal::{DelayUs, OutputPin};

/// An LCD bus line backed by an embassy-rp output
pub struct LcdPin(Output<'static>);

impl LcdPin {
    pub fn new(output: Output<'static>) -> Self {
        Self(output)
    }
}

impl OutputPin for LcdPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}

/// Busy-wait delay source for display controller settle times
///
/// The delays are microseconds to single-digit milliseconds and sit on
/// the render path only, so blocking the executor here is acceptable.
pub struct BusyDelay;

impl DelayUs for BusyDelay {
    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(us as u64));
    }
}

/// The board's LCD: six GPIO lines plus the busy-wait delay source
pub type Lcd = Hd44780<LcdPin, LcdPin, LcdPin, LcdPin, LcdPin, LcdPin, BusyDelay>;
