//! HD44780 character LCD driver
//!
//! Drives a standard two-line character display over a 4-bit parallel bus
//! (four data lines, enable strobe, register select). Written against the
//! `ticker-hal` pin and delay traits so it runs unchanged on the RP2040
//! firmware and under host tests with mock pins and a simulated clock.

#![no_std]
#![deny(unsafe_code)]

pub mod hd44780;

pub use hd44780::{Hd44780, SCREEN_COLS, SCREEN_ROWS};
