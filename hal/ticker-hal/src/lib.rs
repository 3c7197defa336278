//! CryptoTicker Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the ticker firmware
//! is written against. Chip-specific code (the RP2040 firmware binary, or
//! host-side mocks in tests) implements these traits, keeping the display
//! driver and feed parser free of any peripheral register knowledge.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (ticker-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ticker-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  embassy-rp   │       │  host mocks   │
//! │  adapters     │       │  (unit tests) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (LCD bus lines)
//! - [`uart::UartRx`] - Blocking serial reception from the price feed
//! - [`delay::DelayUs`] - Busy-wait timing for display controller settle delays

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use delay::DelayUs;
pub use gpio::OutputPin;
pub use uart::{UartConfig, UartRx};
