//! Board-agnostic core logic for the CryptoTicker firmware
//!
//! This crate contains the application state that does not depend on any
//! hardware implementation:
//!
//! - Asset selection (which tracked price is on screen)
//! - Ticker configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod asset;
pub mod config;

pub use asset::Asset;
pub use config::TickerConfig;
