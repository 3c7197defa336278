//! Price-feed wire protocol
//!
//! The paired host pushes one text line per update over the serial link:
//!
//! ```text
//! 55000.12,3000.45\n
//! ```
//!
//! Up to ten comma-separated price tokens, newline terminated. The feed in
//! the field sends a trailing comma before the newline; empty tokens are
//! skipped. Tokens are opaque text — the ticker renders them verbatim and
//! never re-validates them as numbers.
//!
//! [`LineReader`] accumulates the line byte by byte, [`parse_prices`]
//! splits a completed line into the fixed ten-slot [`PriceTable`]. Both
//! bound every buffer explicitly and report overflow as [`FeedError`]
//! instead of corrupting memory.

#![no_std]
#![deny(unsafe_code)]

pub mod line;
pub mod prices;
pub mod receiver;

pub use line::{ByteCodec, Line, LineReader, MAX_LINE_LEN};
pub use prices::{parse_prices, PriceTable, PRICE_LEN, PRICE_SLOTS};
pub use receiver::{read_line, ReadError};

/// Errors that can occur while receiving or parsing an update line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedError {
    /// Line exceeded the receive buffer before a newline arrived
    LineTooLong,
    /// More price tokens than the table has slots; the first
    /// [`PRICE_SLOTS`] tokens were stored
    TooManyTokens,
    /// A token does not fit its table slot
    TokenTooLong,
}
