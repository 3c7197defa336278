//! Price table and update-line tokenization
//!
//! A completed update line is split on commas into the fixed ten-slot
//! [`PriceTable`]. Each stored token carries one leading space so it
//! renders with a gap after the cursor position, matching the legacy
//! display format. Slots beyond the tokens of the latest line keep their
//! previous contents; the render loop only ever shows slots it knows were
//! updated for the assets it tracks.

use heapless::String;

use crate::FeedError;

/// Number of price slots in the table
pub const PRICE_SLOTS: usize = 10;

/// Capacity of one slot: the inserted leading space plus nine token
/// characters
pub const PRICE_LEN: usize = 10;

/// Fixed-capacity table of rendered price strings, indexed by asset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceTable {
    slots: [String<PRICE_LEN>; PRICE_SLOTS],
}

impl PriceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Price text for the given asset index, empty until first populated
    pub fn price(&self, index: usize) -> &str {
        self.slots.get(index).map_or("", |slot| slot.as_str())
    }

    fn set(&mut self, index: usize, token: &[u8]) -> Result<(), FeedError> {
        let slot = &mut self.slots[index];
        slot.clear();
        // leading space, then the token verbatim
        let _ = slot.push(' ');
        for &byte in token {
            slot.push(byte as char).map_err(|_| FeedError::TokenTooLong)?;
        }
        Ok(())
    }
}

/// Split an update line into the price table
///
/// Tokens are comma-separated; empty tokens are skipped (the feed
/// terminates lines with a trailing comma, and the legacy tokenizer
/// collapsed repeated delimiters). Each token is stored with one leading
/// space in the next slot. Returns the number of slots populated; slots
/// beyond that count are left untouched.
///
/// An eleventh token aborts with [`FeedError::TooManyTokens`] after the
/// first ten were stored, and an oversized token aborts with
/// [`FeedError::TokenTooLong`] with earlier slots already written. Both
/// replace what was silent memory corruption in the legacy firmware.
pub fn parse_prices(line: &[u8], table: &mut PriceTable) -> Result<usize, FeedError> {
    let mut count = 0;

    for token in line.split(|&byte| byte == b',') {
        if token.is_empty() {
            continue;
        }
        if count == PRICE_SLOTS {
            return Err(FeedError::TooManyTokens);
        }
        table.set(count, token)?;
        count += 1;
    }

    Ok(count)
}
