//! Live asset selection
//!
//! A single atomic byte shared between the button task (writer) and the
//! render loop (reader). The legacy firmware kept this in an unguarded
//! global; here the single-writer/single-reader access pattern is made
//! explicit with relaxed atomic load/store — there is exactly one writer,
//! the value is one word, and no other state is synchronized through it.

use portable_atomic::{AtomicU8, Ordering};
use ticker_core::Asset;

static SELECTED: AtomicU8 = AtomicU8::new(Asset::Bitcoin as u8);

/// Flip the selection to the other asset
pub fn toggle() {
    SELECTED.fetch_xor(1, Ordering::Relaxed);
}

/// The currently selected asset
pub fn current() -> Asset {
    Asset::from_index(SELECTED.load(Ordering::Relaxed))
}
