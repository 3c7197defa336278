//! Byte-at-a-time accumulation of one update line
//!
//! [`LineReader`] is fed each received serial byte and yields the
//! completed line when the newline terminator arrives. The legacy
//! firmware printed every byte to decimal text and parsed it back before
//! storing it; [`ByteCodec::Legacy`] reproduces that transform
//! byte-for-byte for compatibility testing against the old unit.

use heapless::Vec;

use crate::FeedError;

/// Receive buffer capacity, matching the legacy 50-byte line buffer
pub const MAX_LINE_LEN: usize = 50;

/// A completed update line (terminator stripped)
pub type Line = Vec<u8, MAX_LINE_LEN>;

/// How each received byte is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteCodec {
    /// Store bytes unmodified
    #[default]
    Passthrough,
    /// Reproduce the legacy firmware's decimal round trip: format the
    /// byte as decimal text, then parse the text back to a byte. For
    /// every value a byte can hold the round trip is value-preserving,
    /// so this differs from [`ByteCodec::Passthrough`] only in cycle
    /// cost; it exists to keep behavioral parity with the old unit
    /// auditable.
    Legacy,
}

impl ByteCodec {
    /// Apply the codec to one received byte
    pub fn apply(self, byte: u8) -> u8 {
        match self {
            ByteCodec::Passthrough => byte,
            ByteCodec::Legacy => {
                let mut text: heapless::String<3> = heapless::String::new();
                // a u8 always formats within three digits
                let _ = core::fmt::write(&mut text, format_args!("{}", byte));
                text.parse::<u8>().unwrap_or(byte)
            }
        }
    }
}

/// State machine accumulating one newline-terminated update line
#[derive(Debug, Clone, Default)]
pub struct LineReader {
    buffer: Line,
    codec: ByteCodec,
    /// Set after an overflow; the rest of the ruined line is skipped
    /// until its terminator arrives
    discarding: bool,
}

impl LineReader {
    /// Create a reader with the given byte codec
    pub fn new(codec: ByteCodec) -> Self {
        Self {
            buffer: Vec::new(),
            codec,
            discarding: false,
        }
    }

    /// Discard any partially accumulated line
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.discarding = false;
    }

    /// Feed a single received byte
    ///
    /// Returns `Ok(Some(line))` when the newline terminator completes a
    /// line (terminator stripped), `Ok(None)` while more bytes are
    /// needed. A byte that would overflow the buffer returns
    /// [`FeedError::LineTooLong`] once; the rest of the oversized line is
    /// then silently skipped and the reader resynchronizes on its
    /// terminator.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, FeedError> {
        if byte == b'\n' {
            if self.discarding {
                self.discarding = false;
                return Ok(None);
            }
            let line = self.buffer.clone();
            self.buffer.clear();
            return Ok(Some(line));
        }

        if self.discarding {
            return Ok(None);
        }

        if self.buffer.push(self.codec.apply(byte)).is_err() {
            self.buffer.clear();
            self.discarding = true;
            return Err(FeedError::LineTooLong);
        }

        Ok(None)
    }

    /// Feed multiple bytes, returning the first completed line, if any
    ///
    /// Remaining bytes after a completed line are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Line>, FeedError> {
        for &byte in bytes {
            if let Some(line) = self.feed(byte)? {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }
}
