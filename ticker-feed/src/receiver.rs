//! Blocking line reception over a serial receiver
//!
//! Couples a [`ticker_hal::UartRx`] to the [`LineReader`] state machine:
//! block on the receiver one byte at a time until a full update line has
//! arrived. There is no timeout anywhere in this path — a silent feed
//! parks the caller indefinitely, which is the documented behavior of the
//! ticker (it has nothing to show until the next update).

use ticker_hal::UartRx;

use crate::line::{Line, LineReader};
use crate::FeedError;

/// Errors from blocking line reception
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError<E> {
    /// The serial receiver reported a hardware error
    Uart(E),
    /// The accumulated line violated a feed bound
    Feed(FeedError),
}

impl<E> From<FeedError> for ReadError<E> {
    fn from(err: FeedError) -> Self {
        ReadError::Feed(err)
    }
}

/// Block until one full update line has been received
///
/// Partial input accumulated before an error is discarded; the caller
/// retries and the reader resynchronizes on the next newline.
pub fn read_line<R: UartRx>(
    rx: &mut R,
    reader: &mut LineReader,
) -> Result<Line, ReadError<R::Error>> {
    loop {
        let byte = rx.read_byte().map_err(ReadError::Uart)?;
        if let Some(line) = reader.feed(byte)? {
            return Ok(line);
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::line::ByteCodec;
    use crate::prices::{parse_prices, PriceTable};

    /// Receiver fed from a canned byte script
    struct ScriptedUart<'a> {
        script: &'a [u8],
        cursor: usize,
    }

    impl<'a> ScriptedUart<'a> {
        fn new(script: &'a [u8]) -> Self {
            Self { script, cursor: 0 }
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    struct ScriptExhausted;

    impl UartRx for ScriptedUart<'_> {
        type Error = ScriptExhausted;

        fn read_byte(&mut self) -> Result<u8, Self::Error> {
            let byte = *self.script.get(self.cursor).ok_or(ScriptExhausted)?;
            self.cursor += 1;
            Ok(byte)
        }
    }

    #[test]
    fn test_blocks_through_one_line() {
        let mut uart = ScriptedUart::new(b"100.25,3500.10\nleftover");
        let mut reader = LineReader::new(ByteCodec::Passthrough);

        let line = read_line(&mut uart, &mut reader).unwrap();
        assert_eq!(line.as_slice(), b"100.25,3500.10");
        // only the line and its terminator were consumed
        assert_eq!(uart.cursor, 15);
    }

    #[test]
    fn test_uart_error_surfaces() {
        let mut uart = ScriptedUart::new(b"55000");
        let mut reader = LineReader::new(ByteCodec::Passthrough);

        let result = read_line(&mut uart, &mut reader);
        assert_eq!(result, Err(ReadError::Uart(ScriptExhausted)));
    }

    #[test]
    fn test_overlong_line_reported_and_recovered() {
        let mut script = std::vec![b'8'; 64];
        script.extend_from_slice(b"\n42\n");
        let mut uart = ScriptedUart::new(&script);
        let mut reader = LineReader::new(ByteCodec::Passthrough);

        let result = read_line(&mut uart, &mut reader);
        assert_eq!(result, Err(ReadError::Feed(FeedError::LineTooLong)));

        // next call resynchronizes past the oversized line
        let line = read_line(&mut uart, &mut reader).unwrap();
        assert_eq!(line.as_slice(), b"42");
    }

    #[test]
    fn test_receive_then_parse_pipeline() {
        let mut uart = ScriptedUart::new(b"55000,3000,\n");
        let mut reader = LineReader::new(ByteCodec::Passthrough);
        let mut table = PriceTable::new();

        let line = read_line(&mut uart, &mut reader).unwrap();
        let populated = parse_prices(&line, &mut table).unwrap();

        assert_eq!(populated, 2);
        assert_eq!(table.price(0), " 55000");
        assert_eq!(table.price(1), " 3000");
    }
}
