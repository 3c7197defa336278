//! Price feed and render task
//!
//! The foreground loop of the system: pull feed bytes through the line
//! reader, and on each completed update line rebuild the price table and
//! redraw the LCD with the selected asset's label and price. The await on
//! the UART is the only suspension point; a silent feed leaves the last
//! rendered screen up indefinitely.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use ticker_feed::{parse_prices, ByteCodec, LineReader, PriceTable};

use crate::hw::Lcd;
use crate::selection;

/// Buffer size for UART receive
const RX_CHUNK: usize = 16;

/// Ticker task - receives price lines and renders them
#[embassy_executor::task]
pub async fn ticker_task(mut rx: BufferedUartRx, mut lcd: Lcd) {
    info!("Ticker task started");

    let mut reader = LineReader::new(ByteCodec::Passthrough);
    let mut prices = PriceTable::new();
    let mut buf = [0u8; RX_CHUNK];

    loop {
        let n = match rx.read(&mut buf).await {
            Ok(n) => n,
            Err(e) => {
                warn!("Feed UART read error: {:?}", e);
                continue;
            }
        };

        for &byte in &buf[..n] {
            match reader.feed(byte) {
                Ok(Some(line)) => match parse_prices(&line, &mut prices) {
                    Ok(populated) => {
                        trace!("Update line carried {} prices", populated);
                        render(&mut lcd, &prices);
                    }
                    Err(e) => {
                        // table bounds hold; the ruined line is dropped
                        warn!("Malformed update line: {:?}", e);
                    }
                },
                Ok(None) => {}
                Err(e) => {
                    warn!("Feed line error: {:?}", e);
                }
            }
        }
    }
}

/// Redraw both LCD lines for the current selection
fn render(lcd: &mut Lcd, prices: &PriceTable) {
    let asset = selection::current();
    lcd.clear();
    lcd.write_str(asset.label());
    lcd.move_to_line_two();
    lcd.write_str(prices.price(asset.index()));
}
