//! CryptoTicker - Crypto Price Display Firmware
//!
//! Main firmware binary for RP2040-based ticker boards. A paired host
//! pushes comma-separated price lines over a 9600-baud serial link; the
//! firmware renders the selected asset's name and latest price on a
//! two-line HD44780 character LCD. A push-button toggles which asset is
//! shown; any electrical edge on its line flips the selection.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use ticker_core::TickerConfig;
use ticker_display::Hd44780;

mod hw;
mod selection;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("CryptoTicker firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = TickerConfig::default();
    // read but not wired to any comparison; the alarm line stays idle
    info!("Alarm threshold configured at {}%", config.alarm_percent);

    // LCD on six GPIO outputs
    // Pin assignments are board-specific: RS=GPIO2, E=GPIO3, D4-D7=GPIO4-7
    let mut lcd = Hd44780::new(
        hw::LcdPin::new(Output::new(p.PIN_2, Level::Low)),
        hw::LcdPin::new(Output::new(p.PIN_3, Level::Low)),
        hw::LcdPin::new(Output::new(p.PIN_4, Level::Low)),
        hw::LcdPin::new(Output::new(p.PIN_5, Level::Low)),
        hw::LcdPin::new(Output::new(p.PIN_6, Level::Low)),
        hw::LcdPin::new(Output::new(p.PIN_7, Level::Low)),
        hw::BusyDelay,
    );
    lcd.init();
    info!("LCD initialized");

    lcd.write_str("Welcome to");
    lcd.move_to_line_two();
    lcd.write_str("CryptoTicker");
    Timer::after_secs(config.banner_secs as u64).await;
    lcd.clear();

    // Setup UART for the price feed (receive-only; TX is unconnected)
    let feed_format = ticker_hal::UartConfig::default();
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = feed_format.baudrate;
    info!("Price feed UART at {} baud", feed_format.baudrate);

    let tx_buf = TX_BUF.init([0u8; 16]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();

    // Asset-select button; any edge toggles the selection
    let button = Input::new(p.PIN_9, Pull::Up);

    // Spawn tasks
    spawner.spawn(tasks::button_task(button)).unwrap();
    spawner.spawn(tasks::ticker_task(rx, lcd)).unwrap();

    info!("All tasks spawned, firmware running");
}
