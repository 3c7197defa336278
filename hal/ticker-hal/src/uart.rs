//! UART serial communication abstractions
//!
//! The price feed arrives over a fixed-rate serial link from the paired
//! host (a Bluetooth serial bridge on the original hardware). Reception is
//! strictly byte-at-a-time and blocking: the ticker has nothing useful to
//! do until the next update line arrives.

/// UART receiver
///
/// Blocking trait for receiving price-feed bytes.
pub trait UartRx {
    /// Error type for receive operations
    type Error;

    /// Read a single byte from the UART
    ///
    /// Blocks until a byte is available. There is deliberately no timeout:
    /// a silent feed stalls the render loop indefinitely, which is the
    /// documented behavior of this system (it has no liveness requirement
    /// beyond displaying updates when they arrive).
    fn read_byte(&mut self) -> Result<u8, Self::Error>;
}

/// UART frame configuration
///
/// The default matches the price-feed wire format: 9600 baud, 8 data bits,
/// no parity, 1 stop bit.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    ///
    /// The legacy firmware's comments claimed 2 stop bits but its register
    /// setup actually configured 1; the registers are authoritative.
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 9600,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
