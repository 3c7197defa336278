//! HD44780 LCD driver in 4-bit bus mode
//!
//! The controller latches one nibble per enable pulse, always on its upper
//! data lines D4-D7. A full byte is therefore sent as two nibble writes:
//! the byte itself (upper nibble on the bus), then the byte shifted left
//! four (original lower nibble relocated into the upper position).
//!
//! The cold-start sequence in [`Hd44780::init`] follows the datasheet
//! procedure for entering 4-bit mode from the unknown 8-bit reset state;
//! the delays between steps are datasheet minimums and deviating from them
//! leaves the controller in an undefined state.

use ticker_hal::{DelayUs, OutputPin};

/// Number of character rows on the target display
pub const SCREEN_ROWS: usize = 2;

/// Number of character columns on the target display
pub const SCREEN_COLS: usize = 16;

/// DDRAM base address of line 2
const LINE_TWO: u8 = 0x40;

/// HD44780 instructions
#[allow(dead_code)]
mod cmd {
    /// Clear entire display, reset cursor to home
    pub const CLEAR: u8 = 0b0000_0001;
    /// Return cursor to first position on first line
    pub const HOME: u8 = 0b0000_0010;
    /// Cursor moves left-to-right on write, no display shift
    pub const ENTRY_MODE: u8 = 0b0000_0110;
    /// Display off
    pub const DISPLAY_OFF: u8 = 0b0000_1000;
    /// Display on, cursor off, blink off
    pub const DISPLAY_ON: u8 = 0b0000_1100;
    /// Reset pattern sent while the controller is still in 8-bit mode
    pub const RESET: u8 = 0b0011_0000;
    /// Function set: 4-bit bus, two lines, 5x8 font
    pub const FUNCTION_SET_4BIT: u8 = 0b0010_1000;
    /// Set DDRAM (cursor) address; OR with the target address
    pub const SET_CURSOR: u8 = 0b1000_0000;
}

/// Enable pulse hold/setup, microseconds
///
/// The datasheet asks for tens of nanoseconds of data setup and ~230 ns of
/// enable width; 1 µs is the shortest delay the timing abstraction
/// resolves and comfortably covers both.
const ENABLE_PULSE_US: u32 = 1;

/// Settle time after an ordinary instruction or data write (40 µs min)
const SETTLE_US: u32 = 80;

/// Settle time after a clear; the controller wipes its RAM internally
const CLEAR_SETTLE_MS: u32 = 4;

/// HD44780 driver over six GPIO lines
///
/// `rs` selects the instruction (low) or data (high) register, `en` is the
/// latch strobe, `d4`-`d7` carry one nibble per strobe.
pub struct Hd44780<RS, EN, D4, D5, D6, D7, DELAY> {
    rs: RS,
    en: EN,
    d4: D4,
    d5: D5,
    d6: D6,
    d7: D7,
    delay: DELAY,
}

impl<RS, EN, D4, D5, D6, D7, DELAY> Hd44780<RS, EN, D4, D5, D6, D7, DELAY>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DELAY: DelayUs,
{
    /// Create a new driver. The display is not usable until [`init`]
    /// has run the cold-start sequence.
    ///
    /// [`init`]: Hd44780::init
    #[allow(clippy::too_many_arguments)]
    pub fn new(rs: RS, en: EN, d4: D4, d5: D5, d6: D6, d7: D7, delay: DELAY) -> Self {
        Self {
            rs,
            en,
            d4,
            d5,
            d6,
            d7,
            delay,
        }
    }

    /// Transmit one nibble: drive D4-D7 from bits 4-7 of `byte`, then
    /// pulse the enable line to latch it
    fn write_nibble(&mut self, byte: u8) {
        self.d7.set_state(byte & (1 << 7) != 0);
        self.d6.set_state(byte & (1 << 6) != 0);
        self.d5.set_state(byte & (1 << 5) != 0);
        self.d4.set_state(byte & (1 << 4) != 0);

        self.en.set_high();
        self.delay.delay_us(ENABLE_PULSE_US);
        self.en.set_low();
        self.delay.delay_us(ENABLE_PULSE_US);
    }

    /// Send a full byte as two nibbles with the current register selection
    fn write_byte(&mut self, byte: u8) {
        self.write_nibble(byte);
        self.write_nibble(byte << 4);
    }

    /// Send a byte to the instruction register
    pub fn write_instruction(&mut self, instruction: u8) {
        self.rs.set_low();
        self.en.set_low();
        self.write_byte(instruction);
    }

    /// Send a byte to the data register (one displayed character)
    pub fn write_data(&mut self, data: u8) {
        self.rs.set_high();
        self.en.set_low();
        self.write_byte(data);
    }

    /// Write a string at the current cursor position
    ///
    /// Characters beyond the display width scroll off into DDRAM the
    /// controller never shows; callers keep lines within [`SCREEN_COLS`].
    pub fn write_str(&mut self, text: &str) {
        for &byte in text.as_bytes() {
            self.write_data(byte);
            self.delay.delay_us(SETTLE_US);
        }
    }

    /// Cold-start the controller into 4-bit mode
    ///
    /// The controller resets into 8-bit mode. Three reset writes with
    /// decreasing waits bring it to a known state regardless of where in
    /// its power-on sequence it was, the mode-select nibble switches the
    /// bus width, and only then are full two-nibble instructions valid.
    pub fn init(&mut self) {
        // let the controller finish its own power-on reset
        self.delay.delay_ms(100);

        self.rs.set_low();
        self.en.set_low();

        self.write_nibble(cmd::RESET);
        self.delay.delay_ms(10);

        self.write_nibble(cmd::RESET);
        self.delay.delay_us(200);

        self.write_nibble(cmd::RESET);
        self.delay.delay_us(200);

        // single-nibble write: bus is still 8 bits wide until this latches
        self.write_nibble(cmd::FUNCTION_SET_4BIT);
        self.delay.delay_us(SETTLE_US);

        self.write_instruction(cmd::FUNCTION_SET_4BIT);
        self.delay.delay_us(SETTLE_US);

        self.write_instruction(cmd::DISPLAY_OFF);
        self.delay.delay_us(SETTLE_US);

        self.write_instruction(cmd::CLEAR);
        self.delay.delay_ms(CLEAR_SETTLE_MS);

        self.write_instruction(cmd::ENTRY_MODE);
        self.delay.delay_us(SETTLE_US);

        self.write_instruction(cmd::DISPLAY_ON);
        self.delay.delay_us(SETTLE_US);
    }

    /// Clear the display and return the cursor home
    pub fn clear(&mut self) {
        self.write_instruction(cmd::CLEAR);
        self.delay.delay_ms(CLEAR_SETTLE_MS);
    }

    /// Move the cursor to the start of line 2
    ///
    /// Line 1 needs no counterpart: [`clear`] returns the cursor home.
    ///
    /// [`clear`]: Hd44780::clear
    pub fn move_to_line_two(&mut self) {
        self.write_instruction(cmd::SET_CURSOR | LINE_TWO);
        self.delay.delay_us(SETTLE_US);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    /// One pin of the simulated bus
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum Line {
        Rs,
        En,
        D4,
        D5,
        D6,
        D7,
    }

    /// Shared simulated-clock trace of all bus activity
    #[derive(Default)]
    struct Trace {
        /// Simulated time, advanced only by the mock delay
        now_us: u64,
        rs: bool,
        data: [bool; 4],
        /// (nibble, rs, latched_at_us) captured on each enable falling edge
        latched: Vec<(u8, bool, u64)>,
        en: bool,
    }

    impl Trace {
        fn set(&mut self, line: Line, high: bool) {
            match line {
                Line::Rs => self.rs = high,
                Line::D4 => self.data[0] = high,
                Line::D5 => self.data[1] = high,
                Line::D6 => self.data[2] = high,
                Line::D7 => self.data[3] = high,
                Line::En => {
                    // falling edge latches the presented nibble
                    if self.en && !high {
                        let mut nibble = 0u8;
                        for (i, &bit) in self.data.iter().enumerate() {
                            if bit {
                                nibble |= 1 << i;
                            }
                        }
                        self.latched.push((nibble, self.rs, self.now_us));
                    }
                    self.en = high;
                }
            }
        }

        /// Reassemble latched nibble pairs into (byte, rs) tuples
        fn bytes(&self) -> Vec<(u8, bool)> {
            self.latched
                .chunks(2)
                .filter(|pair| pair.len() == 2)
                .map(|pair| ((pair[0].0 << 4) | pair[1].0, pair[0].1))
                .collect()
        }
    }

    struct MockPin {
        line: Line,
        trace: Rc<RefCell<Trace>>,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.trace.borrow_mut().set(self.line, true);
        }

        fn set_low(&mut self) {
            self.trace.borrow_mut().set(self.line, false);
        }
    }

    struct MockDelay {
        trace: Rc<RefCell<Trace>>,
    }

    impl DelayUs for MockDelay {
        fn delay_us(&mut self, us: u32) {
            self.trace.borrow_mut().now_us += us as u64;
        }
    }

    type MockLcd = Hd44780<MockPin, MockPin, MockPin, MockPin, MockPin, MockPin, MockDelay>;

    fn mock_lcd() -> (MockLcd, Rc<RefCell<Trace>>) {
        let trace = Rc::new(RefCell::new(Trace::default()));
        let pin = |line| MockPin {
            line,
            trace: Rc::clone(&trace),
        };
        let lcd = Hd44780::new(
            pin(Line::Rs),
            pin(Line::En),
            pin(Line::D4),
            pin(Line::D5),
            pin(Line::D6),
            pin(Line::D7),
            MockDelay {
                trace: Rc::clone(&trace),
            },
        );
        (lcd, trace)
    }

    #[test]
    fn test_empty_string_writes_no_nibbles() {
        let (mut lcd, trace) = mock_lcd();
        lcd.write_str("");
        assert!(trace.borrow().latched.is_empty());
    }

    #[test]
    fn test_write_data_sends_high_then_low_nibble() {
        let (mut lcd, trace) = mock_lcd();
        lcd.write_data(0xA5);

        let trace = trace.borrow();
        assert_eq!(trace.latched.len(), 2);
        assert_eq!(trace.latched[0].0, 0xA);
        assert_eq!(trace.latched[1].0, 0x5);
        // data register selected for both halves
        assert!(trace.latched[0].1);
        assert!(trace.latched[1].1);
    }

    #[test]
    fn test_write_instruction_selects_instruction_register() {
        let (mut lcd, trace) = mock_lcd();
        lcd.write_instruction(cmd::DISPLAY_ON);

        let bytes = trace.borrow().bytes();
        assert_eq!(bytes, std::vec![(cmd::DISPLAY_ON, false)]);
    }

    #[test]
    fn test_write_str_sends_characters_in_order() {
        let (mut lcd, trace) = mock_lcd();
        lcd.write_str("Hi");

        let bytes = trace.borrow().bytes();
        assert_eq!(bytes, std::vec![(b'H', true), (b'i', true)]);
    }

    #[test]
    fn test_move_to_line_two_sets_ddram_base() {
        let (mut lcd, trace) = mock_lcd();
        lcd.move_to_line_two();

        let bytes = trace.borrow().bytes();
        assert_eq!(bytes, std::vec![(0xC0, false)]);
    }

    #[test]
    fn test_init_sequence() {
        let (mut lcd, trace) = mock_lcd();
        lcd.init();

        let trace = trace.borrow();
        // three raw reset nibbles, then the 4-bit mode select nibble
        assert_eq!(trace.latched[0].0, 0x3);
        assert_eq!(trace.latched[1].0, 0x3);
        assert_eq!(trace.latched[2].0, 0x3);
        assert_eq!(trace.latched[3].0, 0x2);
        // everything up to here is register-select low
        assert!(trace.latched[..4].iter().all(|&(_, rs, _)| !rs));

        // the full instructions that follow, reassembled from nibble pairs
        let bytes: Vec<(u8, bool)> = trace
            .latched[4..]
            .chunks(2)
            .map(|pair| ((pair[0].0 << 4) | pair[1].0, pair[0].1))
            .collect();
        assert_eq!(
            bytes,
            std::vec![
                (cmd::FUNCTION_SET_4BIT, false),
                (cmd::DISPLAY_OFF, false),
                (cmd::CLEAR, false),
                (cmd::ENTRY_MODE, false),
                (cmd::DISPLAY_ON, false),
            ]
        );
    }

    #[test]
    fn test_clear_settles_before_next_bus_operation() {
        let (mut lcd, trace) = mock_lcd();
        lcd.clear();
        let cleared_at = trace.borrow().latched.last().unwrap().2;

        lcd.write_data(b'X');
        let next_at = trace.borrow().latched[2].2;

        // controller needs >= 4 ms to wipe DDRAM internally
        assert!(next_at - cleared_at >= 4_000);
    }

    #[test]
    fn test_init_clear_settles_before_entry_mode() {
        let (mut lcd, trace) = mock_lcd();
        lcd.init();

        let trace = trace.borrow();
        // nibbles: 4 raw + function-set(2) + display-off(2) + clear(2) + ...
        let clear_done = trace.latched[9].2;
        let entry_mode_start = trace.latched[10].2;
        assert!(entry_mode_start - clear_done >= 4_000);
    }
}
