//! GPIO pin abstractions
//!
//! Provides a trait for the digital lines the ticker drives: the six LCD
//! bus lines (D4-D7, E, RS). Implementations handle the actual hardware
//! register manipulation.

/// Digital output pin
///
/// Writes are unconditional register sets with no failure mode; if the
/// underlying GPIO is unavailable that is a wiring/configuration error,
/// not something the driver layer can recover from at runtime.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}
