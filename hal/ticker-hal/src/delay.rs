//! Busy-wait delay abstraction
//!
//! The HD44780 display controller mandates minimum settle times between
//! bus operations (from ~1 µs around an enable pulse up to 4 ms after a
//! clear). The driver expresses those waits through this trait so host
//! tests can substitute a simulated clock.

/// Blocking microsecond/millisecond delay source
pub trait DelayUs {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        self.delay_us(ms.saturating_mul(1_000));
    }
}

// Allow passing `&mut delay` down into the display driver
impl<T: DelayUs + ?Sized> DelayUs for &mut T {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us);
    }
}
