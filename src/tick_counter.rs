use core::cell::Cell;
use critical_section::Mutex;

use crate::Clock;

/// A software millisecond counter fed by a periodic interrupt.
///
/// For targets without a ready-made time driver: keep one in a `static`,
/// call [`tick`](Self::tick) from a 1 kHz timer interrupt, and hand a
/// reference to the control loop as its [`Clock`]. Wraps at `u32::MAX` like
/// any other clock source.
pub struct TickCounter(Mutex<Cell<u32>>);

impl TickCounter {
    pub const fn new() -> Self {
        Self(Mutex::new(Cell::new(0)))
    }

    /// Advance the counter by one millisecond. Call from the tick interrupt.
    pub fn tick(&self) {
        critical_section::with(|cs| {
            let count = self.0.borrow(cs);
            count.set(count.get().wrapping_add(1));
        });
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for &TickCounter {
    fn now_ms(&mut self) -> u32 {
        critical_section::with(|cs| self.0.borrow(cs).get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Clock;

    #[test]
    fn counts_ticks_as_milliseconds() {
        let counter = TickCounter::new();
        let mut clock = &counter;

        assert_eq!(clock.now_ms(), 0);
        for _ in 0..250 {
            counter.tick();
        }
        assert_eq!(clock.now_ms(), 250);
    }

    #[test]
    fn shared_reference_reads_the_same_counter() {
        let counter = TickCounter::new();
        let mut a = &counter;
        let mut b = &counter;

        counter.tick();
        assert_eq!(a.now_ms(), 1);
        assert_eq!(b.now_ms(), 1);
    }
}
