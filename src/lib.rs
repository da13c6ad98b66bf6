#![cfg_attr(not(test), no_std)]

#[cfg(feature = "embassy-stm32")]
pub mod impl_embassy_stm32;
#[cfg(feature = "embassy-time")]
pub mod impl_embassy_time;

mod countdown;
mod tick_counter;

pub use countdown::CountdownTimer;
pub use tick_counter::TickCounter;

/// A free-running millisecond counter with an arbitrary epoch.
///
/// The counter must be monotonically non-decreasing and wrap silently at
/// `u32::MAX` (roughly every 49.7 days). Consumers only ever look at the
/// difference between two readings, taken with wrapping subtraction, so a
/// wraparound between readings is harmless as long as the readings are
/// less than one full wrap period apart.
pub trait Clock {
    /// Return the current counter value in milliseconds.
    fn now_ms(&mut self) -> u32;
}

impl<C: Clock> Clock for &mut C {
    fn now_ms(&mut self) -> u32 {
        C::now_ms(self)
    }
}
