use crate::Clock;

/// [`Clock`] backed by embassy-time's global time driver.
///
/// The 64-bit millisecond count is truncated to `u32`, which is exactly the
/// wrapping counter the [`Clock`] contract asks for.
#[derive(Clone, Copy, Default)]
pub struct EmbassyTimeClock;

impl Clock for EmbassyTimeClock {
    fn now_ms(&mut self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}
