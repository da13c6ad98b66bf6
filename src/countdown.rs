use crate::Clock;

const MS_PER_SEC: u32 = 1_000;
const MS_PER_MIN: u32 = 60_000;
const MS_PER_HOUR: u32 = 3_600_000;

#[derive(Clone, Copy)]
enum Rounding {
    Floor,
    #[cfg(feature = "ceil-api")]
    Ceil,
}

fn in_units(ms: u32, unit_ms: u32, rounding: Rounding) -> u32 {
    match rounding {
        Rounding::Floor => ms / unit_ms,
        #[cfg(feature = "ceil-api")]
        Rounding::Ceil => ms.div_ceil(unit_ms),
    }
}

/// A pausable countdown over an injected [`Clock`], driven by caller-side
/// polling.
///
/// The timer never schedules anything itself: the owning control loop calls
/// [`poll`](Self::poll) at whatever rate it runs, and the timer derives its
/// state from clock samples taken during those calls. A one-second boundary
/// crossing is reported through [`did_tick`](Self::did_tick), which holds
/// until the next poll. Polling coarser than once per second keeps the
/// elapsed time exact but may merge tick reports.
///
/// All time values are millisecond counts in `u32`; differences against the
/// clock use wrapping subtraction, so the countdown stays correct across a
/// clock wraparound. Nothing here can fail: queries on an expired timer
/// return zero instead of signaling.
pub struct CountdownTimer<C: Clock> {
    clock: C,
    /// Amount of time to count down.
    duration: u32,
    /// Virtual start instant; while running, `elapsed = now - anchor`.
    anchor: u32,
    /// Most recent clock reading.
    sample: u32,
    /// Frozen while paused, recomputed every poll while running.
    elapsed: u32,
    just_ticked: bool,
    /// Second bucket seen by the previous poll.
    last_second: u32,
    running: bool,
}

impl<C: Clock> CountdownTimer<C> {
    /// Create a paused timer that will count down `duration_ms`.
    ///
    /// The duration is taken as-is; a zero duration makes a timer that is
    /// already done.
    pub fn new(clock: C, duration_ms: u32) -> Self {
        Self {
            clock,
            duration: duration_ms,
            anchor: 0,
            sample: 0,
            elapsed: 0,
            just_ticked: false,
            last_second: 0,
            running: false,
        }
    }

    /// Sample the clock and update the countdown state.
    ///
    /// Does nothing while paused. While running, recomputes the elapsed
    /// time, raises the tick flag if a one-second boundary was crossed since
    /// the previous poll, and on expiry stops the timer, clamps the elapsed
    /// time to the duration and raises the tick flag unconditionally.
    pub fn poll(&mut self) {
        self.just_ticked = false;

        if !self.running {
            return;
        }

        self.sample = self.clock.now_ms();
        self.elapsed = self.sample.wrapping_sub(self.anchor);

        let second = self.seconds_remaining();
        if self.last_second != second {
            self.last_second = second;
            self.just_ticked = true;
        }

        if self.elapsed >= self.duration {
            self.running = false;
            self.elapsed = self.duration;
            self.just_ticked = true;
        }
    }

    /// Start counting, or resume from the frozen elapsed time.
    ///
    /// The anchor is placed `elapsed` milliseconds in the past so that time
    /// accumulated before a pause carries over.
    pub fn start(&mut self) {
        self.sample = self.clock.now_ms();
        self.anchor = self.sample.wrapping_sub(self.elapsed);
        self.running = true;
    }

    /// Freeze the elapsed time and stop counting. No-op while paused.
    pub fn pause(&mut self) {
        if self.running {
            self.running = false;
            self.sample = self.clock.now_ms();
            self.elapsed = self.sample.wrapping_sub(self.anchor);
        }
    }

    /// Force the countdown so that `remaining_ms` milliseconds are left,
    /// regardless of what had elapsed before.
    ///
    /// Used to resynchronize against an external reference. Raises the tick
    /// flag immediately and leaves the running state alone.
    pub fn set_remaining(&mut self, remaining_ms: u32) {
        self.sample = self.clock.now_ms();
        self.anchor = self
            .sample
            .wrapping_sub(self.duration.wrapping_sub(remaining_ms));
        self.elapsed = self.sample.wrapping_sub(self.anchor);
        self.just_ticked = true;
    }

    /// Replace the duration without touching the elapsed time or the
    /// running state.
    ///
    /// Shortening below the current elapsed time makes the next
    /// [`poll`](Self::poll) finish the timer; lengthening a finished timer
    /// revives its countdown.
    pub fn set_duration(&mut self, duration_ms: u32) {
        self.duration = duration_ms;
    }

    /// Stop counting and zero the elapsed time. The duration is kept.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed = 0;
    }

    /// Whether the timer is currently not counting.
    pub fn is_paused(&self) -> bool {
        !self.running
    }

    /// Whether the most recent [`poll`](Self::poll) crossed a one-second
    /// boundary (or [`set_remaining`](Self::set_remaining) forced a tick).
    pub fn did_tick(&self) -> bool {
        self.just_ticked
    }

    /// Whether the countdown has run out.
    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Milliseconds left, 0 once done.
    pub fn remaining_millis(&self) -> u32 {
        if self.elapsed < self.duration {
            self.duration - self.elapsed
        } else {
            0
        }
    }

    /// Whole seconds left, not capped at 60. 0 once done.
    pub fn remaining_secs(&self) -> u32 {
        in_units(self.remaining_millis(), MS_PER_SEC, Rounding::Floor)
    }

    /// Whole hours left. 0 once done.
    pub fn hours_remaining(&self) -> u32 {
        in_units(self.remaining_millis(), MS_PER_HOUR, Rounding::Floor)
    }

    /// Minutes digit of the remaining time (mod 60). 0 once done.
    pub fn minutes_remaining(&self) -> u32 {
        in_units(self.remaining_millis(), MS_PER_MIN, Rounding::Floor) % 60
    }

    /// Seconds digit of the remaining time (mod 60). 0 once done.
    pub fn seconds_remaining(&self) -> u32 {
        in_units(self.remaining_millis(), MS_PER_SEC, Rounding::Floor) % 60
    }

    /// Milliseconds digit of the remaining time (mod 1000). 0 once done.
    pub fn millis_remaining(&self) -> u32 {
        self.remaining_millis() % MS_PER_SEC
    }

    /// Hours left, rounded up, so a display shows "1" for any remaining
    /// fraction of an hour. 0 once done.
    #[cfg(feature = "ceil-api")]
    pub fn hours_remaining_ceil(&self) -> u32 {
        in_units(self.remaining_millis(), MS_PER_HOUR, Rounding::Ceil)
    }

    /// Minutes digit of the remaining time, rounded up (mod 60). 0 once
    /// done.
    #[cfg(feature = "ceil-api")]
    pub fn minutes_remaining_ceil(&self) -> u32 {
        in_units(self.remaining_millis(), MS_PER_MIN, Rounding::Ceil) % 60
    }

    /// Seconds digit of the remaining time, rounded up (mod 60). 0 once
    /// done.
    #[cfg(feature = "ceil-api")]
    pub fn seconds_remaining_ceil(&self) -> u32 {
        in_units(self.remaining_millis(), MS_PER_SEC, Rounding::Ceil) % 60
    }

    /// Whole seconds elapsed. 0 once done.
    #[cfg(feature = "elapsed-api")]
    pub fn elapsed_secs(&self) -> u32 {
        in_units(self.elapsed_millis(), MS_PER_SEC, Rounding::Floor)
    }

    /// Whole hours elapsed. 0 once done.
    #[cfg(feature = "elapsed-api")]
    pub fn hours_elapsed(&self) -> u32 {
        in_units(self.elapsed_millis(), MS_PER_HOUR, Rounding::Floor)
    }

    /// Minutes digit of the elapsed time (mod 60). 0 once done.
    #[cfg(feature = "elapsed-api")]
    pub fn minutes_elapsed(&self) -> u32 {
        in_units(self.elapsed_millis(), MS_PER_MIN, Rounding::Floor) % 60
    }

    /// Seconds digit of the elapsed time (mod 60). 0 once done.
    #[cfg(feature = "elapsed-api")]
    pub fn seconds_elapsed(&self) -> u32 {
        in_units(self.elapsed_millis(), MS_PER_SEC, Rounding::Floor) % 60
    }

    /// Milliseconds digit of the elapsed time (mod 1000). 0 once done.
    #[cfg(feature = "elapsed-api")]
    pub fn millis_elapsed(&self) -> u32 {
        self.elapsed_millis() % MS_PER_SEC
    }

    #[cfg(feature = "elapsed-api")]
    fn elapsed_millis(&self) -> u32 {
        if self.elapsed < self.duration {
            self.elapsed
        } else {
            0
        }
    }
}
