//! Time source for the render loop.
//!
//! The loop never touches the wall clock directly. It asks a [`Clock`] for the
//! current time and for the per-frame sleep, so tests can drive it with a
//! [`ManualClock`] that advances only when the loop sleeps.

use std::cell::Cell;
use std::thread;
use std::time::Duration;

use carbon_clock_common::budget::Timestamp;
use chrono::{DateTime, Local, NaiveDateTime};

pub trait Clock {
    /// Sample the current time.
    fn now(&self) -> Timestamp;

    /// Block for `duration`.
    fn sleep(
        &self,
        duration: Duration,
    );
}

// =============================================================================
// Wall Clock
// =============================================================================

/// Naive local wall-clock time. The budget epoch is a naive local time too,
/// so the two line up without any time zone handling.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> Timestamp { timestamp_from_naive(Local::now().naive_local()) }

    fn sleep(
        &self,
        duration: Duration,
    ) {
        thread::sleep(duration);
    }
}

/// Convert a naive date-time into a [`Timestamp`] on the same (naive) scale.
pub fn timestamp_from_naive(dt: NaiveDateTime) -> Timestamp { Timestamp::from_micros(dt.and_utc().timestamp_micros()) }

/// Inverse of [`timestamp_from_naive`]. `None` outside chrono's date range.
pub fn naive_from_timestamp(ts: Timestamp) -> Option<NaiveDateTime> {
    let micros = ts.as_micros();
    let secs = micros.div_euclid(1_000_000);
    let nanos = (micros.rem_euclid(1_000_000) * 1_000) as u32;
    DateTime::from_timestamp(secs, nanos).map(|dt| dt.naive_utc())
}

// =============================================================================
// Manual Clock
// =============================================================================

/// A clock that only moves when told to. `sleep` advances it instantly, which
/// makes the loop cadence observable without waiting.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Timestamp>,
    slept: Cell<Duration>,
}

impl ManualClock {
    pub const fn new(start: Timestamp) -> Self {
        Self { now: Cell::new(start), slept: Cell::new(Duration::ZERO) }
    }

    /// Move the clock forward without counting it as sleep.
    pub fn advance(
        &self,
        duration: Duration,
    ) {
        let micros = i64::try_from(duration.as_micros()).unwrap_or(i64::MAX);
        self.now.set(self.now.get().saturating_add_micros(micros));
    }

    /// Total time spent in `sleep`.
    pub fn total_slept(&self) -> Duration { self.slept.get() }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp { self.now.get() }

    fn sleep(
        &self,
        duration: Duration,
    ) {
        self.advance(duration);
        self.slept.set(self.slept.get() + duration);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use carbon_clock_common::config::BUDGET_EPOCH_SECS;
    use chrono::NaiveDate;

    use super::*;

    fn epoch_naive() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 1, 1).unwrap().and_hms_opt(2, 8, 6).unwrap()
    }

    #[test]
    fn test_timestamp_from_naive_matches_default_epoch() {
        assert_eq!(timestamp_from_naive(epoch_naive()), Timestamp::from_secs(BUDGET_EPOCH_SECS));
    }

    #[test]
    fn test_naive_round_trip_with_fraction() {
        let dt = epoch_naive() + chrono::TimeDelta::microseconds(250_001);
        assert_eq!(naive_from_timestamp(timestamp_from_naive(dt)), Some(dt));
    }

    #[test]
    fn test_naive_before_1970() {
        let dt = NaiveDate::from_ymd_opt(1969, 12, 31).unwrap().and_hms_micro_opt(23, 59, 59, 500_000).unwrap();
        assert_eq!(timestamp_from_naive(dt), Timestamp::from_micros(-500_000));
        assert_eq!(naive_from_timestamp(Timestamp::from_micros(-500_000)), Some(dt));
    }

    #[test]
    fn test_manual_clock_sleep_advances_time() {
        let clock = ManualClock::new(Timestamp::from_secs(10));
        clock.sleep(Duration::from_millis(1_500));
        assert_eq!(clock.now(), Timestamp::from_micros(11_500_000));
        assert_eq!(clock.total_slept(), Duration::from_millis(1_500));
    }

    #[test]
    fn test_manual_clock_advance_is_not_sleep() {
        let clock = ManualClock::new(Timestamp::from_secs(0));
        clock.advance(Duration::from_secs(5));
        assert_eq!(clock.now(), Timestamp::from_secs(5));
        assert_eq!(clock.total_slept(), Duration::ZERO);
    }

    #[test]
    fn test_local_clock_is_after_epoch() {
        assert!(LocalClock.now() > Timestamp::from_secs(BUDGET_EPOCH_SECS));
    }
}
