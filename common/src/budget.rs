//! Carbon budget calculation.
//!
//! The remaining budget is never stored. Each frame derives it from one sampled
//! timestamp and the [`BudgetParams`] injected at startup:
//!
//! ```text
//! elapsed           = now - epoch                       (seconds, may be negative)
//! remaining_tonnes  = initial_tonnes - elapsed * tonnes_per_second
//! remaining_seconds = remaining_tonnes / tonnes_per_second
//! ```
//!
//! Both outputs come from the same sample, so `remaining_seconds` is always
//! exactly `remaining_tonnes / tonnes_per_second`.
//!
//! # Exhaustion
//!
//! Past the depletion point both values go negative. [`Exhaustion`] selects
//! whether they are passed through unchanged or clamped at zero.

use crate::config::{BUDGET_EPOCH_SECS, INITIAL_BUDGET_TONNES, TONNES_PER_SECOND};

const MICROS_PER_SECOND: i64 = 1_000_000;

// =============================================================================
// Timestamp
// =============================================================================

/// A point in time with microsecond resolution.
///
/// Counted from 1970-01-01 00:00:00 on whatever time scale the caller samples.
/// The clock only ever subtracts two timestamps, so it works the same for
/// naive local time and UTC as long as both sides agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    micros: i64,
}

impl Timestamp {
    #[inline]
    pub const fn from_micros(micros: i64) -> Self { Self { micros } }

    #[inline]
    pub const fn from_secs(secs: i64) -> Self { Self { micros: secs.saturating_mul(MICROS_PER_SECOND) } }

    #[inline]
    pub const fn as_micros(self) -> i64 { self.micros }

    /// Shift by a signed number of microseconds, saturating at the range ends.
    #[inline]
    pub const fn saturating_add_micros(
        self,
        micros: i64,
    ) -> Self {
        Self { micros: self.micros.saturating_add(micros) }
    }

    /// Seconds elapsed since `earlier`. Negative if `earlier` is in the future.
    ///
    /// Computed in `i128` so the difference of any two timestamps is exact
    /// before the conversion to floating point.
    pub fn seconds_since(
        self,
        earlier: Self,
    ) -> f64 {
        let diff = i128::from(self.micros) - i128::from(earlier.micros);
        diff as f64 / MICROS_PER_SECOND as f64
    }
}

// =============================================================================
// Exhaustion Policy
// =============================================================================

/// What to show once the budget has run out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Exhaustion {
    /// Keep counting below zero (negative tonnage, negative years).
    #[default]
    PassThrough,
    /// Freeze both values at zero.
    Clamp,
}

// =============================================================================
// Budget Parameters
// =============================================================================

/// The three constants the countdown is derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetParams {
    /// Moment at which `initial_tonnes` were left.
    pub epoch: Timestamp,
    /// Budget remaining at `epoch`.
    pub initial_tonnes: f64,
    /// Depletion rate.
    pub tonnes_per_second: f64,
}

impl BudgetParams {
    pub const fn new(
        epoch: Timestamp,
        initial_tonnes: f64,
        tonnes_per_second: f64,
    ) -> Self {
        Self { epoch, initial_tonnes, tonnes_per_second }
    }

    /// Remaining budget at `now`. Total over all timestamps.
    pub fn remaining_at(
        &self,
        now: Timestamp,
    ) -> Remaining {
        let elapsed = now.seconds_since(self.epoch);
        let tonnes = self.initial_tonnes - elapsed * self.tonnes_per_second;
        Remaining { tonnes, seconds: tonnes / self.tonnes_per_second }
    }

    /// Moment at which the remaining budget reaches zero.
    pub fn depleted_at(&self) -> Timestamp {
        let micros = self.initial_tonnes / self.tonnes_per_second * MICROS_PER_SECOND as f64;
        // `as` saturates, which is what we want for absurd parameters
        self.epoch.saturating_add_micros(micros as i64)
    }
}

impl Default for BudgetParams {
    fn default() -> Self {
        Self::new(Timestamp::from_secs(BUDGET_EPOCH_SECS), INITIAL_BUDGET_TONNES, TONNES_PER_SECOND)
    }
}

// =============================================================================
// Remaining Budget
// =============================================================================

/// Remaining budget sampled at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Remaining {
    pub tonnes: f64,
    pub seconds: f64,
}

impl Remaining {
    /// True once the budget has gone below zero.
    #[inline]
    pub fn is_exhausted(&self) -> bool { self.tonnes < 0.0 }

    /// Apply an exhaustion policy. Clamping keeps `seconds == tonnes / rate`
    /// because both sides become zero together.
    pub fn with_policy(
        self,
        policy: Exhaustion,
    ) -> Self {
        match policy {
            Exhaustion::PassThrough => self,
            Exhaustion::Clamp if self.is_exhausted() => Self { tonnes: 0.0, seconds: 0.0 },
            Exhaustion::Clamp => self,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
