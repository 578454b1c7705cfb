//! Budget defaults, calendar constants and frame layout.
//!
//! Everything here is a compile-time default. The binaries inject the budget
//! values into [`BudgetParams`](crate::budget::BudgetParams) at startup so they
//! can be overridden from the command line and replaced in tests.

use embedded_graphics::prelude::Point;

// =============================================================================
// Carbon Budget Defaults
// =============================================================================

/// Estimated start of the budget: 2018-01-01 02:08:06, as naive local time
/// expressed in seconds since 1970-01-01 00:00:00.
pub const BUDGET_EPOCH_SECS: i64 = 1_514_772_486;

/// Remaining budget at the epoch, in tonnes of CO2.
pub const INITIAL_BUDGET_TONNES: f64 = 420_000_000_000.0;

/// Global emission rate, in tonnes of CO2 per second.
pub const TONNES_PER_SECOND: f64 = 1331.0;

// =============================================================================
// Calendar Constants
// =============================================================================

/// Length of a countdown "year". Fixed at 31,540,000 seconds; deliberately
/// not 365.25 days so the display matches the original clock.
pub const SECONDS_PER_YEAR: i64 = 31_540_000;

pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_MINUTE: i64 = 60;

// =============================================================================
// Frame Layout
// =============================================================================

/// Baseline origin of the remaining-time line (column 1, row 14).
pub const TIME_TEXT_ORIGIN: Point = Point::new(1, 14);

/// Baseline origin of the remaining-tonnes line (column 1, row 28).
pub const TONNES_TEXT_ORIGIN: Point = Point::new(1, 28);

/// Suffix appended to the tonnage line.
pub const TONNES_SUFFIX: &str = " TONS";

// =============================================================================
// Panel Geometry Defaults
// =============================================================================

/// Rows per panel (32 for 32x32 and 64x32 panels).
pub const DEFAULT_PANEL_ROWS: u32 = 32;

/// Columns per panel.
pub const DEFAULT_PANEL_COLS: u32 = 32;
