//! Countdown text formatting.
//!
//! Produces the two panel lines into fixed-capacity `heapless` strings, so no
//! allocation happens per frame:
//!
//! ```text
//! 7YRS 123DAYS 04:05:06
//! 294,385,210,117 TONS
//! ```
//!
//! Time decomposition uses floor division (remainders are never negative), so
//! a negative countdown reads as e.g. `-1YRS 365DAYS 01:06:39` rather than
//! mixing signs across fields.

use core::fmt::Write;

use heapless::String;

use crate::config::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_YEAR, TONNES_SUFFIX};

/// Capacity of the remaining-time line. Fits `i64::MIN` years plus the rest.
pub const TIME_TEXT_LEN: usize = 48;

/// Capacity of the tonnage line. Fits a grouped `i64` plus sign and suffix.
pub const TONNES_TEXT_LEN: usize = 40;

/// Capacity of a pluralized unit label.
pub const LABEL_LEN: usize = 16;

pub type TimeText = String<TIME_TEXT_LEN>;
pub type TonnesText = String<TONNES_TEXT_LEN>;

// =============================================================================
// Pluralization
// =============================================================================

/// Append `S` to `label` unless `count` is exactly one. Zero pluralizes.
pub fn pluralize(
    label: &str,
    count: i64,
) -> String<LABEL_LEN> {
    let mut s = String::new();
    s.push_str(label).ok();
    if count != 1 {
        s.push('S').ok();
    }
    s
}

// =============================================================================
// Remaining Time
// =============================================================================

/// Format a number of seconds as `{Y}YR(S) {DDD}DAY(S) HH:MM:SS`.
///
/// Years are fixed 31,540,000-second blocks. Fractional seconds are dropped
/// after flooring, so `0.9` reads as zero and `-0.1` as one second short of
/// zero.
pub fn format_remaining_time(total_seconds: f64) -> TimeText {
    let total = floor_to_i64(total_seconds);

    let years = total.div_euclid(SECONDS_PER_YEAR);
    let rest = total.rem_euclid(SECONDS_PER_YEAR);
    let days = rest / SECONDS_PER_DAY;
    let rest = rest % SECONDS_PER_DAY;
    let hours = rest / SECONDS_PER_HOUR;
    let rest = rest % SECONDS_PER_HOUR;
    let minutes = rest / SECONDS_PER_MINUTE;
    let seconds = rest % SECONDS_PER_MINUTE;

    let mut s = TimeText::new();
    let _ = write!(
        s,
        "{years}{} {days:03}{} {hours:02}:{minutes:02}:{seconds:02}",
        pluralize("YR", years),
        pluralize("DAY", days),
    );
    s
}

/// Round toward negative infinity, saturating at the `i64` range.
/// NaN maps to zero.
fn floor_to_i64(value: f64) -> i64 {
    let truncated = value as i64;
    if (truncated as f64) > value { truncated.saturating_sub(1) } else { truncated }
}

// =============================================================================
// Tonnage
// =============================================================================

/// Format tonnes as a comma-grouped integer with a ` TONS` suffix.
///
/// The value is truncated toward zero first (`-0.7` becomes `0`).
pub fn format_tonnes(tonnes: f64) -> TonnesText {
    let whole = tonnes as i64;

    let mut s = TonnesText::new();
    if whole < 0 {
        s.push('-').ok();
    }
    push_grouped(&mut s, whole.unsigned_abs());
    s.push_str(TONNES_SUFFIX).ok();
    s
}

/// Push decimal digits of `val` with a comma every three digits.
fn push_grouped<const N: usize>(
    s: &mut String<N>,
    mut val: u64,
) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    // Build digits in reverse
    let mut digits = [0u8; 20];
    let mut len = 0;
    while val > 0 {
        digits[len] = (val % 10) as u8;
        val /= 10;
        len += 1;
    }

    // Push in correct order, with a separator before each full group of three
    let mut i = len;
    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
        if i > 0 && i % 3 == 0 {
            s.push(',').ok();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Pluralization Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_pluralize_one_is_singular() {
        assert_eq!(pluralize("YR", 1).as_str(), "YR");
        assert_eq!(pluralize("DAY", 1).as_str(), "DAY");
    }

    #[test]
    fn test_pluralize_zero_and_many() {
        assert_eq!(pluralize("YR", 0).as_str(), "YRS", "Zero pluralizes");
        assert_eq!(pluralize("YR", 2).as_str(), "YRS");
        assert_eq!(pluralize("DAY", 364).as_str(), "DAYS");
    }

    #[test]
    fn test_pluralize_negative() {
        assert_eq!(pluralize("YR", -1).as_str(), "YRS");
    }

    // -------------------------------------------------------------------------
    // Remaining Time Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_time_zero() {
        assert_eq!(format_remaining_time(0.0).as_str(), "0YRS 000DAYS 00:00:00");
    }

    #[test]
    fn test_time_one_second() {
        assert_eq!(format_remaining_time(1.0).as_str(), "0YRS 000DAYS 00:00:01");
    }

    #[test]
    fn test_time_exactly_one_year() {
        assert_eq!(format_remaining_time(31_540_000.0).as_str(), "1YR 000DAYS 00:00:00");
    }

    #[test]
    fn test_time_one_year_one_day() {
        assert_eq!(format_remaining_time(31_540_000.0 + 86_400.0).as_str(), "1YR 001DAY 00:00:00");
    }

    #[test]
    fn test_time_all_fields() {
        let secs = 7 * SECONDS_PER_YEAR + 123 * SECONDS_PER_DAY + 4 * SECONDS_PER_HOUR + 5 * 60 + 6;
        assert_eq!(format_remaining_time(secs as f64).as_str(), "7YRS 123DAYS 04:05:06");
    }

    #[test]
    fn test_time_year_is_not_365_days() {
        // 365 days is 31,536,000s, which is still short of a countdown year
        assert_eq!(format_remaining_time(31_536_000.0).as_str(), "0YRS 365DAYS 00:00:00");
    }

    #[test]
    fn test_time_drops_fraction() {
        assert_eq!(format_remaining_time(59.999).as_str(), "0YRS 000DAYS 00:00:59");
    }

    #[test]
    fn test_time_negative_uses_floor_division() {
        assert_eq!(format_remaining_time(-1.0).as_str(), "-1YRS 365DAYS 01:06:39");
        assert_eq!(format_remaining_time(-0.5).as_str(), "-1YRS 365DAYS 01:06:39");
    }

    #[test]
    fn test_time_extreme_values_fit() {
        let s = format_remaining_time(f64::MIN);
        assert!(s.starts_with('-'), "Got {s}");
        assert!(s.contains("YRS "), "Got {s}");
        assert_eq!(format_remaining_time(f64::NAN).as_str(), "0YRS 000DAYS 00:00:00");
    }

    // -------------------------------------------------------------------------
    // Tonnage Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tonnes_initial_budget() {
        assert_eq!(format_tonnes(420_000_000_000.0).as_str(), "420,000,000,000 TONS");
    }

    #[test]
    fn test_tonnes_grouping_boundaries() {
        assert_eq!(format_tonnes(0.0).as_str(), "0 TONS");
        assert_eq!(format_tonnes(999.0).as_str(), "999 TONS");
        assert_eq!(format_tonnes(1_000.0).as_str(), "1,000 TONS");
        assert_eq!(format_tonnes(12_345.0).as_str(), "12,345 TONS");
        assert_eq!(format_tonnes(123_456.0).as_str(), "123,456 TONS");
        assert_eq!(format_tonnes(1_234_567.0).as_str(), "1,234,567 TONS");
    }

    #[test]
    fn test_tonnes_truncates_toward_zero() {
        assert_eq!(format_tonnes(1_999.99).as_str(), "1,999 TONS");
        assert_eq!(format_tonnes(-0.7).as_str(), "0 TONS");
        assert_eq!(format_tonnes(-1_331.5).as_str(), "-1,331 TONS");
    }

    #[test]
    fn test_tonnes_extreme_values_fit() {
        assert_eq!(format_tonnes(f64::MAX).as_str(), "9,223,372,036,854,775,807 TONS");
        assert_eq!(format_tonnes(f64::MIN).as_str(), "-9,223,372,036,854,775,808 TONS");
    }
}
