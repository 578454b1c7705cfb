//! Runtime configuration for the render loop.
//!
//! [`RunConfig`] is everything the loop needs, resolved once at startup from
//! the command line (see [`CountdownArgs::resolve`](crate::cli::CountdownArgs::resolve)).
//! These values use `std::time::Duration`, which is why they live here rather
//! than in the `no_std` common crate.

use std::time::Duration;

use carbon_clock_common::budget::{BudgetParams, Exhaustion};
use carbon_clock_common::styles::DEFAULT_FONT;
use embedded_graphics::mono_font::MonoFont;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Default target frame rate. The panel only changes once per second, so three
/// frames are plenty.
pub const DEFAULT_FPS: f64 = 3.0;

/// Shortest accepted frame interval. Anything shorter would busy-loop.
pub const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);

/// Frames between two `debug` frame-statistics lines (about a minute at 3 FPS).
pub const STATS_LOG_INTERVAL: u64 = 180;

// =============================================================================
// Run Configuration
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct RunConfig {
    pub params: BudgetParams,
    pub exhaustion: Exhaustion,
    /// Fixed sleep after every swap.
    pub frame_interval: Duration,
    pub font: &'static MonoFont<'static>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            params: BudgetParams::default(),
            exhaustion: Exhaustion::default(),
            frame_interval: Duration::from_secs_f64(1.0 / DEFAULT_FPS),
            font: DEFAULT_FONT,
        }
    }
}
