//! Countdown render loop.
//!
//! One state, "running". Each iteration:
//!
//! 1. clear the offscreen buffer
//! 2. sample the clock and derive the remaining budget
//! 3. format the time and tonnage lines
//! 4. draw both lines
//! 5. swap on vsync
//! 6. sleep for the fixed frame interval
//!
//! The loop only ends when the `running` flag is cleared (Ctrl-C, or the
//! simulator window closing). It is checked once per iteration, so shutdown
//! takes at most one frame interval.

use std::sync::atomic::AtomicBool;
use std::time::Instant;

use carbon_clock_common::budget::Timestamp;
use carbon_clock_common::surface::{CountdownFrame, FrameStyle, Surface, draw_frame};
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::config::{RunConfig, STATS_LOG_INTERVAL};
use crate::profiling::FrameStats;
use crate::signal::is_running;

// =============================================================================
// Countdown
// =============================================================================

/// Per-frame work: budget calculation, formatting and drawing.
pub struct Countdown {
    config: RunConfig,
    style: FrameStyle<'static>,
    /// Exhaustion is reported once, on the first frame that sees it.
    exhaustion_reported: bool,
}

impl Countdown {
    pub const fn new(config: RunConfig) -> Self {
        Self { config, style: FrameStyle::new(config.font), exhaustion_reported: false }
    }

    /// Build the frame shown at `now`.
    pub fn frame_at(
        &mut self,
        now: Timestamp,
    ) -> CountdownFrame {
        let remaining = self.config.params.remaining_at(now);

        if remaining.is_exhausted() && !self.exhaustion_reported {
            warn!(
                tonnes = remaining.tonnes,
                policy = ?self.config.exhaustion,
                "carbon budget exhausted"
            );
            self.exhaustion_reported = true;
        }

        CountdownFrame::new(&remaining.with_policy(self.config.exhaustion))
    }

    /// Render one frame: clear, sample, draw, swap.
    pub fn render<S, C>(
        &mut self,
        surface: &mut S,
        clock: &C,
    ) where
        S: Surface + ?Sized,
        C: Clock + ?Sized,
    {
        surface.clear();
        let frame = self.frame_at(clock.now());
        draw_frame(surface, &frame, &self.style);
        surface.swap_on_vsync();
    }
}

// =============================================================================
// Render Loop
// =============================================================================

/// Run the countdown until `running` is cleared. Returns the frame statistics.
pub fn run<S, C>(
    surface: &mut S,
    clock: &C,
    config: RunConfig,
    running: &AtomicBool,
) -> FrameStats
where
    S: Surface + ?Sized,
    C: Clock + ?Sized,
{
    let mut countdown = Countdown::new(config);
    let mut stats = FrameStats::new();

    debug!(interval = ?config.frame_interval, "render loop started");

    while is_running(running) {
        let frame_start = Instant::now();

        countdown.render(surface, clock);
        let render_time = frame_start.elapsed();

        let sleep_start = Instant::now();
        clock.sleep(config.frame_interval);
        stats.record_frame(frame_start.elapsed(), render_time, sleep_start.elapsed());

        if stats.total_frames % STATS_LOG_INTERVAL == 0 {
            debug!(
                frames = stats.total_frames,
                frame_us = stats.frame_time_us,
                render_us = stats.render_time_us,
                sleep_us = stats.sleep_time_us,
                render_min_us = stats.render_time_min_us,
                render_avg_us = stats.render_time_avg_us(),
                render_max_us = stats.render_time_max_us,
                uptime = %stats.uptime_string(),
                "frame stats"
            );
        }
    }

    stats
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use carbon_clock_common::budget::{BudgetParams, Exhaustion};
    use carbon_clock_common::colors::{AMBER, PURPLE};
    use embedded_graphics::mono_font::MonoTextStyle;
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use embedded_graphics::pixelcolor::Rgb888;
    use embedded_graphics::prelude::{Point, Size};

    use super::*;
    use crate::clock::ManualClock;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        Text(String, Point, Option<Rgb888>, Size),
        Swap,
    }

    /// Records calls and clears `running` after `limit` swaps.
    struct StopAfter<'a> {
        calls: Vec<Call>,
        swaps: usize,
        limit: usize,
        running: &'a AtomicBool,
    }

    impl<'a> StopAfter<'a> {
        fn new(
            limit: usize,
            running: &'a AtomicBool,
        ) -> Self {
            Self { calls: Vec::new(), swaps: 0, limit, running }
        }

        /// Text lines drawn per frame, in order.
        fn frames(&self) -> Vec<Vec<String>> {
            let mut frames = Vec::new();
            let mut current = Vec::new();
            for call in &self.calls {
                match call {
                    Call::Clear => current.clear(),
                    Call::Text(text, ..) => current.push(text.clone()),
                    Call::Swap => frames.push(std::mem::take(&mut current)),
                }
            }
            frames
        }
    }

    impl Surface for StopAfter<'_> {
        fn clear(&mut self) { self.calls.push(Call::Clear); }

        fn draw_text(
            &mut self,
            text: &str,
            origin: Point,
            style: MonoTextStyle<'_, Rgb888>,
        ) {
            self.calls.push(Call::Text(text.to_string(), origin, style.text_color, style.font.character_size));
        }

        fn swap_on_vsync(&mut self) {
            self.calls.push(Call::Swap);
            self.swaps += 1;
            if self.swaps >= self.limit {
                self.running.store(false, Ordering::Relaxed);
            }
        }
    }

    fn config_with(
        params: BudgetParams,
        exhaustion: Exhaustion,
    ) -> RunConfig {
        RunConfig { params, exhaustion, frame_interval: Duration::from_secs(1), ..RunConfig::default() }
    }

    // -------------------------------------------------------------------------
    // Loop Control Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_run_does_nothing_when_already_stopped() {
        let running = AtomicBool::new(false);
        let mut surface = StopAfter::new(1, &running);
        let clock = ManualClock::new(Timestamp::from_secs(0));

        let stats = run(&mut surface, &clock, RunConfig::default(), &running);

        assert_eq!(stats.total_frames, 0);
        assert!(surface.calls.is_empty(), "Nothing drawn after shutdown");
        assert_eq!(clock.total_slept(), Duration::ZERO);
    }

    #[test]
    fn test_run_stops_after_flag_cleared() {
        let running = AtomicBool::new(true);
        let mut surface = StopAfter::new(5, &running);
        let clock = ManualClock::new(Timestamp::from_secs(0));

        let stats = run(&mut surface, &clock, RunConfig::default(), &running);

        assert_eq!(stats.total_frames, 5);
        assert_eq!(surface.swaps, 5);
    }

    #[test]
    fn test_frame_call_order() {
        let running = AtomicBool::new(true);
        let mut surface = StopAfter::new(1, &running);
        let params = BudgetParams::default();
        let clock = ManualClock::new(params.epoch);

        run(&mut surface, &clock, config_with(params, Exhaustion::PassThrough), &running);

        let default_size = RunConfig::default().font.character_size;
        assert_eq!(surface.calls, vec![
            Call::Clear,
            Call::Text("10YRS 001DAY 18:16:56".to_string(), Point::new(1, 14), Some(AMBER), default_size),
            Call::Text("420,000,000,000 TONS".to_string(), Point::new(1, 28), Some(PURPLE), default_size),
            Call::Swap,
        ]);
    }

    // -------------------------------------------------------------------------
    // Cadence Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_each_frame_samples_the_clock_after_sleeping() {
        let running = AtomicBool::new(true);
        let mut surface = StopAfter::new(3, &running);
        let params = BudgetParams::default();
        let clock = ManualClock::new(params.epoch);

        run(&mut surface, &clock, config_with(params, Exhaustion::PassThrough), &running);

        assert_eq!(surface.frames(), vec![
            vec!["10YRS 001DAY 18:16:56".to_string(), "420,000,000,000 TONS".to_string()],
            vec!["10YRS 001DAY 18:16:55".to_string(), "419,999,998,669 TONS".to_string()],
            vec!["10YRS 001DAY 18:16:54".to_string(), "419,999,997,338 TONS".to_string()],
        ]);
        assert_eq!(clock.total_slept(), Duration::from_secs(3), "One fixed sleep per frame");
    }

    #[test]
    fn test_sleep_uses_configured_interval() {
        let running = AtomicBool::new(true);
        let mut surface = StopAfter::new(6, &running);
        let clock = ManualClock::new(Timestamp::from_secs(0));
        let config = RunConfig { frame_interval: Duration::from_millis(250), ..RunConfig::default() };

        run(&mut surface, &clock, config, &running);

        assert_eq!(clock.total_slept(), Duration::from_millis(1_500));
    }

    #[test]
    fn test_stats_record_measured_sleep() {
        /// Sleeps for real, but only a fraction of what it is asked to.
        struct ShortSleeper;

        impl Clock for ShortSleeper {
            fn now(&self) -> Timestamp { Timestamp::from_secs(0) }

            fn sleep(
                &self,
                _duration: Duration,
            ) {
                std::thread::sleep(Duration::from_millis(2));
            }
        }

        let running = AtomicBool::new(true);
        let mut surface = StopAfter::new(1, &running);
        let config = RunConfig { frame_interval: Duration::from_secs(60), ..RunConfig::default() };

        let stats = run(&mut surface, &ShortSleeper, config, &running);

        assert!(stats.sleep_time_us >= 2_000);
        assert!(stats.sleep_time_us < 60_000_000, "Measured sleep, not the requested interval");
        assert!(stats.frame_time_us >= stats.sleep_time_us);
    }

    // -------------------------------------------------------------------------
    // Exhaustion Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_exhausted_pass_through() {
        let params = BudgetParams::new(Timestamp::from_secs(0), 10.0, 1.0);
        let mut countdown = Countdown::new(config_with(params, Exhaustion::PassThrough));

        let frame = countdown.frame_at(Timestamp::from_secs(20));
        assert_eq!(frame.time_text.as_str(), "-1YRS 365DAYS 01:06:30");
        assert_eq!(frame.tonnes_text.as_str(), "-10 TONS");
    }

    #[test]
    fn test_exhausted_clamp() {
        let params = BudgetParams::new(Timestamp::from_secs(0), 10.0, 1.0);
        let mut countdown = Countdown::new(config_with(params, Exhaustion::Clamp));

        let frame = countdown.frame_at(Timestamp::from_secs(20));
        assert_eq!(frame.time_text.as_str(), "0YRS 000DAYS 00:00:00");
        assert_eq!(frame.tonnes_text.as_str(), "0 TONS");
    }

    #[test]
    fn test_exhaustion_reported_once() {
        let params = BudgetParams::new(Timestamp::from_secs(0), 10.0, 1.0);
        let mut countdown = Countdown::new(config_with(params, Exhaustion::Clamp));

        countdown.frame_at(Timestamp::from_secs(5));
        assert!(!countdown.exhaustion_reported);
        countdown.frame_at(Timestamp::from_secs(11));
        assert!(countdown.exhaustion_reported);
        countdown.frame_at(Timestamp::from_secs(12));
        assert!(countdown.exhaustion_reported);
    }

    // -------------------------------------------------------------------------
    // Font Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_configured_font_is_used() {
        let running = AtomicBool::new(true);
        let mut surface = StopAfter::new(1, &running);
        let clock = ManualClock::new(Timestamp::from_secs(0));
        let config = RunConfig { font: &FONT_6X10, ..RunConfig::default() };

        run(&mut surface, &clock, config, &running);

        for call in &surface.calls {
            if let Call::Text(_, _, _, size) = call {
                assert_eq!(*size, Size::new(6, 10));
            }
        }
        assert_eq!(surface.calls.len(), 4);
    }
}
