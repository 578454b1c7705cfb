//! Frame timing statistics.
//!
//! Tracks how long each frame took to render and how long the loop slept.
//! The render loop logs a line every
//! [`STATS_LOG_INTERVAL`](crate::config::STATS_LOG_INTERVAL) frames at
//! `debug` and a summary on shutdown.
//!
//! # Usage
//!
//! ```ignore
//! let mut stats = FrameStats::new();
//!
//! // In main loop:
//! let frame_start = Instant::now();
//! // ... render work ...
//! let render_time = frame_start.elapsed();
//! let sleep_start = Instant::now();
//! clock.sleep(interval);
//! stats.record_frame(frame_start.elapsed(), render_time, sleep_start.elapsed());
//! ```

use std::time::{Duration, Instant};

/// Frame timing statistics, updated once per frame.
#[derive(Debug)]
pub struct FrameStats {
    // Last frame (microseconds)
    /// Total frame time (render + sleep + overhead)
    pub frame_time_us: u32,
    /// Time spent clearing, drawing and swapping
    pub render_time_us: u32,
    /// Measured time spent in the clock's sleep (rate limiting)
    pub sleep_time_us: u32,

    // Statistics over render time, which is the part that varies
    pub render_time_min_us: u32,
    pub render_time_max_us: u32,
    render_time_avg_us: f32,

    pub total_frames: u64,

    start_time: Instant,
}

impl FrameStats {
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            render_time_min_us: u32::MAX,
            render_time_max_us: 0,
            render_time_avg_us: 0.0,
            total_frames: 0,
            start_time: Instant::now(),
        }
    }

    /// Record timing for one frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let render_us = as_micros_u32(render_time);

        self.frame_time_us = as_micros_u32(total_time);
        self.render_time_us = render_us;
        self.sleep_time_us = as_micros_u32(sleep_time);

        self.render_time_min_us = self.render_time_min_us.min(render_us);
        self.render_time_max_us = self.render_time_max_us.max(render_us);

        if self.total_frames == 0 {
            self.render_time_avg_us = render_us as f32;
        } else {
            self.render_time_avg_us =
                Self::EMA_ALPHA.mul_add(render_us as f32, (1.0 - Self::EMA_ALPHA) * self.render_time_avg_us);
        }

        self.total_frames += 1;
    }

    /// Exponential moving average of the render time in microseconds.
    #[inline]
    pub const fn render_time_avg_us(&self) -> u32 { self.render_time_avg_us as u32 }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Format uptime as HH:MM:SS. Hours keep growing past 99.
    pub fn uptime_string(&self) -> String { format_hms(self.uptime().as_secs()) }

    /// Frames per second since the stats were created.
    pub fn average_fps(&self) -> f64 {
        let secs = self.uptime().as_secs_f64();
        if secs > 0.0 { self.total_frames as f64 / secs } else { 0.0 }
    }
}

impl Default for FrameStats {
    fn default() -> Self { Self::new() }
}

fn as_micros_u32(duration: Duration) -> u32 { u32::try_from(duration.as_micros()).unwrap_or(u32::MAX) }

fn format_hms(secs: u64) -> String {
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;
    format!("{hours:02}:{mins:02}:{secs:02}")
}

// =============================================================================
// Tests
// =============================================================================
