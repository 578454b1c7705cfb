//! Command-line arguments.
//!
//! Split in two flattenable groups so every binary takes the same flags:
//! [`MatrixArgs`] mirrors the LED driver's options one-to-one, and
//! [`CountdownArgs`] configures the budget and the loop.

use std::time::Duration;

use carbon_clock_common::budget::{BudgetParams, Exhaustion};
use carbon_clock_common::config::{INITIAL_BUDGET_TONNES, TONNES_PER_SECOND};
use carbon_clock_common::styles::{DEFAULT_FONT_NAME, font_by_name, font_names};
use chrono::NaiveDateTime;
use clap::{Args, Parser, ValueEnum};

use crate::clock::timestamp_from_naive;
use crate::config::{DEFAULT_FPS, MIN_FRAME_INTERVAL, RunConfig};
use crate::error::{ClockError, Result};
use crate::panel::options::{GpioMapping, MatrixOptions};

// =============================================================================
// Top-level Command
// =============================================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "Carbon budget countdown clock for RGB LED matrix panels")]
pub struct Cli {
    #[command(flatten)]
    pub matrix: MatrixArgs,

    #[command(flatten)]
    pub countdown: CountdownArgs,

    /// Print frames to the terminal instead of driving the panel
    #[arg(long)]
    pub console: bool,
}

// =============================================================================
// LED Driver Options
// =============================================================================

#[derive(Args, Debug, Clone)]
pub struct MatrixArgs {
    /// Display rows. 16 for 16x32, 32 for 32x32
    #[arg(short = 'r', long, default_value_t = 32)]
    pub led_rows: u32,

    /// Panel columns. Typically 32 or 64
    #[arg(long, default_value_t = 32)]
    pub led_cols: u32,

    /// Daisy-chained boards
    #[arg(short = 'c', long, default_value_t = 1)]
    pub led_chain: u32,

    /// For Plus-models or RPi2: parallel chains. 1..3
    #[arg(short = 'P', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=3))]
    pub led_parallel: u32,

    /// Bits used for PWM. Something between 1..11
    #[arg(short = 'p', long, default_value_t = 11, value_parser = clap::value_parser!(u8).range(1..=11))]
    pub led_pwm_bits: u8,

    /// Sets brightness level. Range: 1..100
    #[arg(short = 'b', long, default_value_t = 100, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub led_brightness: u8,

    /// Hardware mapping
    #[arg(short = 'm', long, value_enum)]
    pub led_gpio_mapping: Option<GpioMapping>,

    /// Progressive or interlaced scan. 0 Progressive, 1 Interlaced
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub led_scan_mode: u8,

    /// Base time-unit for the on-time in the lowest significant bit in nanoseconds
    #[arg(long, default_value_t = 130)]
    pub led_pwm_lsb_nanoseconds: u32,

    /// Shows the current refresh rate of the LED panel
    #[arg(long)]
    pub led_show_refresh: bool,

    /// Slow down writing to GPIO. Range: 0..4
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub led_slowdown_gpio: u8,

    /// Don't use hardware pin-pulse generation
    #[arg(long)]
    pub led_no_hardware_pulse: bool,

    /// Switch if your matrix has led colors swapped
    #[arg(long, default_value = "RGB")]
    pub led_rgb_sequence: String,

    /// Apply pixel mappers, e.g. "Rotate:90"
    #[arg(long, default_value = "")]
    pub led_pixel_mapper: String,

    /// 0 = default; 1 = AB-addressed panels; 2 = row direct
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub led_row_addr_type: u8,

    /// Multiplexing type: 0=direct; 1=strip; 2=checker; 3=spiral; 4=ZStripe;
    /// 5=ZnMirrorZStripe; 6=coreman; 7=Kaler2Scan; 8=ZStripeUneven
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=8))]
    pub led_multiplexing: u8,
}

impl From<&MatrixArgs> for MatrixOptions {
    fn from(args: &MatrixArgs) -> Self {
        Self {
            rows: args.led_rows,
            cols: args.led_cols,
            chain_length: args.led_chain,
            parallel: args.led_parallel,
            pwm_bits: args.led_pwm_bits,
            brightness: args.led_brightness,
            hardware_mapping: args.led_gpio_mapping,
            scan_mode: args.led_scan_mode,
            pwm_lsb_nanoseconds: args.led_pwm_lsb_nanoseconds,
            show_refresh_rate: args.led_show_refresh,
            gpio_slowdown: args.led_slowdown_gpio,
            disable_hardware_pulsing: args.led_no_hardware_pulse,
            led_rgb_sequence: args.led_rgb_sequence.clone(),
            pixel_mapper_config: args.led_pixel_mapper.clone(),
            row_address_type: args.led_row_addr_type,
            multiplexing: args.led_multiplexing,
        }
    }
}

// =============================================================================
// Countdown Options
// =============================================================================

/// Exhaustion policy as a CLI value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExhaustionArg {
    /// Keep counting below zero
    PassThrough,
    /// Freeze at zero
    Clamp,
}

impl From<ExhaustionArg> for Exhaustion {
    fn from(arg: ExhaustionArg) -> Self {
        match arg {
            ExhaustionArg::PassThrough => Self::PassThrough,
            ExhaustionArg::Clamp => Self::Clamp,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct CountdownArgs {
    /// Moment the budget was estimated, as local time (YYYY-MM-DDTHH:MM:SS)
    #[arg(long, default_value = "2018-01-01T02:08:06")]
    pub start: NaiveDateTime,

    /// Budget remaining at the start, in tonnes of CO2
    #[arg(long, default_value_t = INITIAL_BUDGET_TONNES)]
    pub budget_tons: f64,

    /// Emission rate in tonnes of CO2 per second
    #[arg(long, default_value_t = TONNES_PER_SECOND)]
    pub tons_per_sec: f64,

    /// Frames per second; the loop sleeps 1/fps seconds after each frame
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: f64,

    /// Built-in font name (9x18B, 9x18, 9x15B, 7x13B, 6x10, 10x20, profont-12, profont-14, profont-18)
    #[arg(long, default_value = DEFAULT_FONT_NAME)]
    pub font: String,

    /// What to display once the budget is spent
    #[arg(long, value_enum, default_value_t = ExhaustionArg::PassThrough)]
    pub on_exhausted: ExhaustionArg,
}

impl CountdownArgs {
    /// Validate the arguments and resolve them into a [`RunConfig`].
    pub fn resolve(&self) -> Result<RunConfig> {
        if !self.budget_tons.is_finite() {
            return Err(ClockError::InvalidParams("budget must be a finite number"));
        }
        if !self.tons_per_sec.is_finite() || self.tons_per_sec <= 0.0 {
            return Err(ClockError::InvalidParams("emission rate must be finite and positive"));
        }
        let frame_interval = self.frame_interval()?;

        let font = font_by_name(&self.font).ok_or_else(|| ClockError::UnknownFont {
            name: self.font.clone(),
            available: font_names().collect::<Vec<_>>().join(", "),
        })?;

        Ok(RunConfig {
            params: BudgetParams::new(timestamp_from_naive(self.start), self.budget_tons, self.tons_per_sec),
            exhaustion: self.on_exhausted.into(),
            frame_interval,
            font,
        })
    }

    /// Sleep between frames for `--fps`, between [`MIN_FRAME_INTERVAL`] and
    /// whatever a `Duration` can hold.
    fn frame_interval(&self) -> Result<Duration> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(ClockError::InvalidFrameRate(self.fps));
        }
        match Duration::try_from_secs_f64(1.0 / self.fps) {
            Ok(interval) if interval >= MIN_FRAME_INTERVAL => Ok(interval),
            _ => Err(ClockError::InvalidFrameRate(self.fps)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
