//! LED matrix driver options.
//!
//! A plain mirror of the driver's option fields. The CLI fills it in verbatim
//! and the hardware backend copies it into the driver; nothing here is derived.

use carbon_clock_common::config::{DEFAULT_PANEL_COLS, DEFAULT_PANEL_ROWS};
use clap::ValueEnum;
use embedded_graphics::prelude::Size;

/// GPIO pin mapping variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GpioMapping {
    Regular,
    AdafruitHat,
    AdafruitHatPwm,
}

impl GpioMapping {
    /// Name the driver expects.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::AdafruitHat => "adafruit-hat",
            Self::AdafruitHatPwm => "adafruit-hat-pwm",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixOptions {
    pub rows: u32,
    pub cols: u32,
    pub chain_length: u32,
    pub parallel: u32,
    pub pwm_bits: u8,
    /// Percent, 1..=100.
    pub brightness: u8,
    /// `None` keeps the driver's compiled-in default.
    pub hardware_mapping: Option<GpioMapping>,
    /// 0 = progressive, 1 = interlaced.
    pub scan_mode: u8,
    pub pwm_lsb_nanoseconds: u32,
    pub show_refresh_rate: bool,
    pub gpio_slowdown: u8,
    pub disable_hardware_pulsing: bool,
    pub led_rgb_sequence: String,
    pub pixel_mapper_config: String,
    pub row_address_type: u8,
    pub multiplexing: u8,
}

impl MatrixOptions {
    /// Pixel size of the whole display: chained panels side by side,
    /// parallel chains stacked.
    pub fn canvas_size(&self) -> Size {
        Size::new(self.cols.saturating_mul(self.chain_length), self.rows.saturating_mul(self.parallel))
    }
}

impl Default for MatrixOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_PANEL_ROWS,
            cols: DEFAULT_PANEL_COLS,
            chain_length: 1,
            parallel: 1,
            pwm_bits: 11,
            brightness: 100,
            hardware_mapping: None,
            scan_mode: 1,
            pwm_lsb_nanoseconds: 130,
            show_refresh_rate: false,
            gpio_slowdown: 1,
            disable_hardware_pulsing: false,
            led_rgb_sequence: "RGB".to_string(),
            pixel_mapper_config: String::new(),
            row_address_type: 0,
            multiplexing: 0,
        }
    }
}
