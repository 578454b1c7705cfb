//! Display backends.
//!
//! Every backend implements [`Surface`](carbon_clock_common::surface::Surface).
//! The console backend is always available; the LED matrix backend needs the
//! `hardware` feature. The desktop simulator lives in its own crate.

pub mod console;
#[cfg(feature = "hardware")]
pub mod matrix;
pub mod options;

pub use console::ConsolePanel;
#[cfg(feature = "hardware")]
pub use matrix::MatrixPanel;
pub use options::{GpioMapping, MatrixOptions};
