//! Carbon budget countdown clock.
//!
//! Host-side library behind the `carbon-clock` binary: command line, clock,
//! render loop and display backends. The budget math, formatting and layout
//! come from `carbon-clock-common` and are shared with the simulator.
//!
//! # Testing
//!
//! Everything except the LED matrix backend runs on any host:
//! ```bash
//! cargo test --workspace --exclude carbon-clock-simulator
//! ```

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod panel;
pub mod profiling;
pub mod render;
pub mod signal;

pub use error::{ClockError, Result};
