//! Common types and constants for the carbon budget countdown clock.
//!
//! This crate contains platform-agnostic code shared between the LED matrix
//! binary, the console fallback and the desktop simulator:
//!
//! - [`budget`]: Remaining tonnes/time derived from a sampled timestamp
//! - [`format`]: Countdown and tonnage text formatting
//! - [`colors`]: RGB888 color constants for the panel
//! - [`config`]: Budget defaults, calendar constants and frame layout
//! - [`styles`]: Built-in fonts and text styles
//! - [`surface`]: Display surface capability and frame drawing
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible. It never reads the wall clock: every
//! timestamp is handed in by the caller, which keeps the math deterministic.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod budget;
pub mod colors;
pub mod config;
pub mod format;
pub mod styles;
pub mod surface;

// Re-export commonly used items
pub use budget::{BudgetParams, Exhaustion, Remaining, Timestamp};
pub use format::{format_remaining_time, format_tonnes, pluralize};
pub use surface::{CountdownFrame, FrameStyle, Surface, draw_frame};
