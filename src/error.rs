//! Startup errors.
//!
//! Once the render loop is running nothing can fail; every variant here is
//! raised while resolving configuration or opening the panel.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("unknown font `{name}` (available: {available})")]
    UnknownFont { name: String, available: String },

    #[error("invalid budget parameters: {0}")]
    InvalidParams(&'static str),

    #[error("invalid frame rate {0}: must be positive and at most 1000 frames per second")]
    InvalidFrameRate(f64),

    #[error("LED matrix initialisation failed: {0}")]
    Panel(String),

    #[error("failed to install the interrupt handler")]
    Signal(#[from] ctrlc::Error),
}

pub type Result<T> = std::result::Result<T, ClockError>;
