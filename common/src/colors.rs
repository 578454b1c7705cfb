//! Color constants for the countdown panel.
//!
//! HUB75 panels take 8 bits per channel, so everything here is `Rgb888`.
//! The two text colors match the original clock: amber for the time left,
//! purple for the tonnage.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// Pure black. Panel background; a cleared canvas is all black (LEDs off).
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Amber (255, 217, 25). Used for the remaining-time line.
pub const AMBER: Rgb888 = Rgb888::new(255, 217, 25);

/// Purple (153, 0, 230). Used for the remaining-tonnes line.
pub const PURPLE: Rgb888 = Rgb888::new(153, 0, 230);
