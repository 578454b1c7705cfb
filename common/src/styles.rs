//! Built-in fonts and pre-computed text styles.
//!
//! The panel text is rasterized by `embedded-graphics` from compiled-in mono
//! fonts, so there is no font file to ship next to the binary. Fonts are looked
//! up by a short name once at startup (see [`font_by_name`]).
//!
//! `9x18B` is the default: it is the bold 9x18 X11 font the clock was
//! designed around, and two lines of it fill a 32-row panel.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_7X13_BOLD, FONT_9X15_BOLD, FONT_9X18, FONT_9X18_BOLD, FONT_10X20},
    },
    pixelcolor::Rgb888,
};
use profont::{PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT};

use crate::colors::{AMBER, PURPLE};

// =============================================================================
// Font Table
// =============================================================================

/// Name of the font used when none is requested.
pub const DEFAULT_FONT_NAME: &str = "9x18B";

/// Default font. Same as `font_by_name(DEFAULT_FONT_NAME)`.
pub const DEFAULT_FONT: &MonoFont<'static> = &FONT_9X18_BOLD;

/// All selectable fonts, by name.
pub const FONTS: &[(&str, &MonoFont<'static>)] = &[
    ("9x18B", &FONT_9X18_BOLD),
    ("9x18", &FONT_9X18),
    ("9x15B", &FONT_9X15_BOLD),
    ("7x13B", &FONT_7X13_BOLD),
    ("6x10", &FONT_6X10),
    ("10x20", &FONT_10X20),
    ("profont-12", &PROFONT_12_POINT),
    ("profont-14", &PROFONT_14_POINT),
    ("profont-18", &PROFONT_18_POINT),
];

/// Look up a font by name. Names are matched case-insensitively.
pub fn font_by_name(name: &str) -> Option<&'static MonoFont<'static>> {
    FONTS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, font)| *font)
}

/// Names of all selectable fonts, in table order.
pub fn font_names() -> impl Iterator<Item = &'static str> { FONTS.iter().map(|(name, _)| *name) }

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Remaining-time line in the default font.
pub const TIME_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(DEFAULT_FONT, AMBER);

/// Remaining-tonnes line in the default font.
pub const TONNES_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(DEFAULT_FONT, PURPLE);

// =============================================================================
// Unit Tests
// =============================================================================
