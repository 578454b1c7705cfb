//! Display surface capability and countdown frame drawing.
//!
//! A [`Surface`] is a double-buffered panel: the render loop clears the
//! offscreen buffer, draws text into it and swaps it to the front. Backends
//! (LED matrix, simulator window, console) implement the three operations;
//! everything above them is platform-independent.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    text::Text,
};

use crate::budget::Remaining;
use crate::colors::{AMBER, PURPLE};
use crate::config::{TIME_TEXT_ORIGIN, TONNES_TEXT_ORIGIN};
use crate::format::{TimeText, TonnesText, format_remaining_time, format_tonnes};
use crate::styles::DEFAULT_FONT;

// =============================================================================
// Surface Capability
// =============================================================================

/// A double-buffered text display.
pub trait Surface {
    /// Blank the offscreen buffer.
    fn clear(&mut self);

    /// Draw `text` into the offscreen buffer with its baseline starting at `origin`.
    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        style: MonoTextStyle<'_, Rgb888>,
    );

    /// Make the offscreen buffer visible. May block until the next vertical refresh.
    fn swap_on_vsync(&mut self);
}

/// Draw text onto any `embedded-graphics` target. Helper for surfaces backed
/// by a `DrawTarget`; drawing errors are ignored like everywhere else on the panel.
pub fn draw_text_on<D>(
    target: &mut D,
    text: &str,
    origin: Point,
    style: MonoTextStyle<'_, Rgb888>,
) where
    D: DrawTarget<Color = Rgb888>,
{
    Text::new(text, origin, style).draw(target).ok();
}

// =============================================================================
// Countdown Frame
// =============================================================================

/// The two text lines of one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountdownFrame {
    pub time_text: TimeText,
    pub tonnes_text: TonnesText,
}

impl CountdownFrame {
    pub fn new(remaining: &Remaining) -> Self {
        Self {
            time_text: format_remaining_time(remaining.seconds),
            tonnes_text: format_tonnes(remaining.tonnes),
        }
    }
}

/// Styles for the two lines. Both share one font; colors are fixed.
#[derive(Clone, Copy, Debug)]
pub struct FrameStyle<'a> {
    pub time: MonoTextStyle<'a, Rgb888>,
    pub tonnes: MonoTextStyle<'a, Rgb888>,
}

impl<'a> FrameStyle<'a> {
    pub const fn new(font: &'a MonoFont<'a>) -> Self {
        Self { time: MonoTextStyle::new(font, AMBER), tonnes: MonoTextStyle::new(font, PURPLE) }
    }
}

impl Default for FrameStyle<'static> {
    fn default() -> Self { Self::new(DEFAULT_FONT) }
}

/// Draw both lines of `frame` at their fixed positions.
pub fn draw_frame<S>(
    surface: &mut S,
    frame: &CountdownFrame,
    style: &FrameStyle<'_>,
) where
    S: Surface + ?Sized,
{
    surface.draw_text(&frame.time_text, TIME_TEXT_ORIGIN, style.time);
    surface.draw_text(&frame.tonnes_text, TONNES_TEXT_ORIGIN, style.tonnes);
}

// =============================================================================
// Unit Tests
// =============================================================================
