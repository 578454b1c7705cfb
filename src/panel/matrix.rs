//! HUB75 LED matrix backend on top of the rpi-rgb-led-matrix library.
//!
//! The library owns PWM timing and GPIO multiplexing; this module only copies
//! [`MatrixOptions`] into its option structs and forwards pixels. Text is
//! rasterized by `embedded-graphics` and written pixel by pixel into the
//! library's offscreen canvas, which is swapped to the panel on vsync.

use std::convert::Infallible;

use carbon_clock_common::surface::{Surface, draw_text_on};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use rpi_led_matrix::{LedCanvas, LedColor, LedMatrix, LedMatrixOptions, LedRuntimeOptions};
use tracing::info;

use crate::error::{ClockError, Result};
use crate::panel::options::MatrixOptions;

pub struct MatrixPanel {
    matrix: LedMatrix,
    /// Offscreen canvas. Only `None` for the duration of a swap.
    canvas: Option<LedCanvas>,
}

impl MatrixPanel {
    /// Initialise the driver. Needs root (or the right GPIO permissions).
    pub fn new(options: &MatrixOptions) -> Result<Self> {
        let mut led = LedMatrixOptions::new();
        led.set_rows(options.rows);
        led.set_cols(options.cols);
        led.set_chain_length(options.chain_length);
        led.set_parallel(options.parallel);
        led.set_pwm_bits(options.pwm_bits).map_err(|e| ClockError::Panel(e.to_string()))?;
        led.set_brightness(options.brightness).map_err(|e| ClockError::Panel(e.to_string()))?;
        if let Some(mapping) = options.hardware_mapping {
            led.set_hardware_mapping(mapping.as_str());
        }
        led.set_scan_mode(u32::from(options.scan_mode));
        led.set_pwm_lsb_nanoseconds(options.pwm_lsb_nanoseconds);
        led.set_refresh_rate(options.show_refresh_rate);
        led.set_hardware_pulsing(!options.disable_hardware_pulsing);
        led.set_led_rgb_sequence(&options.led_rgb_sequence);
        led.set_pixel_mapper_config(&options.pixel_mapper_config);
        led.set_row_addr_type(u32::from(options.row_address_type));
        led.set_multiplexing(u32::from(options.multiplexing));

        let mut runtime = LedRuntimeOptions::new();
        runtime.set_gpio_slowdown(u32::from(options.gpio_slowdown));

        let matrix = LedMatrix::new(Some(led), Some(runtime)).map_err(|e| ClockError::Panel(e.to_string()))?;
        let canvas = matrix.offscreen_canvas();

        let size = options.canvas_size();
        info!(width = size.width, height = size.height, "LED matrix initialised");

        Ok(Self { matrix, canvas: Some(canvas) })
    }
}

impl Surface for MatrixPanel {
    fn clear(&mut self) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.clear();
        }
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        style: MonoTextStyle<'_, Rgb888>,
    ) {
        if let Some(canvas) = self.canvas.as_mut() {
            draw_text_on(&mut CanvasTarget(canvas), text, origin, style);
        }
    }

    fn swap_on_vsync(&mut self) {
        if let Some(canvas) = self.canvas.take() {
            self.canvas = Some(self.matrix.swap(canvas));
        }
    }
}

// =============================================================================
// embedded-graphics Adapter
// =============================================================================

/// Lets `embedded-graphics` draw straight into the driver's canvas.
struct CanvasTarget<'a>(&'a mut LedCanvas);

impl OriginDimensions for CanvasTarget<'_> {
    fn size(&self) -> Size {
        let (width, height) = self.0.canvas_size();
        Size::new(width.max(0) as u32, height.max(0) as u32)
    }
}

impl DrawTarget for CanvasTarget<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // The driver ignores coordinates outside the canvas
            self.0.set(point.x, point.y, &LedColor { red: color.r(), green: color.g(), blue: color.b() });
        }
        Ok(())
    }
}
