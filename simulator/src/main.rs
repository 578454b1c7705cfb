//! Carbon clock simulator for desktop platforms.
//!
//! Renders the panel in an SDL window using the embedded-graphics-simulator
//! crate. Takes the same flags as the hardware binary; only the panel geometry
//! of the `--led-*` options is used. Closing the window stops the clock like
//! Ctrl-C does.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;
use carbon_clock::cli::{CountdownArgs, MatrixArgs};
use carbon_clock::clock::LocalClock;
use carbon_clock::panel::MatrixOptions;
use carbon_clock::render;
use carbon_clock::signal::install_interrupt_handler;
use carbon_clock_common::colors::BLACK;
use carbon_clock_common::surface::{Surface, draw_text_on};
use clap::Parser;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Desktop preview of the carbon clock LED panel")]
struct Args {
    #[command(flatten)]
    matrix: MatrixArgs,

    #[command(flatten)]
    countdown: CountdownArgs,

    /// Window pixels per LED
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    scale: u32,
}

/// Simulated panel: the display is the offscreen buffer, the window is the
/// visible one.
struct SimulatorPanel {
    display: SimulatorDisplay<Rgb888>,
    window: Window,
    running: Arc<AtomicBool>,
}

impl Surface for SimulatorPanel {
    fn clear(&mut self) { self.display.clear(BLACK).ok(); }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        style: MonoTextStyle<'_, Rgb888>,
    ) {
        draw_text_on(&mut self.display, text, origin, style);
    }

    fn swap_on_vsync(&mut self) {
        self.window.update(&self.display);

        for ev in self.window.events() {
            if matches!(ev, SimulatorEvent::Quit) {
                self.running.store(false, Ordering::Relaxed);
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = args.countdown.resolve().context("invalid countdown configuration")?;
    let size = MatrixOptions::from(&args.matrix).canvas_size();

    // Gaps between the scaled pixels make it look like an LED grid
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).pixel_spacing(1).build();
    let mut panel = SimulatorPanel {
        display: SimulatorDisplay::new(size),
        window: Window::new("Carbon Clock Sim", &output_settings),
        running: install_interrupt_handler().context("could not watch for Ctrl-C")?,
    };

    info!(width = size.width, height = size.height, "simulator started");

    let running = Arc::clone(&panel.running);
    let stats = render::run(&mut panel, &LocalClock, config, &running);

    info!(frames = stats.total_frames, uptime = %stats.uptime_string(), "simulator stopped");
    Ok(())
}
