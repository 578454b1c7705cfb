//! Carbon budget countdown clock.
//!
//! Drives an RGB LED matrix when built with the `hardware` feature, and
//! prints to the terminal otherwise (or with `--console`).

use std::sync::atomic::AtomicBool;

use anyhow::Context;
use carbon_clock::cli::Cli;
use carbon_clock::clock::{LocalClock, naive_from_timestamp};
use carbon_clock::config::RunConfig;
use carbon_clock::panel::{ConsolePanel, MatrixOptions};
use carbon_clock::profiling::FrameStats;
use carbon_clock::render;
use carbon_clock::signal::install_interrupt_handler;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.countdown.resolve().context("invalid countdown configuration")?;
    let options = MatrixOptions::from(&cli.matrix);

    info!(
        start = %cli.countdown.start,
        budget_tons = config.params.initial_tonnes,
        tons_per_sec = config.params.tonnes_per_second,
        depleted_at = ?naive_from_timestamp(config.params.depleted_at()),
        font = %cli.countdown.font,
        "carbon clock configured"
    );

    let running = install_interrupt_handler().context("could not watch for Ctrl-C")?;

    println!("Press CTRL-C to stop the clock");

    let stats = if cli.console {
        run_console(config, &running)
    } else {
        run_panel(&options, config, &running)?
    };

    println!("\nExiting");
    info!(
        frames = stats.total_frames,
        uptime = %stats.uptime_string(),
        fps = stats.average_fps(),
        render_min_us = stats.render_time_min_us,
        render_avg_us = stats.render_time_avg_us(),
        render_max_us = stats.render_time_max_us,
        last_sleep_us = stats.sleep_time_us,
        "clock stopped"
    );
    Ok(())
}

fn run_console(
    config: RunConfig,
    running: &AtomicBool,
) -> FrameStats {
    let mut panel = ConsolePanel::stdout();
    render::run(&mut panel, &LocalClock, config, running)
}

#[cfg(feature = "hardware")]
fn run_panel(
    options: &MatrixOptions,
    config: RunConfig,
    running: &AtomicBool,
) -> anyhow::Result<FrameStats> {
    let mut panel = carbon_clock::panel::MatrixPanel::new(options).context("could not open the LED matrix")?;
    Ok(render::run(&mut panel, &LocalClock, config, running))
}

#[cfg(not(feature = "hardware"))]
fn run_panel(
    options: &MatrixOptions,
    config: RunConfig,
    running: &AtomicBool,
) -> anyhow::Result<FrameStats> {
    let size = options.canvas_size();
    tracing::warn!(
        width = size.width,
        height = size.height,
        "built without the `hardware` feature, printing to the console instead"
    );
    Ok(run_console(config, running))
}
