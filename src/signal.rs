//! Ctrl-C handling.
//!
//! The handler only clears a shared flag; the render loop notices it at the
//! top of its next iteration and returns normally, so the process exits 0.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::error::Result;

/// Install the interrupt handler. The returned flag stays `true` until Ctrl-C.
pub fn install_interrupt_handler() -> Result<Arc<AtomicBool>> {
    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    ctrlc::set_handler(move || {
        flag.store(false, Ordering::Relaxed);
    })?;
    debug!("interrupt handler installed");
    Ok(running)
}

#[inline]
pub fn is_running(running: &AtomicBool) -> bool { running.load(Ordering::Relaxed) }
