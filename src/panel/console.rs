//! Console backend.
//!
//! Prints each swapped frame as one line of text. On a terminal the line is
//! rewritten in place; otherwise (pipes, files) every frame gets its own line.
//! Positions, colors and fonts are ignored.

use std::io::{self, IsTerminal, Stdout, Write};

use carbon_clock_common::surface::Surface;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::Point;

/// Separator between the lines of one frame.
const LINE_SEPARATOR: &str = "  |  ";

pub struct ConsolePanel<W: Write> {
    out: W,
    /// Offscreen buffer: lines drawn since the last clear.
    lines: Vec<String>,
    overwrite: bool,
}

impl ConsolePanel<Stdout> {
    /// Panel on standard output, rewriting in place when attached to a terminal.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let overwrite = out.is_terminal();
        Self { out, lines: Vec::new(), overwrite }
    }
}

impl<W: Write> ConsolePanel<W> {
    /// Panel writing one line per frame to `out`.
    pub const fn new(out: W) -> Self { Self { out, lines: Vec::new(), overwrite: false } }

    pub fn into_inner(self) -> W { self.out }
}

impl<W: Write> Surface for ConsolePanel<W> {
    fn clear(&mut self) { self.lines.clear(); }

    fn draw_text(
        &mut self,
        text: &str,
        _origin: Point,
        _style: MonoTextStyle<'_, Rgb888>,
    ) {
        self.lines.push(text.to_owned());
    }

    fn swap_on_vsync(&mut self) {
        let frame = self.lines.join(LINE_SEPARATOR);
        // A closed stdout must not stop the clock
        let _ = if self.overwrite {
            write!(self.out, "\r{frame}\x1b[K")
        } else {
            writeln!(self.out, "{frame}")
        };
        let _ = self.out.flush();
    }
}
