//! LDraw renderer
//!
//! Turns printed values into placement records, one glyph part per
//! character, laid out on a column/line grid. Records are written to the
//! output as soon as they are produced.

use crate::targets;
use llang_config::{RenderConfig, PART_EXTENSION, STEP_MARKER};
use std::io::{self, Write};
use tracing::{debug, trace, warn};

const HEADER: [&str; 4] = [
    "0 L Lang output",
    "0 Name: output.ldr",
    "0 // This output was generated using the L language, using a",
    "0 // LEGO CAD file (ldr file) input to compile into these results.",
];

pub struct Renderer<W: Write> {
    out: W,
    config: RenderConfig,
    current_line: i64,
    header_emitted: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self::with_config(out, RenderConfig::default())
    }

    pub fn with_config(out: W, config: RenderConfig) -> Self {
        Self {
            out,
            config,
            current_line: 0,
            header_emitted: false,
        }
    }

    /// Line the next `print_text` renders on
    pub fn current_line(&self) -> i64 {
        self.current_line
    }

    pub fn header_emitted(&self) -> bool {
        self.header_emitted
    }

    /// Write the banner, once per renderer
    pub fn emit_header(&mut self) -> io::Result<()> {
        if self.header_emitted {
            return Ok(());
        }
        for line in HEADER {
            writeln!(self.out, "{line}")?;
        }
        self.header_emitted = true;
        debug!(target: targets::RENDERER, "header emitted");
        Ok(())
    }

    /// Render `text` on the current line and move to the next one
    pub fn print_text(&mut self, text: &str) -> io::Result<()> {
        let line = self.current_line;
        self.render_row(text, 0, line)?;
        self.current_line = self.current_line.saturating_add(1);
        Ok(())
    }

    /// Render `text` starting at an explicit grid cell; the cursor stays put
    pub fn print_text_at(&mut self, text: &str, column: i64, line: i64) -> io::Result<()> {
        self.render_row(text, column, line)
    }

    /// Model x of a grid column, `None` when it does not fit in an `i64`
    pub fn x_at(&self, column: i64) -> Option<i64> {
        self.config.pitch.checked_mul(column)?.checked_add(self.config.origin)
    }

    /// Model z of a grid line, `None` when it does not fit in an `i64`
    pub fn z_at(&self, line: i64) -> Option<i64> {
        self.config.origin.checked_sub(self.config.pitch.checked_mul(line)?)
    }

    /// Whether a row of `width` glyphs starting at `column` has a model x for every glyph
    pub fn column_fits(&self, column: i64, width: usize) -> bool {
        let last = i64::try_from(width.saturating_sub(1))
            .ok()
            .and_then(|span| column.checked_add(span));
        self.x_at(column).is_some() && last.and_then(|c| self.x_at(c)).is_some()
    }

    pub fn line_fits(&self, line: i64) -> bool {
        self.z_at(line).is_some()
    }

    fn render_row(&mut self, text: &str, column: i64, line: i64) -> io::Result<()> {
        debug!(target: targets::RENDERER, text, column, line, "print");
        let Some(z) = self.z_at(line) else {
            warn!(target: targets::RENDERER, line, "line out of range, row dropped");
            return Ok(());
        };
        for (offset, c) in (0_i64..).zip(text.chars()) {
            let Some(x) = column.checked_add(offset).and_then(|cell| self.x_at(cell)) else {
                warn!(target: targets::RENDERER, column, offset, "column out of range, row cut");
                break;
            };
            let part = self.glyph(c);
            self.place(&part, x, self.config.depth, z, self.config.color)?;
        }
        Ok(())
    }

    /// Glyph part of one character; no check that the part exists
    pub fn glyph(&self, c: char) -> String {
        format!("{}{}{}", self.config.glyph_prefix, c, PART_EXTENSION)
    }

    /// Write one placement record with the identity orientation
    pub fn place(&mut self, part: &str, x: i64, y: i64, z: i64, color: u32) -> io::Result<()> {
        self.emit_header()?;
        trace!(target: targets::RENDERER, part, x, y, z, "placement");
        writeln!(
            self.out,
            "1 {color} {x} {y} {z} 1 0 0 0 1 0 0 0 1 {part}"
        )
    }

    /// Write the closing step marker and hand back the output
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.out, "{STEP_MARKER}")?;
        self.out.flush()?;
        Ok(self.out)
    }
}
