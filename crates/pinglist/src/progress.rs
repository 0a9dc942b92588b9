//! Progress reporting
//!
//! Renders a 50-cell ASCII bar that overwrites itself in place via a
//! leading carriage return. Rendering never affects probe results.

use std::io::{self, Write};

/// Number of cells in the progress bar
pub const BAR_WIDTH: usize = 50;

/// Receives a notification after each probe
pub trait ProgressReporter {
    /// Called with `1 <= current <= total`
    fn report(&mut self, current: usize, total: usize);
}

/// Reporter that renders nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn report(&mut self, _current: usize, _total: usize) {}
}

/// Reporter that writes the bar to a terminal stream
#[derive(Debug)]
pub struct TerminalProgress<W: Write> {
    out: W,
}

impl TerminalProgress<io::Stderr> {
    /// Render to standard error
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> TerminalProgress<W> {
    /// Render to the given writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressReporter for TerminalProgress<W> {
    fn report(&mut self, current: usize, total: usize) {
        let rendered = render_progress(current, total);
        // Progress output is best effort
        if let Err(e) = self
            .out
            .write_all(rendered.as_bytes())
            .and_then(|_| self.out.flush())
        {
            tracing::debug!("Failed to write progress: {}", e);
        }
    }
}

/// Number of filled cells for `current` of `total`, rounded half up
pub fn filled_cells(current: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let current = current.min(total);
    (2 * BAR_WIDTH * current + total) / (2 * total)
}

/// Render the bar for `current` of `total`
///
/// The string starts with `\r` so it overwrites the previous render and
/// ends with a newline once `current == total`.
pub fn render_progress(current: usize, total: usize) -> String {
    let filled = filled_cells(current, total);
    let mut line = String::with_capacity(BAR_WIDTH + 24);
    line.push('\r');
    line.push('[');
    line.push_str(&"#".repeat(filled));
    line.push_str(&" ".repeat(BAR_WIDTH - filled));
    line.push_str(&format!("] {current}/{total}"));
    if current >= total {
        line.push('\n');
    }
    line
}
