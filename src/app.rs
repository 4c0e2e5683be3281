//! Streaming driver
//!
//! Pumps text lines from a reader to a writer, running the keyword
//! scanner over each line on the way through. The scanner resets its
//! matchers per line, so no keyword can span two input lines.

use std::io::{BufRead, Write};

use crate::cell::cells_from_line;
use crate::error::Result;
use crate::highlight::LineScanner;
use crate::render;

/// Owns the scanner and drives the per-line highlight cycle
pub struct App {
    scanner: LineScanner,
}

impl App {
    /// Create an app around a configured scanner
    pub fn new(scanner: LineScanner) -> Self {
        Self { scanner }
    }

    /// Process every line from `input`, writing highlighted output
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            self.process_line(&line, out)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Decode, scan, and emit a single line
    fn process_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<()> {
        let mut cells = cells_from_line(line);
        self.scanner.scan_line(&mut cells);
        render::write_line(out, &cells)
    }
}
