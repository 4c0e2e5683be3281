//! ANSI output for scanned lines
//!
//! Writes a cell buffer back out as text, queueing crossterm color
//! commands at the boundaries of highlighted runs. Lines with no
//! highlighted cells pass through without any escape sequences.

use std::io::Write;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::cell::{Cell, Fg};
use crate::error::Result;

/// Write one scanned line to `out`, followed by a newline.
///
/// Spacer cells are not written; their wide character already covers
/// both columns. The foreground is reset before the newline so colors
/// never bleed into the next line.
pub fn write_line<W: Write>(out: &mut W, cells: &[Cell]) -> Result<()> {
    let mut current = Fg::Default;
    for cell in cells {
        if cell.is_spacer() {
            continue;
        }
        if cell.fg != current {
            set_foreground(out, cell.fg)?;
            current = cell.fg;
        }
        queue!(out, Print(cell.ch))?;
    }
    if current != Fg::Default {
        queue!(out, ResetColor)?;
    }
    queue!(out, Print('\n'))?;
    Ok(())
}

/// Queue the color command for a cell foreground
fn set_foreground<W: Write>(out: &mut W, fg: Fg) -> Result<()> {
    match fg {
        Fg::Default => queue!(out, ResetColor)?,
        Fg::Rgb(rgb) => queue!(
            out,
            SetForegroundColor(Color::Rgb {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
            })
        )?,
    }
    Ok(())
}
