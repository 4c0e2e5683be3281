//! Line driver
//!
//! Walks one rendered line left to right, feeds each admitted character
//! to every keyword's matcher in table order, and paints completed
//! matches into the caller's cell buffer in place.

use std::sync::Arc;

use log::debug;

use crate::cell::{Cell, Fg};

use super::keyword::KeywordSet;
use super::matcher::Matcher;

/// Scans one line at a time against a shared keyword table.
///
/// Each scanner owns its own matcher states, so one scanner must not be
/// shared across concurrent line scans; give each caller its own scanner
/// over the same `Arc<KeywordSet>` instead.
pub struct LineScanner {
    keywords: Arc<KeywordSet>,
    states: Vec<Matcher>,
}

impl LineScanner {
    /// Create a scanner over a shared keyword table
    pub fn new(keywords: Arc<KeywordSet>) -> Self {
        let states = vec![Matcher::default(); keywords.len()];
        Self { keywords, states }
    }

    /// The keyword table this scanner matches against
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Reset every matcher to its pre-line state
    fn reset_all(&mut self) {
        for state in &mut self.states {
            state.reset();
        }
    }

    /// Scan one rendered line, painting every keyword match in place.
    ///
    /// Cells outside the ASCII code page, or with the high bit set, are
    /// skipped without disturbing in-progress matches. When two keywords'
    /// spans overlap, the later table entry's color wins on the shared
    /// columns. Nothing else in the buffer is touched.
    pub fn scan_line(&mut self, cells: &mut [Cell]) {
        self.reset_all();
        for pos in 0..cells.len() {
            if !cells[pos].is_admitted() {
                continue;
            }
            let ch = cells[pos].ch.to_ascii_uppercase() as u8;
            for (keyword, state) in self.keywords.iter().zip(self.states.iter_mut()) {
                if let Some(span) = state.feed(keyword, ch, pos) {
                    debug!(
                        "matched {} at columns {}..={}",
                        keyword.pattern(),
                        span.start,
                        span.start + span.len - 1
                    );
                    paint(cells, span.start, span.len, keyword.color());
                }
            }
        }
    }
}

/// Overwrite the foreground of the admitted cells in `[start, start+len)`.
///
/// Skipped columns inside the span keep their color; a zero-length span
/// is a no-op. Spans reported by the matchers always lie in the already
/// scanned prefix of the line.
fn paint(cells: &mut [Cell], start: usize, len: usize, color: Fg) {
    for cell in cells.iter_mut().skip(start).take(len) {
        if cell.is_admitted() {
            cell.fg = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{cells_from_line, Rgb};
    use crate::highlight::Keyword;

    const RED: Fg = Fg::Rgb(Rgb::new(255, 0, 0));
    const YELLOW: Fg = Fg::Rgb(Rgb::new(227, 227, 0));

    fn builtin_scanner() -> LineScanner {
        LineScanner::new(Arc::new(KeywordSet::builtin()))
    }

    fn scanner_for(entries: &[(&str, Fg)]) -> LineScanner {
        let keywords = entries
            .iter()
            .map(|&(pattern, color)| Keyword::new(pattern, color).unwrap())
            .collect();
        LineScanner::new(Arc::new(KeywordSet::new(keywords)))
    }

    fn colors(cells: &[Cell]) -> Vec<Fg> {
        cells.iter().map(|c| c.fg).collect()
    }

    fn expect_span(cells: &[Cell], start: usize, end: usize, color: Fg) {
        for (pos, cell) in cells.iter().enumerate() {
            if pos >= start && pos <= end {
                assert_eq!(cell.fg, color, "column {pos} should be highlighted");
            }
        }
    }

    #[test]
    fn test_empty_line_is_a_no_op() {
        let mut cells = cells_from_line("");
        builtin_scanner().scan_line(&mut cells);
        assert!(cells.is_empty());
    }

    #[test]
    fn test_plain_line_untouched() {
        let mut cells = cells_from_line("all quiet here");
        let before = cells.clone();
        builtin_scanner().scan_line(&mut cells);
        assert_eq!(cells, before);
    }

    #[test]
    fn test_warn_prefix_of_warning() {
        let mut cells = cells_from_line("WARNING");
        builtin_scanner().scan_line(&mut cells);
        expect_span(&cells, 0, 3, YELLOW);
        assert_eq!(cells[4].fg, Fg::Default);
        assert_eq!(cells[5].fg, Fg::Default);
        assert_eq!(cells[6].fg, Fg::Default);
    }

    #[test]
    fn test_fatal_error_line() {
        let mut cells = cells_from_line("FATAL ERROR");
        builtin_scanner().scan_line(&mut cells);
        expect_span(&cells, 0, 3, RED);
        assert_eq!(cells[4].fg, Fg::Default);
        assert_eq!(cells[5].fg, Fg::Default);
        expect_span(&cells, 6, 10, RED);
    }

    #[test]
    fn test_match_inside_longer_word() {
        let mut cells = cells_from_line("xFAILy");
        builtin_scanner().scan_line(&mut cells);
        assert_eq!(cells[0].fg, Fg::Default);
        expect_span(&cells, 1, 4, RED);
        assert_eq!(cells[5].fg, Fg::Default);
    }

    #[test]
    fn test_case_insensitive_match() {
        let mut upper = cells_from_line("ERROR");
        let mut lower = cells_from_line("error");
        let mut scanner = builtin_scanner();
        scanner.scan_line(&mut upper);
        scanner.scan_line(&mut lower);
        assert_eq!(colors(&upper), colors(&lower));
        expect_span(&lower, 0, 4, RED);
    }

    #[test]
    fn test_rescan_is_idempotent() {
        let mut cells = cells_from_line("FATAL ERROR, will FAIL");
        let mut scanner = builtin_scanner();
        scanner.scan_line(&mut cells);
        let first = colors(&cells);
        scanner.scan_line(&mut cells);
        assert_eq!(colors(&cells), first);
    }

    #[test]
    fn test_no_match_across_line_scans() {
        let mut scanner = builtin_scanner();
        let mut first = cells_from_line("tail is ERR");
        let mut second = cells_from_line("OR continues");
        scanner.scan_line(&mut first);
        scanner.scan_line(&mut second);
        assert!(first.iter().all(|c| c.fg == Fg::Default));
        assert!(second.iter().all(|c| c.fg == Fg::Default));
    }

    #[test]
    fn test_skipped_cell_keeps_match_alive() {
        // 'é' is outside the ASCII code page: skipped, never colored,
        // and the in-progress "ERROR" match survives it.
        let mut cells = cells_from_line("ERRéOR");
        builtin_scanner().scan_line(&mut cells);
        expect_span(&cells, 0, 2, RED);
        assert_eq!(cells[3].fg, Fg::Default);
        expect_span(&cells, 4, 5, RED);
    }

    #[test]
    fn test_wide_char_and_spacer_skipped() {
        let mut cells = cells_from_line("ERR你OR");
        builtin_scanner().scan_line(&mut cells);
        expect_span(&cells, 0, 2, RED);
        assert_eq!(cells[3].fg, Fg::Default);
        assert_eq!(cells[4].fg, Fg::Default);
        expect_span(&cells, 5, 6, RED);
    }

    #[test]
    fn test_overlap_last_table_entry_wins() {
        // Both keywords complete on the same column; they are fed in
        // table order, so the second entry repaints the shared columns.
        let mut scanner = scanner_for(&[("XAB", RED), ("AB", YELLOW)]);
        let mut cells = cells_from_line("XAB");
        scanner.scan_line(&mut cells);
        assert_eq!(colors(&cells), vec![RED, YELLOW, YELLOW]);

        let mut scanner = scanner_for(&[("AB", YELLOW), ("XAB", RED)]);
        let mut cells = cells_from_line("XAB");
        scanner.scan_line(&mut cells);
        assert_eq!(colors(&cells), vec![RED, RED, RED]);
    }

    #[test]
    fn test_independent_scanners_share_one_table() {
        let table = Arc::new(KeywordSet::builtin());
        let mut a = LineScanner::new(Arc::clone(&table));
        let mut b = LineScanner::new(Arc::clone(&table));
        let mut left = cells_from_line("ERR");
        let mut right = cells_from_line("ERROR");
        a.scan_line(&mut left);
        b.scan_line(&mut right);
        assert!(left.iter().all(|c| c.fg == Fg::Default));
        expect_span(&right, 0, 4, RED);
    }

    #[test]
    fn test_paint_zero_length_is_a_no_op() {
        let mut cells = cells_from_line("abc");
        paint(&mut cells, 1, 0, RED);
        assert!(cells.iter().all(|c| c.fg == Fg::Default));
    }
}
