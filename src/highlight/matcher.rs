//! Per-keyword match automaton
//!
//! One `Matcher` tracks partial-match progress for one keyword across a
//! single line scan. It sees only the admitted, upper-cased characters;
//! skipped columns are never offered to it and leave its state untouched.

use super::keyword::Keyword;

/// Match progress phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No partial match in progress
    #[default]
    Idle,
    /// A prefix of the keyword has matched
    Matching,
}

/// A completed match reported by [`Matcher::feed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    /// Column of the first matched character
    pub start: usize,
    /// Column count from the first to the last matched character,
    /// inclusive of any skipped columns in between
    pub len: usize,
}

/// Finite-state tracker of one keyword's partial-match progress
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    phase: Phase,
    /// Index of the next pattern character expected
    cursor: usize,
    /// Column at which the current candidate match began
    anchor: usize,
}

impl Matcher {
    /// Return to the pre-line state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current phase, for inspection in tests
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Feed one admitted, upper-cased character at line column `pos`.
    ///
    /// Returns the completed span when `ch` finishes the keyword.
    ///
    /// A character that breaks a partial match is consumed here and is
    /// not re-tested as a fresh first character at the same column, so a
    /// pattern with a self-overlapping prefix can miss a match that
    /// begins on the breaking character.
    pub fn feed(&mut self, keyword: &Keyword, ch: u8, pos: usize) -> Option<MatchSpan> {
        match self.phase {
            Phase::Idle => {
                if ch == keyword.byte_at(0) {
                    self.phase = Phase::Matching;
                    self.cursor = 1;
                    self.anchor = pos;
                    if self.cursor == keyword.len() {
                        self.reset();
                        return Some(MatchSpan { start: pos, len: 1 });
                    }
                }
                None
            }
            Phase::Matching => {
                if ch == keyword.byte_at(self.cursor) {
                    self.cursor += 1;
                    if self.cursor == keyword.len() {
                        let span = MatchSpan {
                            start: self.anchor,
                            len: pos - self.anchor + 1,
                        };
                        self.reset();
                        return Some(span);
                    }
                } else {
                    self.reset();
                }
                None
            }
        }
    }
}
