//! Keyword table
//!
//! An ordered, immutable list of the patterns the scanner searches for,
//! each paired with the foreground color painted over its matches.
//! Patterns are stored pre-upper-cased and their lengths are computed once
//! at construction, never per scan.

use crate::cell::{Fg, Rgb};
use crate::error::{Result, TintError};

const RED: Fg = Fg::Rgb(Rgb::new(255, 0, 0));
const YELLOW: Fg = Fg::Rgb(Rgb::new(227, 227, 0));

/// Built-in keyword table: pattern text and foreground color.
///
/// "FATA" is a deliberate prefix so both "FATA" and "FATAL" light up.
const DEFAULT_KEYWORDS: &[(&str, Fg)] = &[
    ("ERROR", RED),
    ("FAIL", RED),
    ("FATA", RED),
    ("EXCEPTION", YELLOW),
    ("WARN", YELLOW),
];

/// A single keyword the scanner searches for
#[derive(Debug, Clone)]
pub struct Keyword {
    /// Pattern text, upper-cased ASCII
    pattern: String,
    /// Foreground color painted over matches
    color: Fg,
    /// Pattern length in characters, computed at construction
    length: usize,
}

impl Keyword {
    /// Build a keyword from its pattern text.
    ///
    /// The pattern must be non-empty ASCII; it is upper-cased for the
    /// case-insensitive comparison the matchers perform.
    pub fn new(pattern: &str, color: Fg) -> Result<Self> {
        if pattern.is_empty() {
            return Err(TintError::EmptyPattern);
        }
        if !pattern.is_ascii() {
            return Err(TintError::NonAsciiPattern(pattern.to_string()));
        }
        let pattern = pattern.to_ascii_uppercase();
        let length = pattern.len();
        Ok(Self {
            pattern,
            color,
            length,
        })
    }

    /// The upper-cased pattern text
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The color painted over this keyword's matches
    pub fn color(&self) -> Fg {
        self.color
    }

    /// Pattern length in characters
    pub fn len(&self) -> usize {
        self.length
    }

    /// The pattern byte expected at `idx`
    pub(crate) fn byte_at(&self, idx: usize) -> u8 {
        self.pattern.as_bytes()[idx]
    }
}

/// Ordered, immutable keyword table shared by scanners
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
}

impl KeywordSet {
    /// Create a table from an ordered list of keywords
    pub fn new(keywords: Vec<Keyword>) -> Self {
        Self { keywords }
    }

    /// The built-in error/warning marker table
    pub fn builtin() -> Self {
        let mut keywords = Vec::with_capacity(DEFAULT_KEYWORDS.len());
        for &(pattern, color) in DEFAULT_KEYWORDS {
            if let Ok(keyword) = Keyword::new(pattern, color) {
                keywords.push(keyword);
            }
        }
        Self::new(keywords)
    }

    /// Number of keywords in the table
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Iterate the keywords in table order
    pub fn iter(&self) -> std::slice::Iter<'_, Keyword> {
        self.keywords.iter()
    }

    /// Get a keyword by table index
    pub fn get(&self, idx: usize) -> Option<&Keyword> {
        self.keywords.get(idx)
    }
}
