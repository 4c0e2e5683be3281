//! Keyword highlighting subsystem
//!
//! This module provides the streaming multi-keyword scanner:
//! - An immutable keyword table shared by all scanners
//! - One match automaton per keyword, live for a single line scan
//! - The line driver that walks a cell buffer and paints matches

mod keyword;
mod matcher;
mod scanner;

pub use keyword::{Keyword, KeywordSet};
pub use scanner::LineScanner;
