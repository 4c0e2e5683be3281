//! Configuration file support
//!
//! Loads the keyword table from ~/.logtint.toml (or
//! %USERPROFILE%\.logtint.toml on Windows). An explicit file replaces the
//! built-in table wholesale; no file means the built-in table is used.
//!
//! Example:
//! ```toml
//! [[keyword]]
//! pattern = "PANIC"
//! color = [255, 0, 0]
//!
//! [[keyword]]
//! pattern = "DEPRECATED"
//! ```
//!
//! A keyword without a color is highlighted with the terminal's default
//! foreground, which leaves its cells visually unchanged but still
//! exercises the match path.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cell::{Fg, Rgb};
use crate::error::Result;
use crate::highlight::{Keyword, KeywordSet};

/// A single `[[keyword]]` entry as written in the config file
#[derive(Debug, Clone, Deserialize)]
struct KeywordEntry {
    pattern: String,
    #[serde(default)]
    color: Option<[u8; 3]>,
}

/// Top-level config file structure
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    keyword: Vec<KeywordEntry>,
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// The keyword table scanners match against
    pub keywords: KeywordSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keywords: KeywordSet::builtin(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".logtint.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".logtint.toml"))
        }
    }

    /// Load configuration from the default path.
    ///
    /// A missing file is not an error; the built-in table is used. A file
    /// that exists but fails to parse or validate is.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse config file contents
    fn parse(contents: &str) -> Result<Self> {
        let parsed: ConfigFile = toml::from_str(contents)?;
        if parsed.keyword.is_empty() {
            return Ok(Self::default());
        }

        let mut keywords = Vec::with_capacity(parsed.keyword.len());
        for entry in parsed.keyword {
            let color = match entry.color {
                Some([r, g, b]) => Fg::Rgb(Rgb::new(r, g, b)),
                None => Fg::Default,
            };
            keywords.push(Keyword::new(&entry.pattern, color)?);
        }

        Ok(Self {
            keywords: KeywordSet::new(keywords),
        })
    }
}
