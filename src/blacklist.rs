//! Known-weak password blacklist.
//!
//! The blacklist is an immutable value handed to the analyzer at
//! construction. Matching is exact and case-insensitive.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Passwords rejected outright regardless of composition.
const BUILT_IN: [&str; 9] = [
    "password",
    "123456",
    "admin",
    "12345678",
    "qwerty",
    "password123",
    "abc123",
    "letmein",
    "111111",
];

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Set of known-weak passwords, compared case-insensitively.
///
/// Entries are stored lowercased; lookups lowercase the candidate.
#[derive(Debug, Clone)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::new()
    }
}

impl Blacklist {
    /// Builds the built-in blacklist.
    pub fn new() -> Self {
        Self {
            entries: BUILT_IN.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Builds the built-in blacklist extended with additional terms.
    ///
    /// Terms are trimmed and lowercased; empty terms are skipped.
    pub fn with_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut blacklist = Self::new();
        blacklist.entries.extend(
            terms
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty()),
        );
        blacklist
    }

    /// Loads additional terms from a newline-separated file, on top of the
    /// built-in set.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: file not found {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        let blacklist = Self::with_terms(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} entries from {:?}", blacklist.len(), path);

        Ok(blacklist)
    }

    /// Exact, case-insensitive membership test.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
