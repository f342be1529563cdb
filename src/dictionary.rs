//! Dictionary file loader.
//!
//! Dictionaries are TOML documents keyed by system, then dialect. Each
//! canonical identifier maps to its source words in priority order:
//!
//! ```toml
//! [neurovirtual.descriptions]
//! CHIN = ["Queixo", "QUEIXO", "Mentón"]
//!
//! [respironics.channel_names_edf]
//! CHIN = ["Chin EMG"]
//! ```
//!
//! Document order is preserved, so the first spelling listed for an
//! identifier is the one returned by reverse lookups.
//!
//! A [`DictionaryLocator`] finds the file: the configured path is tried as
//! written, then joined onto each fallback directory in turn.

use std::io;
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;
use toml::{
    Table,
    Value,
};

use crate::registry::TermEntry;
use crate::types::{
    Dialect,
    SystemType,
};

/// Defines errors that may occur while loading a dictionary
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read dictionary file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse dictionary: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value has the wrong shape (e.g. a source list that is not an array of strings)
    #[error("Invalid dictionary entry at '{path}': {message}")]
    InvalidEntry { path: String, message: String },
}

impl DictionaryError {
    /// Creates a [`DictionaryError::InvalidEntry`]
    fn invalid(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEntry { path: path.into(), message: message.into() }
    }
}

/// File name used when no dictionary path is configured.
pub const DEFAULT_DICTIONARY_FILE: &str = "dictionaries.toml";

/// Where to look for a dictionary file.
///
/// Candidates are tried in order: `path` as written, then `path` joined onto
/// each fallback directory. Fallbacks only apply to relative paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryLocator {
    /// Configured dictionary path
    path: PathBuf,
    /// Directories searched when `path` is not found
    fallback_dirs: Vec<PathBuf>,
}

impl Default for DictionaryLocator {
    fn default() -> Self {
        Self::new(DEFAULT_DICTIONARY_FILE)
    }
}

impl DictionaryLocator {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), fallback_dirs: Vec::new() }
    }

    /// Adds a directory to search after the configured path.
    #[must_use]
    pub fn with_fallback_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fallback_dirs.push(dir.into());
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Paths tried by [`DictionaryLocator::load`], in order.
    #[must_use]
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut candidates = vec![self.path.clone()];
        if self.path.is_relative() {
            candidates.extend(self.fallback_dirs.iter().map(|dir| dir.join(&self.path)));
        }
        candidates
    }

    /// Loads entries from the first candidate that exists.
    ///
    /// # Errors
    /// - [`DictionaryError::NotFound`] with the configured path when no candidate exists
    /// - Any other error from [`load_entries`] on the first existing candidate
    pub fn load(&self) -> Result<Vec<TermEntry>, DictionaryError> {
        for candidate in self.candidates() {
            match load_entries(&candidate) {
                Err(DictionaryError::NotFound(_)) => {
                    tracing::debug!(path = %candidate.display(), "Dictionary candidate not found");
                }
                result => return result,
            }
        }
        Err(DictionaryError::NotFound(self.path.clone()))
    }
}

/// Loads all term entries from a dictionary file.
///
/// # Arguments
/// * `path` - Path to the TOML dictionary
///
/// # Errors
/// - The file does not exist
/// - I/O or TOML syntax errors
/// - Malformed entries (see [`parse_entries`])
pub fn load_entries(path: &Path) -> Result<Vec<TermEntry>, DictionaryError> {
    tracing::debug!("Loading dictionary from: {:?}", path);

    let content = read_dictionary(path)?;
    let entries = parse_entries(&content)?;

    tracing::debug!(path = %path.display(), entries = entries.len(), "Dictionary loaded");
    Ok(entries)
}

/// Reads a dictionary file, reporting a missing file as [`DictionaryError::NotFound`].
fn read_dictionary(path: &Path) -> Result<String, DictionaryError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DictionaryError::NotFound(path.to_path_buf()),
        _ => DictionaryError::Io(e),
    })
}

/// Parses term entries from dictionary text.
///
/// Unknown system or dialect keys are skipped with a warning; a dictionary
/// can carry vocabularies this build does not know about.
///
/// # Errors
/// - TOML syntax errors
/// - A system or dialect value that is not a table
/// - A source list that is not an array of strings
pub fn parse_entries(content: &str) -> Result<Vec<TermEntry>, DictionaryError> {
    let document: Table = toml::from_str(content)?;
    let mut entries = Vec::new();

    for (system_key, dialects) in &document {
        let Ok(system) = system_key.parse::<SystemType>() else {
            tracing::warn!("Unknown system '{}' in dictionary, skipping", system_key);
            continue;
        };
        let dialects = as_table(dialects, system_key)?;

        for (dialect_key, terms) in dialects {
            let path = format!("{system_key}.{dialect_key}");
            let Ok(dialect) = dialect_key.parse::<Dialect>() else {
                tracing::warn!("Unknown dialect '{}' in dictionary, skipping", path);
                continue;
            };

            for (canonical, sources) in as_table(terms, &path)? {
                let sources = as_source_list(sources, &format!("{path}.{canonical}"))?;
                entries.push(TermEntry::new(system, dialect, canonical.as_str(), sources));
            }
        }
    }

    Ok(entries)
}

/// Expects `value` to be a table.
fn as_table<'a>(value: &'a Value, path: &str) -> Result<&'a Table, DictionaryError> {
    value.as_table().ok_or_else(|| {
        DictionaryError::invalid(path, format!("expected a table, found {}", value.type_str()))
    })
}

/// Expects `value` to be an array of strings.
fn as_source_list(value: &Value, path: &str) -> Result<Vec<String>, DictionaryError> {
    let array = value.as_array().ok_or_else(|| {
        DictionaryError::invalid(
            path,
            format!("expected an array of source words, found {}", value.type_str()),
        )
    })?;

    array
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                DictionaryError::invalid(
                    format!("{path}[{index}]"),
                    format!("expected a string, found {}", item.type_str()),
                )
            })
        })
        .collect()
}
