//! Per-system bidirectional term index.
//!
//! A [`Registry`] is built once from a batch of [`TermEntry`] records and is
//! read-only afterwards. Each dialect gets two maps:
//!
//! - forward: case-folded source word → canonical identifier
//! - reverse: canonical identifier → source word, exactly as first registered
//!
//! Forward keys are Unicode full case folds (`icu_casemap`), so `ΟΔΟΣ`,
//! `οδος` and `οδοσ` share a key, as do `Straße` and `STRASSE`. Nothing else
//! is normalized: no trimming, no accent stripping.
//!
//! Forward lookups ignore case; reverse lookups always return the original
//! spelling. When several spellings are registered for one canonical
//! identifier, the first one in entry order becomes the reverse representative.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use icu_casemap::CaseMapper;

use crate::error::TranslationError;
use crate::types::{
    Dialect,
    SystemType,
};

/// One configuration record: every known spelling of a canonical identifier
/// within a (system, dialect) scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermEntry {
    pub system: SystemType,
    pub dialect: Dialect,
    pub canonical: String,
    /// Spellings in priority order. The first one is used for reverse lookup.
    pub sources: Vec<String>,
}

impl TermEntry {
    #[must_use]
    pub fn new<S>(
        system: SystemType,
        dialect: Dialect,
        canonical: impl Into<String>,
        sources: impl IntoIterator<Item = S>,
    ) -> Self
    where
        S: Into<String>,
    {
        Self {
            system,
            dialect,
            canonical: canonical.into(),
            sources: sources.into_iter().map(Into::into).collect(),
        }
    }
}

/// Case folding applied to source words before they are used as forward keys.
fn normalize(word: &str) -> String {
    String::from(CaseMapper::new().fold_string(word))
}

/// Forward and reverse maps for a single dialect.
#[derive(Debug, Default, Clone)]
struct DialectIndex {
    /// Normalized source word → canonical identifier
    forward: HashMap<String, String>,
    /// Canonical identifier → first-registered source word
    reverse: HashMap<String, String>,
}

/// Immutable translation table for one system.
#[derive(Debug, Clone)]
pub struct Registry {
    /// System whose vocabulary this registry holds
    system: SystemType,
    /// Per-dialect indexes; dialects without entries are absent
    dialects: HashMap<Dialect, DialectIndex>,
}

impl Registry {
    /// Builds the registry for `system` from `entries`.
    ///
    /// Entries for other systems are skipped, so a loader may hand over the
    /// whole multi-system batch. The build is all-or-nothing: on error no
    /// registry is produced.
    ///
    /// # Errors
    /// - [`TranslationError::DuplicateCanonicalConflict`]: a source word, once
    ///   case-folded, is already mapped to a different canonical identifier in
    ///   the same dialect
    /// - [`TranslationError::EmptySourceWords`]: an entry lists no source words
    pub fn build(system: SystemType, entries: &[TermEntry]) -> Result<Self, TranslationError> {
        let mut dialects: HashMap<Dialect, DialectIndex> = HashMap::new();

        for entry in entries {
            if entry.system != system {
                tracing::trace!(
                    canonical = %entry.canonical,
                    entry_system = %entry.system,
                    "Skipping entry for another system"
                );
                continue;
            }

            if entry.sources.is_empty() {
                return Err(TranslationError::EmptySourceWords {
                    system,
                    dialect: entry.dialect,
                    canonical: entry.canonical.clone(),
                });
            }

            let index = dialects.entry(entry.dialect).or_default();

            for source in &entry.sources {
                match index.forward.entry(normalize(source)) {
                    Entry::Vacant(slot) => {
                        slot.insert(entry.canonical.clone());
                    }
                    Entry::Occupied(slot) if *slot.get() == entry.canonical => {}
                    Entry::Occupied(slot) => {
                        return Err(TranslationError::DuplicateCanonicalConflict {
                            system,
                            dialect: entry.dialect,
                            word: source.clone(),
                            existing: slot.get().clone(),
                            conflicting: entry.canonical.clone(),
                        });
                    }
                }
            }

            if let Some(first) = entry.sources.first() {
                index.reverse.entry(entry.canonical.clone()).or_insert_with(|| first.clone());
            }
        }

        Ok(Self { system, dialects })
    }

    /// System this registry was built for.
    #[must_use]
    pub const fn system(&self) -> SystemType {
        self.system
    }

    /// Resolves a source word to its canonical identifier, ignoring case.
    ///
    /// # Errors
    /// [`TranslationError::UnknownSourceWord`] if the word is not registered
    /// for `dialect`.
    pub fn lookup_canonical(
        &self,
        dialect: Dialect,
        source: &str,
    ) -> Result<&str, TranslationError> {
        self.dialects
            .get(&dialect)
            .and_then(|index| index.forward.get(&normalize(source)))
            .map(String::as_str)
            .ok_or_else(|| TranslationError::UnknownSourceWord {
                system: self.system,
                dialect,
                word: source.to_string(),
            })
    }

    /// Resolves a canonical identifier to its representative source word.
    ///
    /// The identifier is matched exactly; it is not case-folded.
    ///
    /// # Errors
    /// [`TranslationError::UnknownCanonical`] if the identifier is not
    /// registered for `dialect`.
    pub fn lookup_source(
        &self,
        dialect: Dialect,
        canonical: &str,
    ) -> Result<&str, TranslationError> {
        self.dialects
            .get(&dialect)
            .and_then(|index| index.reverse.get(canonical))
            .map(String::as_str)
            .ok_or_else(|| TranslationError::UnknownCanonical {
                system: self.system,
                dialect,
                canonical: canonical.to_string(),
            })
    }

    /// Whether `source` (case-insensitively) is registered for `dialect`.
    #[must_use]
    pub fn contains_source(&self, dialect: Dialect, source: &str) -> bool {
        self.dialects
            .get(&dialect)
            .is_some_and(|index| index.forward.contains_key(&normalize(source)))
    }

    /// Number of distinct canonical identifiers registered for `dialect`.
    #[must_use]
    pub fn len(&self, dialect: Dialect) -> usize {
        self.dialects.get(&dialect).map_or(0, |index| index.reverse.len())
    }

    /// Whether no dialect holds any term.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dialects.values().all(|index| index.reverse.is_empty())
    }

    /// Canonical identifiers registered for `dialect`, in no particular order.
    pub fn canonicals(&self, dialect: Dialect) -> impl Iterator<Item = &str> + '_ {
        self.dialects
            .get(&dialect)
            .into_iter()
            .flat_map(|index| index.reverse.keys().map(String::as_str))
    }
}
