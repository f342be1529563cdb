//! Error types shared by the registry and the translator.

use thiserror::Error;

use crate::dictionary::DictionaryError;
use crate::types::{
    Dialect,
    SystemType,
};

/// Errors raised while building a registry or looking terms up.
///
/// None of these indicate a corrupted registry; a failed query leaves
/// the active registry untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// A query was made before any system was activated.
    #[error("No system has been activated yet")]
    NotInitialized,

    /// Forward lookup miss.
    #[error("No translation for '{word}' in {system}[{dialect}]")]
    UnknownSourceWord { system: SystemType, dialect: Dialect, word: String },

    /// Reverse lookup miss.
    #[error("No source text for '{canonical}' in {system}[{dialect}]")]
    UnknownCanonical { system: SystemType, dialect: Dialect, canonical: String },

    /// The same normalized source word was registered for two canonical identifiers.
    #[error(
        "'{word}' in {system}[{dialect}] maps to both '{existing}' and '{conflicting}'"
    )]
    DuplicateCanonicalConflict {
        system: SystemType,
        dialect: Dialect,
        word: String,
        existing: String,
        conflicting: String,
    },

    /// A term entry listed no source words at all.
    #[error("Term '{canonical}' in {system}[{dialect}] has no source words")]
    EmptySourceWords { system: SystemType, dialect: Dialect, canonical: String },
}

/// Umbrella error for activations that read a dictionary file.
#[derive(Error, Debug)]
pub enum RosettaError {
    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_unknown_source_word_message() {
        let err = TranslationError::UnknownSourceWord {
            system: SystemType::Neurovirtual,
            dialect: Dialect::Descriptions,
            word: "Mentón".to_string(),
        };

        assert_that!(
            err.to_string(),
            eq("No translation for 'Mentón' in neurovirtual[descriptions]")
        );
    }

    #[rstest]
    fn test_conflict_message_names_both_identifiers() {
        let err = TranslationError::DuplicateCanonicalConflict {
            system: SystemType::Respironics,
            dialect: Dialect::ChannelNamesEdf,
            word: "chin".to_string(),
            existing: "CHIN".to_string(),
            conflicting: "CHIN_EMG".to_string(),
        };

        let message = err.to_string();
        assert_that!(message, contains_substring("respironics[channel_names_edf]"));
        assert_that!(message, contains_substring("'CHIN'"));
        assert_that!(message, contains_substring("'CHIN_EMG'"));
    }

    #[rstest]
    fn test_translation_error_is_transparent_in_umbrella() {
        let err: RosettaError = TranslationError::NotInitialized.into();

        assert_that!(err.to_string(), eq("No system has been activated yet"));
    }
}
