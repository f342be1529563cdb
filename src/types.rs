//! Core tags used throughout the project.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Vocabulary category of a word.
///
/// The same canonical identifier can be spelled differently per dialect,
/// so every lookup is scoped to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Scored event names (e.g. arousals, apneas).
    Events,
    /// Human-readable descriptions.
    Descriptions,
    /// Channel labels as written in EDF headers.
    ChannelNamesEdf,
    /// Channel labels as written in vendor XML exports.
    ChannelNamesXml,
}

impl Dialect {
    /// All dialects, in declaration order.
    pub const ALL: [Self; 4] =
        [Self::Events, Self::Descriptions, Self::ChannelNamesEdf, Self::ChannelNamesXml];

    /// Key used for this dialect in dictionary and settings files.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::Descriptions => "descriptions",
            Self::ChannelNamesEdf => "channel_names_edf",
            Self::ChannelNamesXml => "channel_names_xml",
        }
    }
}

/// Vendor whose vocabulary is being translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemType {
    /// Neurovirtual acquisition software.
    Neurovirtual,
    /// Philips Respironics.
    Respironics,
}

impl SystemType {
    /// All systems, in declaration order.
    pub const ALL: [Self; 2] = [Self::Neurovirtual, Self::Respironics];

    /// Key used for this system in dictionary and settings files.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Neurovirtual => "neurovirtual",
            Self::Respironics => "respironics",
        }
    }
}

/// A dialect or system key that is not part of the closed set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct ParseTagError {
    /// `"dialect"` or `"system"`
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Dialect {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dialect| dialect.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTagError { kind: "dialect", value: s.to_string() })
    }
}

impl FromStr for SystemType {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|system| system.short_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTagError { kind: "system", value: s.to_string() })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::events("events", Dialect::Events)]
    #[case::descriptions("descriptions", Dialect::Descriptions)]
    #[case::edf("channel_names_edf", Dialect::ChannelNamesEdf)]
    #[case::xml("channel_names_xml", Dialect::ChannelNamesXml)]
    #[case::upper_case_key("DESCRIPTIONS", Dialect::Descriptions)]
    fn test_dialect_from_str(#[case] input: &str, #[case] expected: Dialect) {
        assert_that!(input.parse::<Dialect>(), ok(eq(&expected)));
    }

    #[rstest]
    #[case::neurovirtual("neurovirtual", SystemType::Neurovirtual)]
    #[case::respironics("Respironics", SystemType::Respironics)]
    fn test_system_from_str(#[case] input: &str, #[case] expected: SystemType) {
        assert_that!(input.parse::<SystemType>(), ok(eq(&expected)));
    }

    #[rstest]
    fn test_unknown_dialect_is_rejected() {
        let err = "channel_names".parse::<Dialect>().unwrap_err();

        assert_that!(err.kind, eq("dialect"));
        assert_that!(err.to_string(), eq("Unknown dialect 'channel_names'"));
    }

    #[rstest]
    fn test_display_matches_key() {
        for dialect in Dialect::ALL {
            assert_that!(dialect.to_string(), eq(dialect.key()));
            assert_that!(dialect.key().parse::<Dialect>(), ok(eq(&dialect)));
        }
        for system in SystemType::ALL {
            assert_that!(system.to_string(), eq(system.short_name()));
        }
    }

    #[rstest]
    fn test_serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&Dialect::ChannelNamesEdf).unwrap();
        assert_that!(json, eq("\"channel_names_edf\""));

        let system: SystemType = serde_json::from_str("\"respironics\"").unwrap();
        assert_that!(system, eq(SystemType::Respironics));
    }
}
