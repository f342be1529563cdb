//! rosetta-terms
//!
//! Bidirectional translation between vendor vocabularies ("source words") and
//! canonical identifiers, partitioned by dialect and system.
//!
//! ```
//! use rosetta_terms::{Dialect, SystemType, TermEntry, Translator};
//!
//! let translator = Translator::new();
//! let system = SystemType::Neurovirtual;
//! translator.activate(
//!     system,
//!     &[TermEntry::new(system, Dialect::Descriptions, "CHIN", ["Queixo", "QUEIXO"])],
//! )?;
//!
//! assert_eq!(translator.get_canonical("QUEIXO", Dialect::Descriptions)?, "CHIN");
//! assert_eq!(translator.get_source("CHIN", Dialect::Descriptions)?, "Queixo");
//! # Ok::<(), rosetta_terms::TranslationError>(())
//! ```

pub mod dictionary;
pub mod error;
pub mod registry;
pub mod translator;
pub mod types;

pub use error::{
    RosettaError,
    TranslationError,
};
pub use registry::{
    Registry,
    TermEntry,
};
pub use translator::Translator;
pub use types::{
    Dialect,
    SystemType,
};
