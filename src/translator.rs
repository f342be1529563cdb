//! Active-system translation facade.

use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use parking_lot::Mutex;

use crate::dictionary::{
    self,
    DictionaryLocator,
};
use crate::error::{
    RosettaError,
    TranslationError,
};
use crate::registry::{
    Registry,
    TermEntry,
};
use crate::types::{
    Dialect,
    SystemType,
};

/// Translates between source words and canonical identifiers for the active system.
///
/// Starts uninitialized. [`Translator::activate`] builds a fresh [`Registry`]
/// and publishes it in one atomic swap, so readers see either the previous
/// registry or the new one, never a partial build. Lookups do not lock.
///
/// # Lock order
///
/// Only `activation` is ever locked, and only by writers.
#[derive(Default)]
pub struct Translator {
    /// Currently published registry
    active: ArcSwapOption<Registry>,
    /// Serializes concurrent activations
    activation: Mutex<()>,
}

impl Translator {
    /// Creates an uninitialized translator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry for `system` from `entries` and makes it active.
    ///
    /// All-or-nothing: if the build fails, the previously active registry
    /// (if any) stays in place.
    ///
    /// # Errors
    /// Propagates build errors from [`Registry::build`].
    pub fn activate(
        &self,
        system: SystemType,
        entries: &[TermEntry],
    ) -> Result<(), TranslationError> {
        let _guard = self.activation.lock();

        let registry = Registry::build(system, entries).inspect_err(|e| {
            tracing::warn!(%system, "Activation failed, keeping previous registry: {e}");
        })?;

        tracing::info!(
            %system,
            events = registry.len(Dialect::Events),
            descriptions = registry.len(Dialect::Descriptions),
            channel_names_edf = registry.len(Dialect::ChannelNamesEdf),
            channel_names_xml = registry.len(Dialect::ChannelNamesXml),
            "Activated translation registry"
        );

        self.active.store(Some(Arc::new(registry)));
        Ok(())
    }

    /// Loads a dictionary file and activates `system` from it.
    ///
    /// # Errors
    /// - [`RosettaError::Dictionary`] if the file is missing, unreadable or malformed
    /// - [`RosettaError::Translation`] if the registry build fails
    pub fn activate_from_file(&self, system: SystemType, path: &Path) -> Result<(), RosettaError> {
        let entries = dictionary::load_entries(path)?;
        self.activate(system, &entries)?;
        Ok(())
    }

    /// Activates `system` from the first dictionary `locator` finds.
    ///
    /// # Errors
    /// - [`RosettaError::Dictionary`] if no candidate exists or the found file is invalid
    /// - [`RosettaError::Translation`] if the registry build fails
    pub fn activate_from_dictionary(
        &self,
        system: SystemType,
        locator: &DictionaryLocator,
    ) -> Result<(), RosettaError> {
        let entries = locator.load()?;
        self.activate(system, &entries)?;
        Ok(())
    }

    /// System of the active registry, if any.
    #[must_use]
    pub fn active_system(&self) -> Option<SystemType> {
        self.snapshot().map(|registry| registry.system())
    }

    /// The active registry, for running several lookups against one consistent view.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<Registry>> {
        self.active.load_full()
    }

    /// Translates a source word to its canonical identifier.
    ///
    /// # Errors
    /// - [`TranslationError::NotInitialized`] before the first activation
    /// - [`TranslationError::UnknownSourceWord`] on a miss
    pub fn get_canonical(
        &self,
        source: &str,
        dialect: Dialect,
    ) -> Result<String, TranslationError> {
        let registry = self.snapshot().ok_or(TranslationError::NotInitialized)?;
        registry
            .lookup_canonical(dialect, source)
            .map(str::to_string)
            .inspect_err(|e| tracing::debug!("{e}"))
    }

    /// Translates a canonical identifier back to its source word.
    ///
    /// # Errors
    /// - [`TranslationError::NotInitialized`] before the first activation
    /// - [`TranslationError::UnknownCanonical`] on a miss
    pub fn get_source(
        &self,
        canonical: &str,
        dialect: Dialect,
    ) -> Result<String, TranslationError> {
        let registry = self.snapshot().ok_or(TranslationError::NotInitialized)?;
        registry
            .lookup_source(dialect, canonical)
            .map(str::to_string)
            .inspect_err(|e| tracing::debug!("{e}"))
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("active_system", &self.active_system())
            .finish_non_exhaustive()
    }
}
