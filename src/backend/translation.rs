//! In-memory catalog translator.

use dashmap::DashMap;

use super::{TranslationParameters, Translator};
use crate::error::BackendError;

/// Translator backed by in-memory message catalogs.
///
/// Messages are registered per `(catalog, key)` pair; placeholders in the
/// message text (conventionally `%name%`) are replaced literally by the
/// parameters exposed to the translation call. A key with no registered
/// message translates to itself, so missing catalog entries degrade to the
/// raw key instead of failing a send.
#[derive(Default)]
pub struct CatalogTranslator {
    messages: DashMap<(String, String), String>,
}

impl CatalogTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a message under a catalog and translation key.
    pub fn add_message(
        &self,
        catalog: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.messages
            .insert((catalog.into(), key.into()), message.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for CatalogTranslator {
    fn translate(
        &self,
        key: &str,
        parameters: &TranslationParameters,
        catalog: &str,
    ) -> Result<String, BackendError> {
        let lookup = (catalog.to_string(), key.to_string());
        let mut message = match self.messages.get(&lookup) {
            Some(entry) => entry.clone(),
            None => key.to_string(),
        };

        for (placeholder, replacement) in parameters {
            message = message.replace(placeholder, replacement);
        }

        Ok(message)
    }
}
