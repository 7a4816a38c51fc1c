//! Rendering backends consumed by the content builder.
//!
//! Two contracts: [`Translator`] renders subjects from a translation key,
//! [`TemplateEngine`] renders bodies from a template identifier. Multiple
//! implementations may exist; exactly one of each is selected and injected
//! when a builder is constructed. Selection is a wiring-time decision, never
//! a per-call one.
//!
//! Both are treated as opaque, reentrant, blocking calls. The composition
//! layer performs no caching, timeout, or retry around them.

mod templating;
mod translation;

pub use templating::{MemoryTemplateEngine, TemplateRenderError};
pub use translation::CatalogTranslator;

use std::collections::HashMap;

use crate::error::BackendError;

/// Parameters exposed to subject translation: placeholder -> replacement.
pub type TranslationParameters = HashMap<String, String>;

/// Context handed to body rendering: variable name -> arbitrary JSON value.
pub type RenderContext = serde_json::Map<String, serde_json::Value>;

/// Subject translation contract.
pub trait Translator: Send + Sync {
    fn translate(
        &self,
        key: &str,
        parameters: &TranslationParameters,
        catalog: &str,
    ) -> Result<String, BackendError>;
}

/// Body templating contract.
pub trait TemplateEngine: Send + Sync {
    fn render(&self, template_id: &str, context: &RenderContext) -> Result<String, BackendError>;
}

/// Render a JSON scalar as replacement text. Arrays and objects fall back to
/// their JSON representation.
pub(crate) fn replacement_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => String::new(),
        _ => value.to_string(),
    }
}
