//! In-memory `{{variable}}` template engine.

use dashmap::DashMap;
use thiserror::Error;

use super::{replacement_text, RenderContext, TemplateEngine};
use crate::error::BackendError;

/// Template-engine error type.
#[derive(Debug, Error)]
pub enum TemplateRenderError {
    #[error("Template not found: {0}")]
    NotFound(String),
}

/// Template engine backed by an in-memory template store.
///
/// Template text uses `{{variable}}` placeholders, replaced from the render
/// context. Context values that are not strings are rendered through their
/// JSON scalar form; unreplaced placeholders are left in place.
#[derive(Default)]
pub struct MemoryTemplateEngine {
    templates: DashMap<String, String>,
}

impl MemoryTemplateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register template text under an identifier.
    pub fn register(&self, id: impl Into<String>, text: impl Into<String>) {
        self.templates.insert(id.into(), text.into());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }
}

impl TemplateEngine for MemoryTemplateEngine {
    fn render(&self, template_id: &str, context: &RenderContext) -> Result<String, BackendError> {
        let text = self
            .templates
            .get(template_id)
            .map(|entry| entry.clone())
            .ok_or_else(|| TemplateRenderError::NotFound(template_id.to_string()))?;

        let mut rendered = text;
        for (name, value) in context {
            let placeholder = format!("{{{{{}}}}}", name);
            rendered = rendered.replace(&placeholder, &replacement_text(value));
        }

        Ok(rendered)
    }
}
