//! Subject/body rendering from resolved options and runtime parameters.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::options::{DeclaredOptions, ResolvedOptions};
use crate::backend::{replacement_text, RenderContext, TemplateEngine, TranslationParameters, Translator};
use crate::delivery::Parameters;
use crate::error::{ComposeError, Result};

/// Rendered content for one send. Produced per call, never retained here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub subject: String,
    pub body: String,
}

/// Renders notification subject and body.
///
/// A builder owns the backends and the process-wide default option bag. It
/// must be [`configure`](ContentBuilder::configure)d with the notification
/// type's declared options before rendering; configuring again fully replaces
/// the previous resolution.
///
/// Builders are stateful and not meant for concurrent use of one instance;
/// callers needing parallel throughput construct one per send.
pub struct ContentBuilder {
    translator: Arc<dyn Translator>,
    templating: Option<Arc<dyn TemplateEngine>>,
    defaults: DeclaredOptions,
    options: Option<ResolvedOptions>,
}

impl ContentBuilder {
    pub fn new(translator: Arc<dyn Translator>, defaults: DeclaredOptions) -> Self {
        Self {
            translator,
            templating: None,
            defaults,
            options: None,
        }
    }

    /// Wire the templating engine used for body rendering. Rendering a
    /// truthy `template` without one fails with
    /// [`ComposeError::MissingTemplating`].
    pub fn with_templating(mut self, engine: Arc<dyn TemplateEngine>) -> Self {
        self.templating = Some(engine);
        self
    }

    /// Resolve `declared` against the process-wide defaults and keep the
    /// result for subsequent renders.
    ///
    /// On failure the previous resolution (if any) stays in effect.
    pub fn configure(&mut self, declared: &DeclaredOptions) -> Result<()> {
        let resolved = ResolvedOptions::resolve(&self.defaults, declared)?;
        debug!(
            subject = ?resolved.subject(),
            template = ?resolved.template(),
            catalog = %resolved.translation_catalog(),
            "content builder configured"
        );
        self.options = Some(resolved);
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.options.is_some()
    }

    fn resolved(&self, method: &'static str) -> Result<&ResolvedOptions> {
        self.options
            .as_ref()
            .ok_or(ComposeError::NotConfigured { method })
    }

    /// Render the subject for one send.
    ///
    /// A falsy resolved `subject` yields `""` without calling the translator.
    /// Otherwise only the parameters listed in `subject_parameters` are
    /// exposed to the translation call; keys the caller did not supply are
    /// simply absent.
    pub fn subject(&self, parameters: &Parameters) -> Result<String> {
        let options = self.resolved("subject()")?;

        let Some(key) = options.subject() else {
            return Ok(String::new());
        };

        let filtered: TranslationParameters = options
            .subject_parameters()
            .iter()
            .filter_map(|name| {
                parameters
                    .get(name)
                    .map(|value| (name.clone(), replacement_text(value)))
            })
            .collect();

        trace!(key = %key, parameters = filtered.len(), "translating subject");
        Ok(self
            .translator
            .translate(key, &filtered, options.translation_catalog())?)
    }

    /// Render the body for one send.
    ///
    /// A falsy resolved `template` yields `""` without calling the engine.
    /// Otherwise the parameters listed in `template_parameters` are
    /// substituted into the template *identifier* (a parameter may select
    /// which template variant to load), and the render context is the static
    /// `template_vars` overlaid with the full parameter map, parameters
    /// winning on collision.
    pub fn body(&self, parameters: &Parameters) -> Result<String> {
        let options = self.resolved("body()")?;

        let Some(template) = options.template() else {
            return Ok(String::new());
        };

        let engine = self
            .templating
            .as_ref()
            .ok_or(ComposeError::MissingTemplating)?;

        let mut pairs: Vec<(&str, String)> = options
            .template_parameters()
            .iter()
            .filter(|name| !name.is_empty())
            .filter_map(|name| {
                parameters
                    .get(name)
                    .map(|value| (name.as_str(), replacement_text(value)))
            })
            .collect();
        // longest key wins where keys overlap
        pairs.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()));
        let template_id = substitute_identifier(template, &pairs);

        let mut context: RenderContext = options.template_vars().clone();
        for (key, value) in parameters {
            context.insert(key.clone(), value.clone());
        }

        trace!(template = %template_id, variables = context.len(), "rendering body");
        Ok(engine.render(&template_id, &context)?)
    }

    /// Render subject and body in one call.
    pub fn content(&self, parameters: &Parameters) -> Result<Content> {
        Ok(Content {
            subject: self.subject(parameters)?,
            body: self.body(parameters)?,
        })
    }
}

/// Single left-to-right pass over the identifier: each position is consumed
/// by at most one replacement, so replacement text is never re-matched
/// against the remaining pairs.
fn substitute_identifier(template: &str, pairs: &[(&str, String)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(ch) = rest.chars().next() {
        match pairs.iter().find(|(key, _)| rest.starts_with(key)) {
            Some((key, value)) => {
                rendered.push_str(value);
                rest = &rest[key.len()..];
            }
            None => {
                rendered.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }
    rendered
}
