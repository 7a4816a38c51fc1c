//! Declared option resolution.
//!
//! Notification authors hand the builder a loosely typed option bag; it is
//! validated and merged with process-wide defaults exactly once, producing an
//! immutable [`ResolvedOptions`] that render paths can trust without
//! re-checking types.

use serde_json::Value;
use tracing::trace;

use crate::error::{ComposeError, Result};

/// Loosely typed option bag accepted by `ContentBuilder::configure`.
pub type DeclaredOptions = serde_json::Map<String, Value>;

const RECOGNIZED: [&str; 6] = [
    "template",
    "subject",
    "translation_catalog",
    "subject_parameters",
    "template_parameters",
    "template_vars",
];

/// The validated, defaulted configuration a content builder acts on.
///
/// `subject` and `template` resolve to `None` for every falsy declared value
/// (`""`, `false`, `null`, absent); render paths short-circuit on `None`
/// without touching a backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedOptions {
    subject: Option<String>,
    template: Option<String>,
    translation_catalog: String,
    subject_parameters: Vec<String>,
    template_parameters: Vec<String>,
    template_vars: serde_json::Map<String, Value>,
}

impl ResolvedOptions {
    /// Merge `declared` over `defaults` over the built-in baseline and
    /// validate the result.
    ///
    /// Keys outside the recognized set are discarded, not rejected, so
    /// callers may pass a richer superset of metadata. A type violation on
    /// any recognized option fails the whole resolution.
    pub fn resolve(defaults: &DeclaredOptions, declared: &DeclaredOptions) -> Result<Self> {
        for key in declared.keys().filter(|k| !RECOGNIZED.contains(&k.as_str())) {
            trace!(option = %key, "discarding unrecognized option");
        }

        let mut resolved = ResolvedOptions::default();
        for option in RECOGNIZED {
            let value = declared.get(option).or_else(|| defaults.get(option));
            if let Some(value) = value {
                resolved.apply(option, value)?;
            }
        }

        Ok(resolved)
    }

    fn apply(&mut self, option: &'static str, value: &Value) -> Result<()> {
        match option {
            "subject" => self.subject = content_key(option, value)?,
            "template" => self.template = content_key(option, value)?,
            "translation_catalog" => {
                self.translation_catalog = match value {
                    Value::String(s) => s.clone(),
                    other => {
                        return Err(ComposeError::invalid_option(
                            option,
                            format!("expected a string, got {}", json_type(other)),
                        ))
                    }
                }
            }
            "subject_parameters" => self.subject_parameters = key_list(option, value)?,
            "template_parameters" => self.template_parameters = key_list(option, value)?,
            "template_vars" => self.template_vars = mapping(option, value)?,
            _ => unreachable!("option names come from RECOGNIZED"),
        }
        Ok(())
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn translation_catalog(&self) -> &str {
        &self.translation_catalog
    }

    pub fn subject_parameters(&self) -> &[String] {
        &self.subject_parameters
    }

    pub fn template_parameters(&self) -> &[String] {
        &self.template_parameters
    }

    pub fn template_vars(&self) -> &serde_json::Map<String, Value> {
        &self.template_vars
    }
}

/// Normalize a `subject`/`template` value: string, boolean, or null.
///
/// `true` has no meaningful key text; it normalizes to `"true"`.
fn content_key(option: &'static str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Bool(false) | Value::Null => Ok(None),
        Value::Bool(true) => Ok(Some("true".to_string())),
        other => Err(ComposeError::invalid_option(
            option,
            format!("expected a string, boolean, or null, got {}", json_type(other)),
        )),
    }
}

/// Normalize an array-like parameter list to a re-indexed list of keys.
/// Objects contribute their values in order; element keys are dropped.
fn key_list(option: &'static str, value: &Value) -> Result<Vec<String>> {
    let values: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => map.values().collect(),
        other => {
            return Err(ComposeError::invalid_option(
                option,
                format!("expected an array, got {}", json_type(other)),
            ))
        }
    };

    values
        .into_iter()
        .enumerate()
        .map(|(index, element)| match element {
            Value::String(s) => Ok(s.clone()),
            other => Err(ComposeError::invalid_option(
                option,
                format!("element {} must be a string, got {}", index, json_type(other)),
            )),
        })
        .collect()
}

/// Normalize a mapping option. Arrays are accepted and re-keyed by index.
fn mapping(option: &'static str, value: &Value) -> Result<serde_json::Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map.clone()),
        Value::Array(items) => Ok(items
            .iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item.clone()))
            .collect()),
        other => Err(ComposeError::invalid_option(
            option,
            format!("expected a mapping, got {}", json_type(other)),
        )),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
