//! Content resolution engine.
//!
//! This module provides:
//! - Declarative per-notification-type options resolved against process-wide
//!   defaults into an immutable, typed configuration
//! - Subject rendering through an injected translation backend
//! - Body rendering through an injected templating backend
//!
//! # Example
//!
//! ```ignore
//! let translator = Arc::new(CatalogTranslator::new());
//! let engine = Arc::new(MemoryTemplateEngine::new());
//!
//! let mut builder = ContentBuilder::new(translator, defaults)
//!     .with_templating(engine);
//!
//! builder.configure(&declared_options)?;
//!
//! let content = builder.content(delivery.parameters())?;
//! channel.handle(content, &delivery);
//! ```

mod builder;
mod options;

pub use builder::{Content, ContentBuilder};
pub use options::{DeclaredOptions, ResolvedOptions};
