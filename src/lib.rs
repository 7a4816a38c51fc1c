//! Notification content composition.
//!
//! Composes outbound notification content (subject + body) from declarative
//! per-notification-type options and runtime parameters, then lets
//! channel-specific configurators decorate the channel-native message before
//! it reaches a transport.
//!
//! The flow for one send:
//! 1. a notification type declares its options (template id, subject key,
//!    parameter lists, static template vars);
//! 2. [`ContentBuilder::configure`] merges them with process-wide defaults
//!    and validates types once;
//! 3. per send, the caller supplies a [`Delivery`] and the builder renders a
//!    [`Content`] through the injected translation/templating backends;
//! 4. the channel builds its native message from the content and runs its
//!    [`ConfiguratorChain`] over `(message, delivery)` before handing the
//!    message to the transport.
//!
//! The crate does not queue, retry, persist, or schedule anything; every
//! composition is one synchronous call.

// Shared infrastructure
pub mod error;

// Domain
pub mod backend;
pub mod configurator;
pub mod content;
pub mod delivery;

pub use backend::{
    CatalogTranslator, MemoryTemplateEngine, RenderContext, TemplateEngine,
    TranslationParameters, Translator,
};
pub use configurator::{Configurator, ConfiguratorChain};
pub use content::{Content, ContentBuilder, DeclaredOptions, ResolvedOptions};
pub use delivery::{Delivery, Parameters, Recipient};
pub use error::{BackendError, ComposeError, Result};
