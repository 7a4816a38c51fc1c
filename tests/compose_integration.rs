//! Cross-component integration tests
//!
//! These tests drive the full composition pipeline: declared options resolved
//! against process-wide defaults, subject/body rendering through the
//! in-memory backends, and channel decoration through a configurator chain
//! over a mail-like message.

use std::sync::Arc;

use serde_json::{json, Value};

use courier_compose::{
    CatalogTranslator, ComposeError, Configurator, ConfiguratorChain, ContentBuilder,
    DeclaredOptions, Delivery, MemoryTemplateEngine, Recipient, Result,
};

fn object(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

/// Channel-native message double for a mail-like channel.
#[derive(Debug, Default)]
struct MailMessage {
    from: Option<String>,
    to: Option<String>,
    subject: Option<String>,
    body: Option<String>,
    headers: Vec<(String, String)>,
}

/// Applies a default sender identity when none is set on the message.
struct DefaultSender(&'static str);

impl Configurator<MailMessage> for DefaultSender {
    fn configure(&self, message: &mut MailMessage, _delivery: &Delivery) -> Result<()> {
        if message.from.is_none() {
            message.from = Some(self.0.to_string());
        }
        Ok(())
    }
}

/// Addresses the message to the delivery's recipient.
struct AddressRecipient;

impl Configurator<MailMessage> for AddressRecipient {
    fn configure(&self, message: &mut MailMessage, delivery: &Delivery) -> Result<()> {
        let address = delivery.recipient().address().ok_or_else(|| {
            ComposeError::Configurator("recipient has no mail address".into())
        })?;
        message.to = Some(address.to_string());
        Ok(())
    }
}

/// Attaches the delivery locale as a header when one is hinted.
struct LocaleHeader;

impl Configurator<MailMessage> for LocaleHeader {
    fn configure(&self, message: &mut MailMessage, delivery: &Delivery) -> Result<()> {
        if let Some(locale) = delivery.locale() {
            message
                .headers
                .push(("Content-Language".to_string(), locale.to_string()));
        }
        Ok(())
    }
}

fn backends() -> (Arc<CatalogTranslator>, Arc<MemoryTemplateEngine>) {
    let translator = Arc::new(CatalogTranslator::new());
    translator.add_message("messages", "welcome.subject", "Welcome aboard, %name%!");

    let engine = Arc::new(MemoryTemplateEngine::new());
    engine.register(
        "welcome:email.tpl",
        "Hi {{name}}, your {{plan}} plan starts on {{start_date}}.",
    );
    (translator, engine)
}

fn welcome_builder() -> ContentBuilder {
    let (translator, engine) = backends();
    let defaults = object(json!({"translation_catalog": "messages"}));

    let mut builder = ContentBuilder::new(translator, defaults).with_templating(engine);
    builder
        .configure(&object(json!({
            "subject": "welcome.subject",
            "subject_parameters": ["%name%"],
            "template": "welcome:{channel}.tpl",
            "template_parameters": ["{channel}"],
            "template_vars": {"plan": "starter", "start_date": "2026-09-01"}
        })))
        .expect("welcome options resolve");
    builder
}

#[test]
fn test_full_composition_for_one_send() {
    let builder = welcome_builder();

    let delivery = Delivery::new(
        "email",
        Recipient::new("user-42").with_address("alice@example.com"),
    )
    .with_parameter("%name%", "Alice")
    .with_parameter("name", "Alice")
    .with_parameter("{channel}", "email")
    .with_locale("en");

    let content = builder.content(delivery.parameters()).unwrap();
    assert_eq!(content.subject, "Welcome aboard, Alice!");
    assert_eq!(
        content.body,
        "Hi Alice, your starter plan starts on 2026-09-01."
    );

    // channel side: build the native message and run the chain
    let mut message = MailMessage {
        subject: Some(content.subject.clone()),
        body: Some(content.body.clone()),
        ..MailMessage::default()
    };

    let chain = ConfiguratorChain::new(vec![
        Box::new(DefaultSender("no-reply@example.com")) as Box<dyn Configurator<MailMessage>>,
        Box::new(AddressRecipient),
        Box::new(LocaleHeader),
    ]);
    chain.configure(&mut message, &delivery).unwrap();

    assert_eq!(message.from.as_deref(), Some("no-reply@example.com"));
    assert_eq!(message.to.as_deref(), Some("alice@example.com"));
    assert_eq!(message.subject.as_deref(), Some("Welcome aboard, Alice!"));
    assert_eq!(
        message.body.as_deref(),
        Some("Hi Alice, your starter plan starts on 2026-09-01.")
    );
    assert_eq!(
        message.headers,
        [("Content-Language".to_string(), "en".to_string())]
    );
}

#[test]
fn test_runtime_parameters_override_static_template_vars() {
    let builder = welcome_builder();

    let delivery = Delivery::new("email", Recipient::new("user-7"))
        .with_parameter("name", "Bob")
        .with_parameter("{channel}", "email")
        .with_parameter("plan", "enterprise");

    let body = builder.body(delivery.parameters()).unwrap();
    assert_eq!(body, "Hi Bob, your enterprise plan starts on 2026-09-01.");
}

#[test]
fn test_notification_type_without_body_skips_templating() {
    let (translator, _) = backends();
    // no templating engine wired at all
    let mut builder = ContentBuilder::new(translator, DeclaredOptions::new());
    builder
        .configure(&object(json!({
            "subject": "welcome.subject",
            "translation_catalog": "messages",
            "template": false
        })))
        .unwrap();

    let content = builder.content(&object(json!({}))).unwrap();
    assert_eq!(content.subject, "Welcome aboard, %name%!");
    assert_eq!(content.body, "");
}

#[test]
fn test_unregistered_template_surfaces_backend_error() {
    let builder = welcome_builder();

    // {channel} parameter missing, the identifier stays literal and unknown
    let delivery = Delivery::new("email", Recipient::new("user-9")).with_parameter("name", "Carol");

    let err = builder.body(delivery.parameters()).unwrap_err();
    assert!(matches!(err, ComposeError::Backend(_)));
    assert!(err.to_string().contains("welcome:{channel}.tpl"));
}

#[test]
fn test_chain_failure_aborts_decoration() {
    let delivery = Delivery::new("email", Recipient::new("user-1")); // no address

    let chain = ConfiguratorChain::new(vec![
        Box::new(AddressRecipient) as Box<dyn Configurator<MailMessage>>,
        Box::new(DefaultSender("no-reply@example.com")),
    ]);

    let mut message = MailMessage::default();
    let err = chain.configure(&mut message, &delivery).unwrap_err();

    assert!(matches!(err, ComposeError::Configurator(_)));
    assert!(message.from.is_none());
}

#[test]
fn test_nested_channel_wide_and_notification_chains() {
    let delivery = Delivery::new(
        "email",
        Recipient::new("user-3").with_address("dave@example.com"),
    )
    .with_locale("fr");

    let channel_wide = ConfiguratorChain::new(vec![
        Box::new(DefaultSender("no-reply@example.com")) as Box<dyn Configurator<MailMessage>>,
        Box::new(LocaleHeader),
    ]);
    let chain = ConfiguratorChain::new(vec![
        Box::new(channel_wide) as Box<dyn Configurator<MailMessage>>,
        Box::new(AddressRecipient),
    ]);

    let mut message = MailMessage::default();
    chain.configure(&mut message, &delivery).unwrap();

    assert_eq!(message.from.as_deref(), Some("no-reply@example.com"));
    assert_eq!(message.to.as_deref(), Some("dave@example.com"));
    assert_eq!(message.headers.len(), 1);
}
