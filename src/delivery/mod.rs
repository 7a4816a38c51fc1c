//! Delivery and recipient value objects.
//!
//! A [`Delivery`] describes one notification send request: which channel it
//! targets, who receives it, the runtime parameters available to content
//! rendering, and an optional locale hint. It is created by the caller per
//! send and is read-only to the composition core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Runtime parameter map carried by a delivery and fed to content rendering.
pub type Parameters = serde_json::Map<String, serde_json::Value>;

/// Reference to the party a notification is delivered to.
///
/// Channels interpret this as they see fit: a mail channel reads the address,
/// a persistence channel typically only needs the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
}

impl Recipient {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            address: None,
            display_name: None,
        }
    }

    /// Set the channel-native address (e.g. an email address).
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the human-readable name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

/// A single notification send request.
///
/// Immutable once constructed; the `with_` methods consume `self` and are
/// meant for call-site chaining before the delivery is handed to the core.
/// Every delivery carries a generated id and creation timestamp so sends can
/// be correlated across logs and channel transports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    /// Unique identifier for this send request
    id: Uuid,
    /// When the request was created
    created_at: DateTime<Utc>,
    /// Channel identifier (e.g. "email", "database")
    channel: String,
    recipient: Recipient,
    #[serde(default)]
    parameters: Parameters,
    /// Locale/catalog hint for channel configurators
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<String>,
}

impl Delivery {
    pub fn new(channel: impl Into<String>, recipient: Recipient) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            channel: channel.into(),
            recipient,
            parameters: Parameters::new(),
            locale: None,
        }
    }

    /// Add a single rendering parameter.
    pub fn with_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Replace the whole parameter map.
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_delivery_builder() {
        let delivery = Delivery::new(
            "email",
            Recipient::new("user-1").with_address("user@example.com"),
        )
        .with_parameter("name", "Alice")
        .with_parameter("count", 3)
        .with_locale("fr");

        assert_eq!(delivery.channel(), "email");
        assert_eq!(delivery.recipient().address(), Some("user@example.com"));
        assert_eq!(delivery.parameters()["name"], json!("Alice"));
        assert_eq!(delivery.parameters()["count"], json!(3));
        assert_eq!(delivery.locale(), Some("fr"));
        assert!(delivery.created_at() <= Utc::now());
    }

    #[test]
    fn test_each_delivery_gets_its_own_identity() {
        let first = Delivery::new("email", Recipient::new("user-1"));
        let second = Delivery::new("email", Recipient::new("user-1"));

        assert!(!first.id().is_nil());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_recipient_defaults() {
        let recipient = Recipient::new("user-2");
        assert_eq!(recipient.id(), "user-2");
        assert!(recipient.address().is_none());
        assert!(recipient.display_name().is_none());
    }
}
