//! Service binding descriptors.
//!
//! A binding describes one bound service instance as the surrounding
//! platform exposes it: which service it belongs to, under which plan, and
//! the credential material delegates need to derive a destination from it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error raised when a service identifier fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("service identifier must not be empty or blank")]
pub struct InvalidIdentifier;

/// Identifier of a backing service type, for example `"postgresql"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceIdentifier(String);

impl ServiceIdentifier {
    /// Create an identifier from a raw string, trimming surrounding
    /// whitespace. Empty or blank input is rejected.
    pub fn of(value: impl AsRef<str>) -> Result<Self, InvalidIdentifier> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(InvalidIdentifier);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Descriptor of one bound service instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceBinding {
    /// Name of the binding itself, if the platform assigns one.
    pub name: Option<String>,
    /// The service this binding belongs to.
    pub service: Option<ServiceIdentifier>,
    /// Service plan the instance was provisioned under.
    pub plan: Option<String>,
    /// Tags attached to the instance.
    pub tags: Vec<String>,
    /// Credential material, JSON-shaped as platforms deliver it.
    pub credentials: BTreeMap<String, Value>,
}

impl ServiceBinding {
    /// Binding for the given service type with everything else unset.
    pub fn for_service(service: ServiceIdentifier) -> Self {
        Self {
            service: Some(service),
            ..Self::default()
        }
    }

    /// Set the binding name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the service plan.
    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = Some(plan.into());
        self
    }

    /// Add a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add one credential entry.
    pub fn with_credential(mut self, key: impl Into<String>, value: Value) -> Self {
        self.credentials.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identifier_accepts_plain_names() {
        let id = ServiceIdentifier::of("postgresql").unwrap();
        assert_eq!(id.as_str(), "postgresql");
        assert_eq!(id.to_string(), "postgresql");
    }

    #[test]
    fn test_identifier_trims_whitespace() {
        let id = ServiceIdentifier::of("  object-store  ").unwrap();
        assert_eq!(id.as_str(), "object-store");
    }

    #[test]
    fn test_identifier_rejects_empty_input() {
        assert_eq!(ServiceIdentifier::of(""), Err(InvalidIdentifier));
        assert_eq!(ServiceIdentifier::of("   "), Err(InvalidIdentifier));
    }

    #[test]
    fn test_binding_builder() {
        let service = ServiceIdentifier::of("postgresql").unwrap();
        let binding = ServiceBinding::for_service(service.clone())
            .named("orders-db")
            .with_plan("small")
            .with_tag("sql")
            .with_credential("uri", json!("postgres://localhost/orders"));

        assert_eq!(binding.service, Some(service));
        assert_eq!(binding.name.as_deref(), Some("orders-db"));
        assert_eq!(binding.plan.as_deref(), Some("small"));
        assert_eq!(binding.tags, vec!["sql"]);
        assert_eq!(
            binding.credentials.get("uri"),
            Some(&json!("postgres://localhost/orders"))
        );
    }

    #[test]
    fn test_binding_deserializes_from_platform_json() {
        let binding: ServiceBinding = serde_json::from_value(json!({
            "name": "orders-db",
            "service": "postgresql",
            "plan": "small",
            "tags": ["sql", "relational"],
            "credentials": { "uri": "postgres://localhost/orders" }
        }))
        .unwrap();

        assert_eq!(
            binding.service,
            Some(ServiceIdentifier::of("postgresql").unwrap())
        );
        assert_eq!(binding.tags.len(), 2);
    }
}
