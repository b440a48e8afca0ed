//! Resolved destination values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A resolved connection target produced by a delegate resolver.
///
/// The chain forwards whatever a delegate produced without copying or
/// modifying it; everything beyond the target URI is delegate-defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// The target URI.
    pub uri: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Free-form properties (headers, auth hints, whatever the producing
    /// delegate attaches).
    pub properties: BTreeMap<String, Value>,
}

impl Destination {
    /// Destination pointing at the given URI with no further properties.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            name: None,
            properties: BTreeMap::new(),
        }
    }

    /// Set the display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add one property.
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_destination_builder() {
        let destination = Destination::new("https://objects.internal:9000")
            .named("object-store")
            .with_property("tls", json!(true));

        assert_eq!(destination.uri, "https://objects.internal:9000");
        assert_eq!(destination.name.as_deref(), Some("object-store"));
        assert_eq!(destination.properties.get("tls"), Some(&json!(true)));
    }
}
