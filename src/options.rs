//! Inputs to a resolution attempt.
//!
//! Options identify which binding a destination is wanted for, plus any
//! delegate-specific attributes. The chain itself never reads them; it
//! passes them by reference to each delegate untouched.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::binding::ServiceBinding;

/// Immutable inputs identifying which binding to resolve a destination for.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionOptions {
    binding: ServiceBinding,
    attributes: BTreeMap<String, Value>,
}

impl ResolutionOptions {
    /// Start building options for the given service binding.
    pub fn for_service(binding: ServiceBinding) -> ResolutionOptionsBuilder {
        ResolutionOptionsBuilder {
            binding,
            attributes: BTreeMap::new(),
        }
    }

    /// The binding a destination is wanted for.
    pub fn binding(&self) -> &ServiceBinding {
        &self.binding
    }

    /// A delegate-specific attribute, if one was set.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

/// Builder for [`ResolutionOptions`].
#[derive(Debug)]
pub struct ResolutionOptionsBuilder {
    binding: ServiceBinding,
    attributes: BTreeMap<String, Value>,
}

impl ResolutionOptionsBuilder {
    /// Attach a delegate-specific attribute.
    ///
    /// Attributes are opaque to the chain; only delegates that know the key
    /// interpret the value.
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Finalize the options.
    pub fn build(self) -> ResolutionOptions {
        ResolutionOptions {
            binding: self.binding,
            attributes: self.attributes,
        }
    }
}
