//! The spec registry: a caller-owned store mapping a version key to its
//! document.
//!
//! The registry is an explicit context object rather than process-global
//! state; create one and thread it through. It is not synchronized, so
//! concurrent access from multiple threads must be serialized by the
//! embedding application.

use indexmap::IndexMap;
use log::warn;

use crate::models::Openapi;

/// A keyed store of OpenAPI documents, one per version string.
#[derive(Debug, Default)]
pub struct SpecRegistry {
    specs: IndexMap<String, Openapi>,
}

impl SpecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh document with required defaults populated and
    /// stores it under `version`, returning it for configuration.
    ///
    /// Registration is destructive: re-registering an existing key
    /// discards the prior document entirely, it does not merge.
    pub fn register(&mut self, version: impl Into<String>) -> &mut Openapi {
        let version = version.into();
        if self.specs.contains_key(&version) {
            warn!("overwriting previously registered spec for version {version}");
        }
        self.specs.insert(version.clone(), Openapi::default());
        &mut self.specs[&version]
    }

    /// Registers a fresh document under `version` and configures it
    /// through `block`; the stored document is whatever the block
    /// returns. This is the usual DSL entry point:
    ///
    /// ```
    /// use oas_forge::registry::SpecRegistry;
    ///
    /// let mut registry = SpecRegistry::new();
    /// registry.api("v1", |doc| doc.title("Example API").version("0.0.1"));
    /// assert_eq!(registry.lookup("v1").unwrap().info.title, "Example API");
    /// ```
    pub fn api(
        &mut self,
        version: impl Into<String>,
        block: impl FnOnce(Openapi) -> Openapi,
    ) -> &mut Openapi {
        let version = version.into();
        self.register(version.clone());
        let doc = block(std::mem::take(&mut self.specs[&version]));
        self.specs[&version] = doc;
        &mut self.specs[&version]
    }

    /// Retrieves a previously registered document.
    pub fn lookup(&self, version: &str) -> Option<&Openapi> {
        self.specs.get(version)
    }

    /// Retrieves a previously registered document for further mutation.
    pub fn lookup_mut(&mut self, version: &str) -> Option<&mut Openapi> {
        self.specs.get_mut(version)
    }

    /// The registered version keys, in registration order.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn register_populates_required_defaults() {
        let mut registry = SpecRegistry::new();
        let doc = registry.register("v1");

        assert_eq!(doc.openapi, "3.0.0");
        assert_eq!(doc.info.title, "API Spec");
        assert_eq!(doc.info.version, "v1");
        assert!(doc.servers.is_empty());
        assert!(doc.paths.is_empty());
    }

    #[test]
    fn reregistering_a_key_discards_the_prior_document() {
        let mut registry = SpecRegistry::new();
        registry.api("v1", |doc| {
            doc.title("First").tag(|t| t.name("Kept nowhere"))
        });
        registry.api("v1", |doc| doc.title("Second"));

        let doc = registry.lookup("v1").unwrap();
        assert_eq!(doc.info.title, "Second");
        // No merge: the first document's tags are gone.
        assert_eq!(doc.tags, None);
    }

    #[test]
    fn lookup_misses_return_none() {
        let registry = SpecRegistry::new();
        assert!(registry.lookup("v1").is_none());
    }

    #[test]
    fn versions_iterate_in_registration_order() {
        let mut registry = SpecRegistry::new();
        registry.register("v2");
        registry.register("v1");

        assert_eq!(registry.versions().collect::<Vec<_>>(), vec!["v2", "v1"]);
    }

    #[test]
    fn documents_can_be_serialized_while_partial() {
        let mut registry = SpecRegistry::new();
        registry.api("v1", |doc| doc.title("Partial"));

        let json = serde_json::to_string(registry.lookup("v1").unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"openapi":"3.0.0","info":{"title":"Partial","version":"v1"},"servers":[],"paths":{}}"#
        );
    }
}
