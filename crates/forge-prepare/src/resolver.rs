//! Build-bundle resolution with tiered overrides
//!
//! The `BundleResolver` consults overridable cluster configuration in a
//! fixed precedence order and falls back to a hardcoded bundle, so a build
//! bundle can always be produced.

use forge_settings::SettingsStore;

use crate::component::ComponentRef;
use crate::defaults::BundleDefaults;

/// Resolves the build bundle for a component.
///
/// Overrides are read from a settings object with the well-known name, in
/// two tiers (first valid hit wins):
///
/// 1. The component's own namespace
/// 2. The organization-wide default namespace
///
/// With no valid override at either tier, the hardcoded fallback bundle
/// applies. An override is valid when the object exists, contains the
/// well-known key, and the value is non-empty; anything else counts as "no
/// override at this tier".
pub struct BundleResolver {
    /// Well-known names driving the lookup chain
    defaults: BundleDefaults,
}

impl BundleResolver {
    /// Create a resolver using the built-in defaults table.
    pub fn new() -> Self {
        Self {
            defaults: BundleDefaults::default(),
        }
    }

    /// Create a resolver with a custom defaults table.
    pub fn with_defaults(defaults: BundleDefaults) -> Self {
        Self { defaults }
    }

    /// The defaults table in use.
    pub fn defaults(&self) -> &BundleDefaults {
        &self.defaults
    }

    /// Resolve the build bundle for `component`.
    ///
    /// Total: always returns a non-empty bundle reference and never fails.
    /// Performs at most two read lookups against `store`. Store errors are
    /// logged and treated as "no override at this tier".
    pub fn resolve_build_bundle(
        &self,
        store: &dyn SettingsStore,
        component: &ComponentRef,
    ) -> String {
        // Tier 1 - override in the component's namespace
        if let Some(bundle) = self.bundle_override(store, &component.namespace) {
            tracing::debug!(
                component = %component,
                namespace = %component.namespace,
                %bundle,
                "Using component-namespace bundle override (tier 1)"
            );
            return bundle;
        }

        // Tier 2 - organization-wide override in the default namespace
        if let Some(bundle) = self.bundle_override(store, &self.defaults.default_namespace) {
            tracing::debug!(
                component = %component,
                namespace = %self.defaults.default_namespace,
                %bundle,
                "Using default-namespace bundle override (tier 2)"
            );
            return bundle;
        }

        // Tier 3 - hardcoded fallback
        tracing::debug!(
            component = %component,
            bundle = %self.defaults.fallback_bundle,
            "No bundle override found — using fallback"
        );
        self.defaults.fallback_bundle.clone()
    }

    /// Read the bundle override from one namespace, if a valid one exists.
    ///
    /// Missing object, missing key and empty value all yield `None`. A store
    /// error also yields `None`, after a warning — legitimate absence and a
    /// failed backing degrade the same way, but only the latter is logged.
    fn bundle_override(&self, store: &dyn SettingsStore, namespace: &str) -> Option<String> {
        let data = match store.lookup(namespace, &self.defaults.settings_name) {
            Ok(found) => found?,
            Err(error) => {
                tracing::warn!(
                    %namespace,
                    settings = %self.defaults.settings_name,
                    %error,
                    "Settings lookup failed — treating as no override"
                );
                return None;
            }
        };

        match data.get(&self.defaults.bundle_key) {
            Some(value) if !value.is_empty() => Some(value.clone()),
            _ => None,
        }
    }
}

impl Default for BundleResolver {
    fn default() -> Self {
        Self::new()
    }
}
