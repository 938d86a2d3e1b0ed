//! GitOps configuration assembly
//!
//! The resolved bundle is packaged as a [`GitopsConfig`], the value the
//! downstream renderer writes into the component's GitOps repository.

use forge_settings::SettingsStore;
use serde::{Deserialize, Serialize};

use crate::component::ComponentRef;
use crate::resolver::BundleResolver;

/// Build configuration rendered into a component's GitOps repository.
///
/// Built fresh on every call; carries no lifecycle of its own. Further
/// resolved fields follow the same contract: resolution never fails, so
/// assembly never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitopsConfig {
    /// Bundle driving the component's build pipeline
    pub build_bundle: String,
}

/// Prepare the GitOps build configuration for `component`.
///
/// Delegates to [`BundleResolver`] with the built-in defaults table and
/// wraps the result. Infallible.
pub fn prepare_gitops_config(store: &dyn SettingsStore, component: &ComponentRef) -> GitopsConfig {
    GitopsConfig {
        build_bundle: BundleResolver::new().resolve_build_bundle(store, component),
    }
}
