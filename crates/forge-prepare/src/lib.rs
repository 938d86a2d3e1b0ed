//! Build-configuration preparation core for Component Forge
//!
//! This crate decides which build bundle (the container-image reference
//! driving a component's build pipeline) applies to a managed component,
//! and packages the answer for the GitOps renderer:
//!
//! - **Bundle resolution**: tiered lookup of overridable cluster
//!   configuration with a hardcoded safe default
//! - **Defaults table**: the well-known settings-object name, key, default
//!   namespace and fallback bundle as explicit configuration
//! - **GitOps assembly**: the resolved reference wrapped as [`GitopsConfig`]
//!
//! # Architecture
//!
//! `forge-prepare` sits between the reconciliation loop and the settings
//! backing:
//!
//! ```text
//!     reconciliation loop
//!            |
//!      forge-prepare
//!            |
//!     forge-settings (SettingsStore)
//! ```
//!
//! Resolution is a pure, total decision function: it never fails, performs
//! at most two read lookups per call, and holds no state between calls.
//!
//! # Example
//!
//! ```
//! use forge_prepare::{prepare_gitops_config, ComponentRef, FALLBACK_BUILD_BUNDLE};
//! use forge_settings::MemorySettingsStore;
//!
//! let store = MemorySettingsStore::new();
//! let component = ComponentRef::new("team-a", "frontend");
//!
//! let config = prepare_gitops_config(&store, &component);
//! assert_eq!(config.build_bundle, FALLBACK_BUILD_BUNDLE);
//! ```

pub mod component;
pub mod defaults;
pub mod gitops;
pub mod resolver;

pub use component::ComponentRef;
pub use defaults::{
    BundleDefaults, BUILD_BUNDLE_KEY, BUILD_SETTINGS_NAME, DEFAULT_BUNDLE_NAMESPACE,
    FALLBACK_BUILD_BUNDLE,
};
pub use gitops::{prepare_gitops_config, GitopsConfig};
pub use resolver::BundleResolver;
