//! Settings-store capability for Component Forge
//!
//! This crate provides read-only access to namespaced key/value settings
//! objects — the overridable cluster configuration consulted when preparing
//! build configuration for a component.
//!
//! Access goes through the [`SettingsStore`] trait so the backing can be
//! swapped without touching the resolution logic:
//!
//! - [`DirSettingsStore`]: production backing, one YAML document per object
//!   at `<root>/<namespace>/<name>.yaml`
//! - [`MemorySettingsStore`]: in-memory backing for tests and embedding
//!
//! # Example
//!
//! ```
//! use forge_settings::{MemorySettingsStore, SettingsData, SettingsStore};
//!
//! let store = MemorySettingsStore::new().with_object(
//!     "build-templates",
//!     "build-pipeline-defaults",
//!     SettingsData::from([("default_build_bundle".into(), "quay.io/foo/bar:1".into())]),
//! );
//!
//! let data = store.lookup("build-templates", "build-pipeline-defaults").unwrap();
//! assert!(data.is_some());
//! ```

pub mod error;
pub mod store;

pub use error::{Error, Result};
pub use store::{DirSettingsStore, MemorySettingsStore, SettingsData, SettingsStore};
