//! Settings-store abstraction
//!
//! A settings object is a namespaced key/value document (config-map style).
//! Stores are read-only from this crate's perspective: absence of an object
//! is the normal "no configuration at this tier" signal and is reported as
//! `Ok(None)`, never as an error. An `Err` means the backing itself failed —
//! an unreadable or malformed document — and it is up to the caller to
//! decide whether that is fatal.

mod dir;
mod memory;

pub use dir::DirSettingsStore;
pub use memory::MemorySettingsStore;

use crate::Result;
use std::collections::BTreeMap;

/// Key/value payload of a single settings object.
pub type SettingsData = BTreeMap<String, String>;

/// Trait for read-only lookup of namespaced settings objects.
///
/// Implementations must be shareable across a controller's worker threads;
/// lookups take `&self` and carry no mutable state.
pub trait SettingsStore: Send + Sync {
    /// Look up the settings object `name` within `namespace`.
    ///
    /// Returns `Ok(None)` when no such object exists. Returns `Err` only
    /// when the backing store failed to produce an answer.
    fn lookup(&self, namespace: &str, name: &str) -> Result<Option<SettingsData>>;
}
