//! In-memory settings store

use crate::Result;
use std::collections::HashMap;

use super::{SettingsData, SettingsStore};

/// Settings store holding its objects in memory.
///
/// Used as the test double for [`DirSettingsStore`] and wherever a fixed set
/// of settings objects needs to be supplied without a backing tree. Lookups
/// never fail.
///
/// # Example
///
/// ```
/// use forge_settings::{MemorySettingsStore, SettingsData, SettingsStore};
///
/// let store = MemorySettingsStore::new().with_object(
///     "team-a",
///     "build-pipeline-defaults",
///     SettingsData::from([("default_build_bundle".into(), "quay.io/foo/bar:1".into())]),
/// );
/// assert!(store.lookup("team-a", "build-pipeline-defaults").unwrap().is_some());
/// assert!(store.lookup("team-b", "build-pipeline-defaults").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    /// Maps (namespace, object name) to the object payload
    objects: HashMap<(String, String), SettingsData>,
}

impl MemorySettingsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }

    /// Add an object, consuming and returning the store for chaining.
    pub fn with_object(
        mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        data: SettingsData,
    ) -> Self {
        self.insert(namespace, name, data);
        self
    }

    /// Insert an object, replacing any previous payload under the same
    /// namespace and name.
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        data: SettingsData,
    ) {
        self.objects.insert((namespace.into(), name.into()), data);
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn lookup(&self, namespace: &str, name: &str) -> Result<Option<SettingsData>> {
        Ok(self
            .objects
            .get(&(namespace.to_string(), name.to_string()))
            .cloned())
    }
}
