//! Settings-store fixtures for test scenarios.

use forge_settings::{DirSettingsStore, Error, Result, SettingsData, SettingsStore};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary on-disk settings tree with helper methods for test setup.
///
/// Writes the same `<root>/<namespace>/<name>.yaml` layout the production
/// store reads.
///
/// # Example
///
/// ```rust,no_run
/// use forge_test_utils::settings::TestSettingsTree;
///
/// let tree = TestSettingsTree::new();
/// tree.write_object("team-a", "build-pipeline-defaults", &[("default_build_bundle", "quay.io/foo/bar:1")]);
/// let store = tree.store();
/// ```
pub struct TestSettingsTree {
    temp_dir: TempDir,
}

impl Default for TestSettingsTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSettingsTree {
    /// Create an empty temporary settings tree.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestSettingsTree: failed to create temp dir"),
        }
    }

    /// Return the root path of the tree.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a production store reading this tree.
    pub fn store(&self) -> DirSettingsStore {
        DirSettingsStore::new(self.root())
    }

    /// Write a settings object as a YAML document at
    /// `<root>/<namespace>/<name>.yaml`.
    pub fn write_object(&self, namespace: &str, name: &str, pairs: &[(&str, &str)]) {
        let data: SettingsData = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let content =
            serde_yaml::to_string(&data).expect("TestSettingsTree: failed to serialise object");
        self.write_raw(namespace, name, &content);
    }

    /// Write raw document content, valid YAML or not.
    pub fn write_raw(&self, namespace: &str, name: &str, content: &str) {
        let dir = self.root().join(namespace);
        fs::create_dir_all(&dir).expect("TestSettingsTree: failed to create namespace dir");
        fs::write(dir.join(format!("{name}.yaml")), content)
            .expect("TestSettingsTree: failed to write object");
    }
}

/// Settings store whose lookups always fail.
///
/// Stands in for an unreachable backing when exercising degraded paths.
pub struct FailingSettingsStore;

impl SettingsStore for FailingSettingsStore {
    fn lookup(&self, _namespace: &str, _name: &str) -> Result<Option<SettingsData>> {
        Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "settings backing unavailable",
        )))
    }
}
