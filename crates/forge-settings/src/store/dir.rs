//! Directory-backed settings store

use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::{SettingsData, SettingsStore};

/// Settings store backed by a directory tree.
///
/// Objects live one YAML document per file at `<root>/<namespace>/<name>.yaml`,
/// mirroring the namespaced key/value documents of the cluster (e.g. a synced
/// configuration checkout):
///
/// ```text
/// settings/
///   build-templates/
///     build-pipeline-defaults.yaml
///   team-a/
///     build-pipeline-defaults.yaml
/// ```
///
/// A missing namespace directory or object file is `Ok(None)`. An unreadable
/// or malformed document is an `Err`.
#[derive(Debug, Clone)]
pub struct DirSettingsStore {
    /// Root of the settings tree
    root: PathBuf,
}

impl DirSettingsStore {
    /// Create a store rooted at `root`.
    ///
    /// The directory does not need to exist yet; lookups against a missing
    /// tree simply find nothing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root of the settings tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compute the document path for an object, rejecting identifiers that
    /// would escape the tree.
    fn object_path(&self, namespace: &str, name: &str) -> Result<PathBuf> {
        for value in [namespace, name] {
            if !valid_identifier(value) {
                return Err(Error::InvalidIdentifier {
                    value: value.to_string(),
                });
            }
        }
        Ok(self.root.join(namespace).join(format!("{name}.yaml")))
    }
}

impl SettingsStore for DirSettingsStore {
    fn lookup(&self, namespace: &str, name: &str) -> Result<Option<SettingsData>> {
        let path = self.object_path(namespace, name)?;
        if !path.is_file() {
            tracing::debug!(?path, "No settings object — skipping");
            return Ok(None);
        }

        tracing::debug!(?path, "Loading settings object");
        let content = fs::read_to_string(&path)?;
        let data: SettingsData = serde_yaml::from_str(&content)?;
        Ok(Some(data))
    }
}

/// An identifier is valid when it cannot change directories: non-empty,
/// no path separators, not `.` or `..`.
fn valid_identifier(value: &str) -> bool {
    !value.is_empty()
        && value != "."
        && value != ".."
        && !value.contains(['/', '\\'])
}
