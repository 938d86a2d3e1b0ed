//! Component identity

use std::fmt;

/// Identity of a managed component resource.
///
/// Supplied by the reconciliation loop; this core only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentRef {
    /// Namespace the component lives in
    pub namespace: String,

    /// Component name within the namespace
    pub name: String,
}

impl ComponentRef {
    /// Create a component reference.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
