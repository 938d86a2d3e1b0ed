//! Well-known names and the defaults table
//!
//! The resolution chain consults a settings object with a fixed name and
//! key. Which name, key, default namespace and fallback bundle apply is
//! carried as an explicit [`BundleDefaults`] value rather than read from
//! hidden globals, so alternate tables can be supplied where the built-in
//! one does not fit (tests, staging clusters).

/// Name of the settings object consulted for build-bundle overrides.
pub const BUILD_SETTINGS_NAME: &str = "build-pipeline-defaults";

/// Key within the settings object that holds the bundle reference.
pub const BUILD_BUNDLE_KEY: &str = "default_build_bundle";

/// Namespace consulted when the component's namespace carries no override.
pub const DEFAULT_BUNDLE_NAMESPACE: &str = "build-templates";

/// Bundle reference applied when no valid override exists at any tier.
pub const FALLBACK_BUILD_BUNDLE: &str = "quay.io/component-forge/build-templates-bundle:v1";

/// The well-known names driving bundle resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleDefaults {
    /// Settings-object name looked up in each tier
    pub settings_name: String,

    /// Key holding the bundle reference within the settings object
    pub bundle_key: String,

    /// Organization-wide namespace consulted as the second tier
    pub default_namespace: String,

    /// Hardcoded bundle reference used when no override is found
    pub fallback_bundle: String,
}

impl Default for BundleDefaults {
    fn default() -> Self {
        Self {
            settings_name: BUILD_SETTINGS_NAME.to_string(),
            bundle_key: BUILD_BUNDLE_KEY.to_string(),
            default_namespace: DEFAULT_BUNDLE_NAMESPACE.to_string(),
            fallback_bundle: FALLBACK_BUILD_BUNDLE.to_string(),
        }
    }
}
