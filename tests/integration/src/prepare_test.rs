//! End-to-end tests for build-configuration preparation
//!
//! These exercise the complete flow against the on-disk production store:
//! settings tree on disk -> DirSettingsStore -> bundle resolution -> GitOps
//! config assembly.

use forge_prepare::{
    prepare_gitops_config, BundleResolver, ComponentRef, BUILD_BUNDLE_KEY, BUILD_SETTINGS_NAME,
    DEFAULT_BUNDLE_NAMESPACE, FALLBACK_BUILD_BUNDLE,
};
use forge_settings::SettingsStore;
use forge_test_utils::settings::{FailingSettingsStore, TestSettingsTree};
use pretty_assertions::assert_eq;

#[test]
fn component_namespace_override_wins_end_to_end() {
    let tree = TestSettingsTree::new();
    tree.write_object(
        "myNamespace",
        BUILD_SETTINGS_NAME,
        &[(BUILD_BUNDLE_KEY, "quay.io/foo/bar:1")],
    );
    tree.write_object(
        DEFAULT_BUNDLE_NAMESPACE,
        BUILD_SETTINGS_NAME,
        &[(BUILD_BUNDLE_KEY, "quay.io/foo/bar:2")],
    );

    let store = tree.store();
    let component = ComponentRef::new("myNamespace", "myName");

    let config = prepare_gitops_config(&store, &component);
    assert_eq!(config.build_bundle, "quay.io/foo/bar:1");
}

#[test]
fn default_namespace_override_applies_when_component_namespace_is_silent() {
    let tree = TestSettingsTree::new();
    tree.write_object(
        DEFAULT_BUNDLE_NAMESPACE,
        BUILD_SETTINGS_NAME,
        &[(BUILD_BUNDLE_KEY, "quay.io/foo/bar:2")],
    );

    let store = tree.store();
    let component = ComponentRef::new("myNamespace", "myName");

    let config = prepare_gitops_config(&store, &component);
    assert_eq!(config.build_bundle, "quay.io/foo/bar:2");
}

#[test]
fn empty_tree_yields_the_fallback() {
    let tree = TestSettingsTree::new();
    let store = tree.store();
    let component = ComponentRef::new("myNamespace", "myName");

    let config = prepare_gitops_config(&store, &component);
    assert_eq!(config.build_bundle, FALLBACK_BUILD_BUNDLE);
}

#[test]
fn malformed_objects_degrade_to_the_fallback() {
    // Unrelated key in one namespace, empty value in the other
    let tree = TestSettingsTree::new();
    tree.write_object(
        "myNamespace",
        BUILD_SETTINGS_NAME,
        &[("invalidKey", "quay.io/foo/bar:3")],
    );
    tree.write_object(
        DEFAULT_BUNDLE_NAMESPACE,
        BUILD_SETTINGS_NAME,
        &[(BUILD_BUNDLE_KEY, "")],
    );

    let store = tree.store();
    let component = ComponentRef::new("myNamespace", "myName");

    let config = prepare_gitops_config(&store, &component);
    assert_eq!(config.build_bundle, FALLBACK_BUILD_BUNDLE);
}

#[test]
fn unparseable_document_degrades_to_the_next_tier() {
    let tree = TestSettingsTree::new();
    tree.write_raw(
        "myNamespace",
        BUILD_SETTINGS_NAME,
        "default_build_bundle: [broken\n",
    );
    tree.write_object(
        DEFAULT_BUNDLE_NAMESPACE,
        BUILD_SETTINGS_NAME,
        &[(BUILD_BUNDLE_KEY, "quay.io/foo/bar:2")],
    );

    let store = tree.store();

    // The store itself reports the broken document as an error
    assert!(store.lookup("myNamespace", BUILD_SETTINGS_NAME).is_err());

    // The resolver absorbs it and consults the default namespace
    let component = ComponentRef::new("myNamespace", "myName");
    let config = prepare_gitops_config(&store, &component);
    assert_eq!(config.build_bundle, "quay.io/foo/bar:2");
}

#[test]
fn unreachable_backing_degrades_to_the_fallback() {
    let component = ComponentRef::new("myNamespace", "myName");

    let config = prepare_gitops_config(&FailingSettingsStore, &component);
    assert_eq!(config.build_bundle, FALLBACK_BUILD_BUNDLE);
}

#[test]
fn prepare_matches_direct_resolution() {
    let tree = TestSettingsTree::new();
    tree.write_object(
        DEFAULT_BUNDLE_NAMESPACE,
        BUILD_SETTINGS_NAME,
        &[(BUILD_BUNDLE_KEY, "quay.io/foo/bar:2")],
    );

    let store = tree.store();
    let component = ComponentRef::new("myNamespace", "myName");

    let resolved = BundleResolver::new().resolve_build_bundle(&store, &component);
    let config = prepare_gitops_config(&store, &component);
    assert_eq!(config.build_bundle, resolved);
}

#[test]
fn gitops_config_serializes_for_the_renderer() {
    let tree = TestSettingsTree::new();
    tree.write_object(
        "myNamespace",
        BUILD_SETTINGS_NAME,
        &[(BUILD_BUNDLE_KEY, "quay.io/foo/bar:1")],
    );

    let store = tree.store();
    let component = ComponentRef::new("myNamespace", "myName");

    let config = prepare_gitops_config(&store, &component);
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json, serde_json::json!({"build_bundle": "quay.io/foo/bar:1"}));
}
