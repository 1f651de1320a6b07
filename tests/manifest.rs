//! Loading a route manifest from disk and resolving against it.

use std::path::PathBuf;

use deeplink_router::config::validation::{find_overlaps, find_shared_roots, Overlap};
use deeplink_router::config::{load_config, ConfigError};
use deeplink_router::routing::OverlapExtent;
use deeplink_router::manifest::registry_from_config;

const MANIFEST: &str = r#"
[syntax]
placeholder_sigil = ":"

[observability]
log_level = "warn"

[[routes]]
name = "site"
pattern = "app://sites/:site"
screen = "SiteBrowser"

[[routes]]
name = "folder"
pattern = "app://folder/:id"
screen = "FolderBrowser"

[[routes]]
name = "folder-by-path"
pattern = "app://folder/:path"
screen = "FolderBrowser"

[[routes]]
name = "upload"
pattern = "app://upload"
screen = "UploadFlow"
container = true
"#;

fn write_manifest(name: &str, content: &str) -> PathBuf {
    let file = format!("deeplink-router-{}-{}.toml", name, std::process::id());
    let path = std::env::temp_dir().join(file);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_and_resolve() {
    let path = write_manifest("resolve", MANIFEST);
    let config = load_config(&path).unwrap();
    std::fs::remove_file(&path).unwrap_or_default();

    assert_eq!(config.observability.log_level, "warn");
    let registry = registry_from_config(&config);
    assert_eq!(registry.len(), 4);

    let site = registry.screen_for("app://sites/finance?view=grid").unwrap();
    assert_eq!(site.route, "site");
    assert_eq!(site.values.get("site").map(String::as_str), Some("finance"));
    assert_eq!(site.query, vec![("view".to_string(), "grid".to_string())]);

    let upload = registry.screen_for("app://upload").unwrap();
    assert!(upload.container);

    // The two folder routes collide at runtime.
    assert!(registry.screen_for("app://folder/1").unwrap_err().is_ambiguous());
}

#[test]
fn test_overlaps_reported() {
    let path = write_manifest("overlaps", MANIFEST);
    let config = load_config(&path).unwrap();
    std::fs::remove_file(&path).unwrap_or_default();

    assert_eq!(
        find_overlaps(&config),
        vec![Overlap {
            first: "folder".into(),
            second: "folder-by-path".into(),
            extent: OverlapExtent::Full,
            example: "app://folder/id".into(),
        }]
    );

    // Every `app` route also matches the bare `app://`.
    let roots = find_shared_roots(&config);
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].root, "app://");
    assert_eq!(roots[0].routes.len(), 4);
    let registry = registry_from_config(&config);
    assert!(registry.screen_for("app://").unwrap_err().is_ambiguous());
}

#[test]
fn test_short_urls_reported() {
    let path = write_manifest(
        "short",
        r#"
        [[routes]]
        name = "browse-shared"
        pattern = "app://browse/shared"
        screen = "SharedBrowser"

        [[routes]]
        name = "browse-mine"
        pattern = "app://browse/mine"
        screen = "MyBrowser"
        "#,
    );
    let config = load_config(&path).unwrap();
    std::fs::remove_file(&path).unwrap_or_default();

    let overlaps = find_overlaps(&config);
    assert_eq!(
        overlaps,
        vec![Overlap {
            first: "browse-shared".into(),
            second: "browse-mine".into(),
            extent: OverlapExtent::UpTo(1),
            example: "app://browse".into(),
        }]
    );

    let registry = registry_from_config(&config);
    assert!(registry.screen_for(&overlaps[0].example).unwrap_err().is_ambiguous());
    assert_eq!(registry.screen_for("app://browse/mine").unwrap().route, "browse-mine");
}

#[test]
fn test_invalid_manifest_rejected() {
    let path = write_manifest(
        "invalid",
        r#"
        [[routes]]
        name = "folder"
        pattern = "app://folder/:id"
        screen = "FolderBrowser"

        [[routes]]
        name = "folder"
        pattern = "app://folder/:id"
        screen = ""
        "#,
    );
    let err = load_config(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap_or_default();

    match err {
        ConfigError::Validation(errors) => assert_eq!(errors.len(), 3),
        other => panic!("unexpected error: {other}"),
    }
}
