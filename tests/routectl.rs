//! Running the `routectl` binary against a manifest on disk.

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;

const MANIFEST: &str = r#"
[observability]
log_level = "warn"

[[routes]]
name = "folder"
pattern = "app://folder/:id"
screen = "FolderBrowser"

[[routes]]
name = "folder-by-path"
pattern = "app://folder/:path"
screen = "FolderBrowser"

[[routes]]
name = "site"
pattern = "app://sites/:site"
screen = "SiteBrowser"

[[routes]]
name = "upload"
pattern = "app://upload"
screen = "UploadFlow"
container = true
"#;

struct Manifest {
    path: PathBuf,
}

impl Manifest {
    fn write(name: &str) -> Self {
        let file = format!("routectl-{}-{}.toml", name, std::process::id());
        let path = std::env::temp_dir().join(file);
        std::fs::write(&path, MANIFEST).unwrap();
        Self { path }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_routectl"))
            .arg("--manifest")
            .arg(&self.path)
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }
}

impl Drop for Manifest {
    fn drop(&mut self) {
        std::fs::remove_file(&self.path).unwrap_or_default();
    }
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_resolve_prints_screen() {
    let manifest = Manifest::write("resolved");
    let output = manifest.run(&["resolve", "app://sites/finance?view=grid"]);

    assert!(output.status.success());
    let screen = stdout_json(&output);
    assert_eq!(screen["route"], "site");
    assert_eq!(screen["screen"], "SiteBrowser");
    assert_eq!(screen["pattern"], "app://sites/:site");
    assert_eq!(screen["values"]["site"], "finance");
    assert_eq!(screen["query"][0][0], "view");
    assert_eq!(screen["query"][0][1], "grid");
    assert_eq!(screen["container"], false);
}

#[test]
fn test_resolve_ambiguous() {
    let manifest = Manifest::write("ambiguous");
    let output = manifest.run(&["resolve", "app://folder/42"]);

    assert_eq!(output.status.code(), Some(1));
    let body = stdout_json(&output);
    assert_eq!(body["url"], "app://folder/42");
    let reason = body["unresolved"].as_str().unwrap();
    assert!(reason.contains("ambiguous"), "{reason}");
    assert!(reason.contains("app://folder/:id"), "{reason}");
    assert!(reason.contains("app://folder/:path"), "{reason}");
}

#[test]
fn test_resolve_no_match() {
    let manifest = Manifest::write("no-match");
    let output = manifest.run(&["resolve", "other://folder/42"]);

    assert_eq!(output.status.code(), Some(1));
    let body = stdout_json(&output);
    assert_eq!(body["url"], "other://folder/42");
    assert_eq!(body["unresolved"], "no route matches `other://folder/42`");
}

#[test]
fn test_check_reports_overlaps() {
    let manifest = Manifest::write("check");
    let output = manifest.run(&["check"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let warnings: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("warning: "))
        .collect();
    assert_eq!(
        warnings,
        vec![
            "warning: routes `folder` and `folder-by-path` can match the same URL, \
             e.g. `app://folder/id`"
        ]
    );
    assert!(stdout.contains("note: `app://` matches 4 routes"), "{stdout}");
    assert!(stdout.contains("4 routes OK, 1 overlapping pair(s)"), "{stdout}");
}

#[test]
fn test_routes_listing() {
    let manifest = Manifest::write("routes");
    let output = manifest.run(&["routes"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<Vec<&str>> = stdout
        .lines()
        .map(|line| line.split_whitespace().collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec!["folder", "app://folder/:id", "FolderBrowser"],
            vec!["folder-by-path", "app://folder/:path", "FolderBrowser"],
            vec!["site", "app://sites/:site", "SiteBrowser"],
            vec!["upload", "app://upload", "UploadFlow"],
        ]
    );
}

#[test]
fn test_invalid_log_level_rejected() {
    let manifest = Manifest::write("log-level");
    let output = manifest.run(&["--log-level", "loud", "routes"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid log level `loud`"), "{stderr}");
}

#[test]
fn test_missing_manifest() {
    let output = Command::new(env!("CARGO_BIN_EXE_routectl"))
        .args(["--manifest", "/nonexistent/routes.toml", "check"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().contains("Error:"));
}
