//! Tests for input gathering and end-to-end resolution.

use packplan_config::{
    Argv, BuildMode, PluginSpec, ResolveInputs, inputs::{HOST_VAR, PORT_VAR}, resolve_config,
};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn clear_dev_server_env() {
    // SAFETY: tests touching the environment are serialized
    unsafe {
        std::env::remove_var(HOST_VAR);
        std::env::remove_var(PORT_VAR);
    }
}

fn project() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    let src = dir.path().join("src");
    fs::create_dir_all(src.join("templates")).expect("create src");
    fs::write(src.join("index.js"), "import './index.scss';").expect("write entry");
    fs::write(src.join("index.scss"), ".hero { color: red; }").expect("write style");
    fs::write(src.join("templates/index.html"), "<html></html>").expect("write template");
    dir
}

#[test]
#[serial]
fn gather_reads_dotenv_file() {
    clear_dev_server_env();
    let dir = project();
    fs::write(dir.path().join(".env"), "WDS_HOST=0.0.0.0\nWDS_PORT=9000\n").expect("write .env");

    let inputs = ResolveInputs::gather(dir.path(), BuildMode::Development, Argv::new());
    clear_dev_server_env();

    let inputs = inputs.expect("gather");
    assert_eq!(inputs.dev_server_env.host.as_deref(), Some("0.0.0.0"));
    assert_eq!(inputs.dev_server_env.port, Some(9000));
}

#[test]
#[serial]
fn process_env_wins_over_dotenv() {
    clear_dev_server_env();
    let dir = project();
    fs::write(dir.path().join(".env"), "WDS_PORT=9000\n").expect("write .env");

    // SAFETY: tests touching the environment are serialized
    unsafe { std::env::set_var(PORT_VAR, "4000") };
    let inputs = ResolveInputs::gather(dir.path(), BuildMode::Development, Argv::new());
    clear_dev_server_env();

    assert_eq!(inputs.expect("gather").dev_server_env.port, Some(4000));
}

#[test]
#[serial]
fn gather_scans_source_tree_for_purge_paths() {
    clear_dev_server_env();
    let dir = project();

    let inputs = ResolveInputs::gather(dir.path(), BuildMode::Production, Argv::new())
        .expect("gather");
    assert_eq!(inputs.purge_paths.len(), 3);
    assert!(inputs.purge_paths.iter().all(|p| p.is_absolute()));
    assert!(inputs.root.is_absolute());
}

#[test]
#[serial]
fn resolve_config_end_to_end() {
    clear_dev_server_env();
    let dir = project();

    let mut argv = Argv::new();
    argv.insert("watch", true);
    let config = resolve_config(dir.path(), BuildMode::Production, argv).expect("resolve");

    assert!(config.dev_server().is_none());
    assert_eq!(config.output.path, std::path::absolute(dir.path()).unwrap().join("dist"));
    match config.plugins.get(PluginSpec::CSS_PURGE) {
        Some(PluginSpec::CssPurge(options)) => assert_eq!(options.paths.len(), 3),
        other => panic!("expected purge plugin, got {other:?}"),
    }
}

#[test]
#[serial]
fn resolve_config_is_idempotent_on_stable_tree() {
    clear_dev_server_env();
    let dir = project();

    let first = resolve_config(dir.path(), BuildMode::Development, Argv::new()).expect("first");
    let second = resolve_config(dir.path(), BuildMode::Development, Argv::new()).expect("second");
    assert_eq!(first, second);
}

#[test]
#[serial]
fn dotenv_does_not_leak_between_projects() {
    clear_dev_server_env();
    let with_env = project();
    fs::write(
        with_env.path().join(".env"),
        "WDS_HOST=a.example\nWDS_PORT=9000\n",
    )
    .expect("write .env");
    let without_env = project();

    let alone = resolve_config(without_env.path(), BuildMode::Development, Argv::new())
        .expect("resolve without .env");
    let other = resolve_config(with_env.path(), BuildMode::Development, Argv::new())
        .expect("resolve with .env");
    let after = resolve_config(without_env.path(), BuildMode::Development, Argv::new())
        .expect("resolve without .env again");

    assert_eq!(
        other.dev_server().and_then(|dev| dev.host.as_deref()),
        Some("a.example")
    );
    assert_eq!(alone, after);
    assert_eq!(after.dev_server().and_then(|dev| dev.port), None);
    assert!(std::env::var(HOST_VAR).is_err());
}
