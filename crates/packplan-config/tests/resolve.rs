//! Tests for mode-dependent configuration assembly.

use packplan_config::{
    Argv, BuildMode, CSS_EXTRACT_LOADER, ModeSettings, PluginSpec, ProjectLayout, ResolveInputs,
    STYLE_LOADER, assemble,
};
use serde_json::json;
use std::path::PathBuf;

fn assemble_for(mode: BuildMode) -> packplan_config::BuildConfig {
    assemble(&ResolveInputs::new("/project", mode)).expect("assemble")
}

#[test]
fn production_config_shape() {
    let config = assemble_for(BuildMode::Production);
    let value = config.to_value().expect("serialize");

    assert_eq!(value["devServer"], json!({}));
    assert_eq!(
        value["optimization"]["minimizer"],
        json!([{ "plugin": "css-minimizer", "options": {} }])
    );
    assert_eq!(
        config.style_rule().and_then(|r| r.head()).map(|s| s.loader.as_str()),
        Some(CSS_EXTRACT_LOADER)
    );
    assert!(matches!(config.settings, ModeSettings::Production(_)));
}

#[test]
fn development_config_shape() {
    let config = assemble_for(BuildMode::Development);
    let value = config.to_value().expect("serialize");

    assert_eq!(value["optimization"], json!({}));
    assert_eq!(value["devServer"]["historyApiFallback"], json!(true));
    assert_eq!(
        config.style_rule().and_then(|r| r.head()).map(|s| s.loader.as_str()),
        Some(STYLE_LOADER)
    );
}

#[test]
fn source_maps_follow_mode() {
    for (mode, expected) in [(BuildMode::Production, false), (BuildMode::Development, true)] {
        let config = assemble_for(mode);
        let flags: Vec<bool> = config.module.steps().filter_map(|s| s.source_map()).collect();

        assert!(!flags.is_empty());
        assert!(
            flags.iter().all(|&flag| flag == expected),
            "{mode}: expected every sourceMap option to be {expected}, got {flags:?}"
        );
    }
}

#[test]
fn development_without_env_leaves_host_and_port_unset() {
    let config = assemble_for(BuildMode::Development);
    let dev = config.dev_server().expect("dev server");
    assert!(dev.host.is_none());
    assert!(dev.port.is_none());
    assert!(!dev.open);

    let value = config.to_value().expect("serialize");
    assert!(value["devServer"].get("host").is_none());
    assert!(value["devServer"].get("port").is_none());
    assert_eq!(value["devServer"]["open"], json!(false));
}

#[test]
fn production_entry_is_fixed() {
    let value = assemble_for(BuildMode::Production).to_value().expect("serialize");
    assert_eq!(value["entry"], json!({ "index": "./src/index.js" }));
}

#[test]
fn assembly_is_idempotent() {
    for mode in [BuildMode::Production, BuildMode::Development] {
        let inputs = ResolveInputs::new("/project", mode);
        assert_eq!(assemble(&inputs).unwrap(), assemble(&inputs).unwrap());
    }
}

#[test]
fn lenient_unknown_mode_matches_development() {
    let staging = assemble_for(BuildMode::from_flag_lenient("staging"));
    let development = assemble_for(BuildMode::Development);
    assert_eq!(staging, development);
}

#[test]
fn strict_unknown_mode_is_rejected() {
    assert!("staging".parse::<BuildMode>().is_err());
}

#[test]
fn purge_follows_extraction_in_both_modes() {
    for mode in [BuildMode::Production, BuildMode::Development] {
        let config = assemble_for(mode);
        assert_eq!(
            config.plugins.names(),
            [PluginSpec::HTML, PluginSpec::CSS_EXTRACT, PluginSpec::CSS_PURGE]
        );
    }
}

#[test]
fn serialized_top_level_keys() {
    let value = assemble_for(BuildMode::Production).to_value().expect("serialize");
    let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        ["devServer", "entry", "mode", "module", "optimization", "output", "plugins"]
    );
}

#[test]
fn custom_layout_flows_into_config() {
    let layout = ProjectLayout {
        entry_name: "main".to_string(),
        entry: PathBuf::from("./app/main.js"),
        out_dir: PathBuf::from("public"),
        bundle_filename: "app.js".to_string(),
        css_filename: "app.css".to_string(),
        ..ProjectLayout::default()
    };
    let inputs = ResolveInputs::new("/project", BuildMode::Development).with_layout(layout);
    let value = assemble(&inputs).expect("assemble").to_value().expect("serialize");

    assert_eq!(value["entry"], json!({ "main": "./app/main.js" }));
    assert_eq!(value["output"], json!({ "filename": "app.js", "path": "/project/public" }));
    assert_eq!(value["devServer"]["contentBase"], json!("/project/public"));
    assert_eq!(value["plugins"][1]["options"]["filename"], json!("app.css"));
}

#[test]
fn argv_does_not_change_assembly() {
    let argv = Argv::from_pairs(["watch", "config=webpack.js"]);
    let plain = ResolveInputs::new("/project", BuildMode::Production);
    let with_argv = plain.clone().with_argv(argv.clone());

    assert_eq!(with_argv.argv, argv);
    assert_eq!(assemble(&plain).unwrap(), assemble(&with_argv).unwrap());
}
