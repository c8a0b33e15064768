use proptest::prelude::*;
use quant_template::utils::config::{load_settings, LoggingSettings, Settings};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_settings(name: &str, contents: &str) -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let dir = std::env::temp_dir().join(format!("quant_template_{}_{}", std::process::id(), now));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write settings");
    path
}

#[test]
fn load_settings_reads_file() {
    let path = temp_settings(
        "settings.toml",
        "[logging]\nlevel = \"debug\"\nformat = \"json\"\n",
    );
    let settings = load_settings(&path).expect("load settings");
    assert_eq!(settings.logging.level, "debug");
    assert_eq!(settings.logging.format, "json");
}

#[test]
fn load_settings_rejects_malformed_toml() {
    let path = temp_settings("broken.toml", "[logging\nlevel = ");
    let err = load_settings(&path).expect_err("expected parse failure");
    assert!(err.contains("failed to parse TOML"));
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    #[test]
    fn missing_fields_fall_back_to_defaults(
        level in proptest::option::of("[a-z_]{1,12}"),
        format in proptest::option::of(prop_oneof![Just("text"), Just("json")]),
    ) {
        let mut toml_str = String::from("[logging]\n");
        if let Some(level) = &level {
            toml_str.push_str(&format!("level = \"{level}\"\n"));
        }
        if let Some(format) = format {
            toml_str.push_str(&format!("format = \"{format}\"\n"));
        }

        let settings: Settings = toml::from_str(&toml_str).expect("settings should parse");
        let defaults = LoggingSettings::default();
        prop_assert_eq!(settings.logging.level, level.unwrap_or(defaults.level));
        prop_assert_eq!(
            settings.logging.format,
            format.map(str::to_string).unwrap_or(defaults.format)
        );
    }
}
