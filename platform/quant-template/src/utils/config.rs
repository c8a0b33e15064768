use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive, e.g. `info` or `quant_template=debug`.
    pub level: String,
    /// `text` or `json`.
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

pub fn load_settings(path: &Path) -> Result<Settings, String> {
    let contents = fs::read_to_string(path)
        .map_err(|err| format!("failed to read config {}: {}", path.display(), err))?;
    toml::from_str(&contents)
        .map_err(|err| format!("failed to parse TOML {}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::{load_settings, Settings};
    use std::path::Path;

    fn parse_settings(toml_str: &str) -> Settings {
        toml::from_str(toml_str).expect("settings should parse")
    }

    #[test]
    fn parse_full_settings() {
        let toml_str = r#"
[logging]
level = "quant_template=debug"
format = "json"
"#;

        let settings = parse_settings(toml_str);
        assert_eq!(settings.logging.level, "quant_template=debug");
        assert_eq!(settings.logging.format, "json");
    }

    #[test]
    fn empty_file_yields_defaults() {
        let settings = parse_settings("");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "text");
    }

    #[test]
    fn load_settings_missing_file_returns_error() {
        let path = Path::new("/tmp/quant-template-missing-settings.toml");
        let err = load_settings(path).expect_err("expected load to fail");
        assert!(err.contains("failed to read config"));
    }
}
