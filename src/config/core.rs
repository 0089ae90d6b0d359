use anyhow::{Context, Result, bail};
use figment::{
    Figment,
    providers::{Format, Json, Toml, Yaml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Effective benchmark configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    pub dataset: DatasetConfig,
}

/// Dataset settings; the only tunable part of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Number of records to generate
    pub size: usize,
}

impl BenchConfig {
    /// Load the embedded defaults
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    /// Load the embedded defaults, then merge `custom_config` on top.
    ///
    /// The file format is picked from the extension: `.json`, `.yaml`/`.yml`,
    /// anything else is read as TOML.
    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(custom_path) = custom_config {
            let path = Path::new(custom_path);
            if !path.is_file() {
                bail!("Config file not found: {custom_path}");
            }

            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("json") => figment.merge(Json::file(path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
                _ => figment.merge(Toml::file(path)),
            };
            tracing::debug!("Merged config file {}", path.display());
        }

        figment
            .extract()
            .with_context(|| match custom_config {
                Some(path) => format!("Invalid configuration in {path}"),
                None => "Invalid embedded default configuration".to_string(),
            })
    }

    /// Apply a command-line dataset size, which wins over every file
    pub fn with_size_override(mut self, size: Option<usize>) -> Self {
        if let Some(size) = size {
            self.dataset.size = size;
        }
        self
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_loads_defaults() {
        let config = BenchConfig::load().expect("Should load default config");
        assert_eq!(config.dataset.size, 10_000);
    }

    #[test]
    fn test_toml_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bench.toml");
        fs::write(&path, "[dataset]\nsize = 42\n").unwrap();

        let config = BenchConfig::load_with_custom_config(path.to_str()).unwrap();
        assert_eq!(config.dataset.size, 42);
    }

    #[test]
    fn test_json_and_yaml_override() {
        let dir = TempDir::new().unwrap();

        let json = dir.path().join("bench.json");
        fs::write(&json, r#"{"dataset": {"size": 7}}"#).unwrap();
        let config = BenchConfig::load_with_custom_config(json.to_str()).unwrap();
        assert_eq!(config.dataset.size, 7);

        let yaml = dir.path().join("bench.yml");
        fs::write(&yaml, "dataset:\n  size: 9\n").unwrap();
        let config = BenchConfig::load_with_custom_config(yaml.to_str()).unwrap();
        assert_eq!(config.dataset.size, 9);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "# nothing here\n").unwrap();

        let config = BenchConfig::load_with_custom_config(path.to_str()).unwrap();
        assert_eq!(config.dataset.size, 10_000);
    }

    #[test]
    fn test_missing_custom_config_is_an_error() {
        let result = BenchConfig::load_with_custom_config(Some("non_existent.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_size_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[dataset]\nsize = \"lots\"\n").unwrap();

        assert!(BenchConfig::load_with_custom_config(path.to_str()).is_err());
    }

    #[test]
    fn test_cli_override_wins() {
        let config = BenchConfig::load().unwrap().with_size_override(Some(5));
        assert_eq!(config.dataset.size, 5);

        let config = BenchConfig::load().unwrap().with_size_override(None);
        assert_eq!(config.dataset.size, 10_000);
    }

    #[test]
    fn test_to_toml() {
        let rendered = BenchConfig::load().unwrap().to_toml().unwrap();
        assert!(rendered.contains("[dataset]"));
        assert!(rendered.contains("size = 10000"));
    }
}
