use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the recipe search API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Number of search results per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Directory holding the persisted key-value records (likes)
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    /// Serving and preparation time defaults
    #[serde(default)]
    pub scaling: ScalingConfig,
    /// Extra unit synonyms and filler words on top of the built-in table
    #[serde(default)]
    pub units: UnitsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout: default_timeout(),
            page_size: default_page_size(),
            storage_dir: default_storage_dir(),
            scaling: ScalingConfig::default(),
            units: UnitsConfig::default(),
        }
    }
}

/// Constants for derived recipe fields
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScalingConfig {
    /// Servings assumed when the source does not publish any
    #[serde(default = "default_servings")]
    pub default_servings: u32,
    /// Minutes added per started group of `ingredients_per_period` ingredients
    #[serde(default = "default_minutes_per_period")]
    pub minutes_per_period: u32,
    #[serde(default = "default_ingredients_per_period")]
    pub ingredients_per_period: u32,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            default_servings: default_servings(),
            minutes_per_period: default_minutes_per_period(),
            ingredients_per_period: default_ingredients_per_period(),
        }
    }
}

/// Unit table additions
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct UnitsConfig {
    /// Synonym -> canonical unit, e.g. `tbl = "tbsp"`
    #[serde(default)]
    pub synonyms: HashMap<String, String>,
    /// Words that occupy the unit slot but are discarded
    #[serde(default)]
    pub dropped: Vec<String>,
}

// Default value functions
fn default_api_base_url() -> String {
    "https://forkify-api.herokuapp.com/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> usize {
    10
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".forkify")
}

fn default_servings() -> u32 {
    4
}

fn default_minutes_per_period() -> u32 {
    15
}

fn default_ingredients_per_period() -> u32 {
    3
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with FORKIFY__ prefix
    /// 2. forkify.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: FORKIFY__SCALING__DEFAULT_SERVINGS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the source priority.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("forkify").required(false))
        // Use double underscore for nested: FORKIFY__SCALING__DEFAULT_SERVINGS
        .add_source(
            Environment::with_prefix("FORKIFY")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_values() {
        assert_eq!(default_page_size(), 10);
        assert_eq!(default_servings(), 4);
        assert_eq!(default_minutes_per_period(), 15);
        assert_eq!(default_ingredients_per_period(), 3);
        assert_eq!(default_timeout(), 30);
    }

    #[test]
    fn test_scaling_config_default() {
        let scaling = ScalingConfig::default();
        assert_eq!(scaling.default_servings, 4);
        assert_eq!(scaling.minutes_per_period, 15);
        assert_eq!(scaling.ingredients_per_period, 3);
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str("", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.page_size, 10);
        assert_eq!(config.storage_dir, PathBuf::from(".forkify"));
        assert!(config.units.synonyms.is_empty());
    }

    #[test]
    fn test_toml_overrides() {
        let toml = r#"
            page_size = 5
            storage_dir = "/tmp/forkify-test"

            [scaling]
            default_servings = 2

            [units]
            dropped = ["ripe"]

            [units.synonyms]
            tbl = "tbsp"
        "#;

        let config: AppConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.page_size, 5);
        assert_eq!(config.scaling.default_servings, 2);
        assert_eq!(config.scaling.minutes_per_period, 15);
        assert_eq!(config.units.synonyms.get("tbl"), Some(&"tbsp".to_string()));
        assert_eq!(config.units.dropped, vec!["ripe".to_string()]);
    }
}
