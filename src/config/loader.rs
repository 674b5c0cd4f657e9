//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ShardprepConfig;
use crate::domain::errors::SplitError;
use crate::domain::result::Result;
use std::fs;
use std::path::Path;

/// Path probed when no configuration file is passed explicitly
pub const DEFAULT_CONFIG_PATH: &str = "shardprep.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file, or falls back to built-in defaults when no path
///    was given and the default path does not exist
/// 2. Parses the TOML into ShardprepConfig
/// 3. Applies environment variable overrides (SHARDPREP_* prefix)
/// 4. Validates the configuration
///
/// An explicitly passed path that does not exist is a configuration error;
/// a missing file at the default path is not.
///
/// # Arguments
///
/// * `path` - Optional path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly passed file cannot be read
/// - TOML parsing fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use shardprep::config::load_config;
///
/// let config = load_config(None).expect("Failed to load config");
/// ```
pub fn load_config(path: Option<&str>) -> Result<ShardprepConfig> {
    let mut config = match path {
        Some(explicit) => read_config_file(Path::new(explicit))?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                read_config_file(default_path)?
            } else {
                tracing::debug!(
                    path = DEFAULT_CONFIG_PATH,
                    "No configuration file found, using built-in defaults"
                );
                ShardprepConfig::default()
            }
        }
    };

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        SplitError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Reads and parses a configuration file that must exist
fn read_config_file(path: &Path) -> Result<ShardprepConfig> {
    if !path.exists() {
        return Err(SplitError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SplitError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config: ShardprepConfig = toml::from_str(&contents)
        .map_err(|e| SplitError::Configuration(format!("Failed to parse TOML: {e}")))?;

    Ok(config)
}

/// Applies environment variable overrides using the SHARDPREP_* prefix
///
/// Environment variables follow the pattern: SHARDPREP_<SECTION>_<KEY>
/// For example: SHARDPREP_LAYOUT_DESTINATION_ROOT, SHARDPREP_SPLIT_DEFAULT_BUS_COUNT
fn apply_env_overrides(config: &mut ShardprepConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("SHARDPREP_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Split overrides
    if let Ok(val) = std::env::var("SHARDPREP_SPLIT_DEFAULT_BUS_COUNT") {
        if let Ok(count) = val.parse() {
            config.split.default_bus_count = count;
        }
    }

    // Layout overrides
    if let Ok(val) = std::env::var("SHARDPREP_LAYOUT_DESTINATION_ROOT") {
        config.layout.destination_root = val;
    }
    if let Ok(val) = std::env::var("SHARDPREP_LAYOUT_BUS_DIR_PREFIX") {
        config.layout.bus_dir_prefix = val;
    }
    if let Ok(val) = std::env::var("SHARDPREP_LAYOUT_DATA_SUBDIR") {
        config.layout.data_subdir = val;
    }
    if let Ok(val) = std::env::var("SHARDPREP_LAYOUT_OUTPUT_FILE") {
        config.layout.output_file = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_missing_explicit_file() {
        let result = load_config(Some("nonexistent.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[application]
log_level = "debug"

[split]
default_bus_count = 5

[layout]
destination_root = "staging"

[datasets]
small_100k = "data/experiments/small_100k.csv"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.split.default_bus_count, 5);
        assert_eq!(config.layout.destination_root, "staging");
        assert_eq!(config.datasets.len(), 1);
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"not = valid = toml").unwrap();
        temp_file.flush().unwrap();

        let result = load_config(Some(temp_file.path().to_str().unwrap()));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[split]\ndefault_bus_count = 0\n")
            .unwrap();
        temp_file.flush().unwrap();

        let result = load_config(Some(temp_file.path().to_str().unwrap()));
        assert!(result.is_err());
    }

    #[test]
    fn test_env_override_destination_root() {
        std::env::set_var("SHARDPREP_LAYOUT_DESTINATION_ROOT", "env_dist");
        let mut config = ShardprepConfig::default();
        apply_env_overrides(&mut config);
        assert_eq!(config.layout.destination_root, "env_dist");
        std::env::remove_var("SHARDPREP_LAYOUT_DESTINATION_ROOT");
    }

    #[test]
    fn test_env_override_ignores_unparsable_bus_count() {
        std::env::set_var("SHARDPREP_SPLIT_DEFAULT_BUS_COUNT", "not-a-number");
        let mut config = ShardprepConfig::default();
        apply_env_overrides(&mut config);
        assert_eq!(config.split.default_bus_count, 3);
        std::env::remove_var("SHARDPREP_SPLIT_DEFAULT_BUS_COUNT");
    }
}
