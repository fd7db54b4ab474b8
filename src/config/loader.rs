//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::KassaConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<KassaConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: KassaConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load the config file when one is given, otherwise validate the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<KassaConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let config = KassaConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [listener]
            https = false
            http_address = "127.0.0.1:9000"

            [manager]
            timeout_secs = 3
            "#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert!(!config.listener.https);
        assert_eq!(config.listener.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.manager.timeout_secs, 3);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[manager]\ntimeout_secs = 0").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 1));
        assert!(err.to_string().contains("manager.timeout_secs"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[listener\nhttps = yes").unwrap();

        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation_message_lists_every_error() {
        let err = ConfigError::Validation(vec![
            ValidationError::Zero {
                field: "manager.timeout_secs",
            },
            ValidationError::EmptyPath {
                field: "web.static_dir",
            },
        ]);

        assert_eq!(
            err.to_string(),
            "Validation failed: manager.timeout_secs must be greater than zero, \
             web.static_dir must not be empty"
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_config(Path::new("/nonexistent/kassa.toml")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_no_path_uses_defaults() {
        let config = load_or_default(None).unwrap();
        assert!(config.listener.https);
    }
}
