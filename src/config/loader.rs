//! Configuration loader with environment variable expansion

use super::{expand_env_vars, Config, ConfigError};
use std::path::Path;
use tracing::debug;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Read configuration file");
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text, expanding `${VAR}` references first
    pub fn from_yaml(content: &str) -> Result<Config, ConfigError> {
        let expanded = expand_env_vars(content);
        // An empty document deserializes to unit, not to a mapping
        let config: Config = if expanded.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&expanded)?
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;

    #[test]
    fn test_from_yaml_partial() {
        let config = ConfigLoader::from_yaml("logging:\n  format: json\n").unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_from_yaml_empty() {
        assert_eq!(ConfigLoader::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn test_from_yaml_rejects_unknown_format() {
        let result = ConfigLoader::from_yaml("logging:\n  format: xml\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
