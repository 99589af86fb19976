use std::{fs, path::Path};

use anyhow::Context;
use bytekit_core::HexOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CliConfig {
    /// Defaults for `bytekit encode`; command line flags can only switch them on.
    pub hex: HexOptions,
}

impl CliConfig {
    /// Loads the config file, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("no config file at {path:?}, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {path:?}"))?;
        toml::from_str(&content).with_context(|| format!("could not parse config file {path:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config: CliConfig = toml::from_str("[hex]\nleader = true\n").unwrap();
        assert_eq!(config.hex, HexOptions::new().with_leader(true));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[hex]\nspaces = \"yes\"\n").unwrap();
        assert!(CliConfig::load(&path).is_err());
    }
}
