use std::{fs, io::Write, path::PathBuf};

use anyhow::Context;
use clap::Subcommand;
use toml_edit::{DocumentMut, Item, Table};
use tracing::info;

#[derive(Subcommand)]
pub enum CmdConfig {
    /// Creates the config file if it doesn't exist and fills in missing defaults
    Init,
}

impl CmdConfig {
    pub fn run(self, config_file: PathBuf) -> anyhow::Result<()> {
        let mut doc = if config_file.exists() {
            fs::read_to_string(&config_file)?
        } else {
            if let Some(parent) = config_file.parent() {
                fs::create_dir_all(parent)?;
            }
            "".to_owned()
        }
        .parse::<DocumentMut>()
        .context("could not parse config file")?;

        match self {
            Self::Init => {
                let hex = doc
                    .entry("hex")
                    .or_insert(Item::Table(Table::new()))
                    .as_table_mut()
                    .context("`hex` in config file is not a table")?;
                hex.entry("spaces").or_insert(toml_edit::value(false));
                hex.entry("leader").or_insert(toml_edit::value(false));
            }
        }

        info!("writing to config file {config_file:?}");

        let tmp_path = config_file.with_extension("tmp");
        let mut tmp = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&tmp_path)?;
        tmp.write_all(doc.to_string().as_bytes())?;
        tmp.sync_all()?;
        fs::rename(&tmp_path, config_file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use bytekit_core::HexOptions;

    #[test]
    fn test_init_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        CmdConfig::Init.run(path.clone()).unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_init_keeps_existing_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "# my settings\n[hex]\nspaces = true\n").unwrap();
        CmdConfig::Init.run(path.clone()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# my settings"));
        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.hex, HexOptions::new().with_spaces(true));
    }
}
