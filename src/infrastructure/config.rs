//! Configuration management

use crate::domain::{CloseMode, CustomTag, TagCatalog};
use crate::error::{Result, TagstackError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default config file name, looked up in the current directory
pub const CONFIG_FILE: &str = "tagstack.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mode: CloseMode,
    #[serde(default, rename = "tag", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<CustomTag>,
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagstackError::Config(format!("Config file not found: {}", path.display()))
            } else {
                TagstackError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            TagstackError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        // Surface bad tag names at load time rather than on first use
        config.catalog()?;

        Ok(config)
    }

    /// Save config to a TOML file
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| TagstackError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, contents)?;

        Ok(())
    }

    /// Find and load the active config.
    ///
    /// Order: `explicit`, then `TAGSTACK_CONFIG`, then `tagstack.toml` in
    /// `cwd`, then defaults. `TAGSTACK_MODE` overrides the loaded mode.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let mut config = match Self::locate(explicit, cwd) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load_from_path(&path)?
            }
            None => {
                tracing::debug!("no config file found, using defaults");
                Config::default()
            }
        };

        if let Ok(mode) = std::env::var("TAGSTACK_MODE") {
            config.mode = CloseMode::from_str(&mode).map_err(TagstackError::Config)?;
        }

        Ok(config)
    }

    /// Path of the config file [`discover`](Self::discover) would load, if any
    pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        if let Ok(path) = std::env::var("TAGSTACK_CONFIG") {
            return Some(PathBuf::from(path));
        }

        let local = cwd.join(CONFIG_FILE);
        local.is_file().then_some(local)
    }

    /// Tag catalog with this config's custom tags
    pub fn catalog(&self) -> Result<TagCatalog> {
        TagCatalog::with_custom(self.tags.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.mode, CloseMode::Auto);
        assert!(config.tags.is_empty());
    }

    #[test]
    fn test_parse_config_with_tags() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "mode = \"manual\"\n\n[[tag]]\nname = \"em\"\nopen = \"<em>\"\nclose = \"</em>\"\n\n[[tag]]\nname = \"hr\"\nopen = \"<hr>\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.mode, CloseMode::Manual);
        assert_eq!(config.tags.len(), 2);
        assert_eq!(config.tags[0].close.as_deref(), Some("</em>"));
        assert_eq!(config.tags[1].close, None);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        let config = Config {
            mode: CloseMode::Manual,
            tags: vec![CustomTag::new("em", "<em>", Some("</em>".to_string()))],
        };

        config.save_to_path(&path).unwrap();
        let loaded = Config::load_from_path(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from_path(&temp.path().join("missing.toml"));

        match result.unwrap_err() {
            TagstackError::Config(msg) => assert!(msg.contains("not found")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_mode() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "mode = \"lazy\"\n").unwrap();

        assert!(matches!(
            Config::load_from_path(&path),
            Err(TagstackError::Config(_))
        ));
    }

    #[test]
    fn test_load_rejects_builtin_shadowing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[[tag]]\nname = \"span\"\nopen = \"<span class=x>\"\n").unwrap();

        assert!(matches!(
            Config::load_from_path(&path),
            Err(TagstackError::InvalidTagName(_))
        ));
    }

    #[test]
    fn test_locate_explicit_wins() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "").unwrap();
        let explicit = temp.path().join("other.toml");

        let found = Config::locate(Some(&explicit), temp.path());
        assert_eq!(found, Some(explicit));
    }

    #[test]
    fn test_catalog_includes_custom_tags() {
        let config = Config {
            mode: CloseMode::Auto,
            tags: vec![CustomTag::new("em", "<em>", Some("</em>".to_string()))],
        };
        let catalog = config.catalog().unwrap();
        assert!(catalog.resolve("em").is_ok());
        assert!(catalog.resolve("p").is_ok());
    }
}
