use crate::error::{MusicLibError, Result};
use crate::search::ExclusionPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_FILE: &str = "musicdatabase.txt";

/// Configuration for the music library, stored as config.json in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryConfig {
    /// File written by `export` when no filename is given
    #[serde(default = "default_export_file")]
    pub default_export_file: String,

    /// Replaces the built-in per-command help text
    #[serde(default)]
    pub help_file: Option<PathBuf>,

    /// How `-term` refines search results
    #[serde(default)]
    pub exclusion_policy: ExclusionPolicy,
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            default_export_file: default_export_file(),
            help_file: None,
            exclusion_policy: ExclusionPolicy::default(),
        }
    }
}

impl LibraryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: LibraryConfig = serde_json::from_str(&content)?;
        if config.default_export_file.is_empty() {
            return Err(MusicLibError::Config(
                "default_export_file cannot be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LibraryConfig::default();
        assert_eq!(config.default_export_file, "musicdatabase.txt");
        assert_eq!(config.help_file, None);
        assert_eq!(config.exclusion_policy, ExclusionPolicy::KeepMatching);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = LibraryConfig::load(dir.path()).unwrap();
        assert_eq!(config, LibraryConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");

        let config = LibraryConfig {
            default_export_file: "backup.txt".to_string(),
            help_file: Some(PathBuf::from("help.txt")),
            exclusion_policy: ExclusionPolicy::DropMatching,
        };
        config.save(&nested).unwrap();

        let loaded = LibraryConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "exclusion_policy": "drop_matching" }"#,
        )
        .unwrap();

        let config = LibraryConfig::load(dir.path()).unwrap();
        assert_eq!(config.exclusion_policy, ExclusionPolicy::DropMatching);
        assert_eq!(config.default_export_file, "musicdatabase.txt");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        assert!(matches!(
            LibraryConfig::load(dir.path()),
            Err(MusicLibError::Serialization(_))
        ));
    }

    #[test]
    fn test_empty_export_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "default_export_file": "" }"#,
        )
        .unwrap();

        assert!(matches!(
            LibraryConfig::load(dir.path()),
            Err(MusicLibError::Config(_))
        ));
    }
}
