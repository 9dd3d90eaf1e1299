use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AacBoardError, Result};

const CONFIG_FILE: &str = "config.toml";
const DEFAULT_BOARD_FILE: &str = "board.txt";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# aac-board configuration file
# Location: ~/.aac-board/config.toml

[board]
# Path of the board mapping file to load at startup.
# Default: board.txt next to this config file.
# Example: file = "/home/user/boards/daily.txt"
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub board: BoardConfig,
}

/// Board-file related configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BoardConfig {
    /// Path of the board mapping file; defaults to `board.txt` in the base
    /// directory when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| AacBoardError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self).map_err(|e| AacBoardError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Resolve the board file path against the base directory
    pub fn board_file(&self, base_dir: &Path) -> PathBuf {
        match &self.board.file {
            Some(file) => base_dir.join(file),
            None => base_dir.join(DEFAULT_BOARD_FILE),
        }
    }

    /// Default base directory: `~/.aac-board`
    pub fn default_base_dir() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".aac-board"))
            .ok_or(AacBoardError::HomeNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_missing_config_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(tmp.path()).unwrap();
        assert!(config.board.file.is_none());
    }

    #[test]
    fn save_and_reload() {
        let tmp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.board.file = Some(PathBuf::from("daily.txt"));

        config.save(tmp.path()).unwrap();
        let reloaded = Config::load(tmp.path()).unwrap();

        assert_eq!(reloaded.board.file, Some(PathBuf::from("daily.txt")));
        assert_eq!(reloaded.board_file(tmp.path()), tmp.path().join("daily.txt"));
    }

    #[test]
    fn board_file_defaults_next_to_config() {
        let tmp = TempDir::new().unwrap();
        let config = Config::default();
        assert_eq!(config.board_file(tmp.path()), tmp.path().join("board.txt"));
    }

    #[test]
    fn load_rejects_bad_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(Config::path(tmp.path()), "not = [valid").unwrap();

        let err = Config::load(tmp.path()).unwrap_err();
        assert!(matches!(err, AacBoardError::ConfigParse { .. }));
    }

    #[test]
    fn init_writes_template_once() {
        let tmp = TempDir::new().unwrap();
        let path = Config::init(tmp.path()).unwrap();
        assert!(path.exists());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[board]"));

        // A second init leaves the file alone
        fs::write(&path, "# edited\n").unwrap();
        Config::init(tmp.path()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# edited\n");
    }
}
