//! Startup configuration
//!
//! Command line flags plus the resolution of where the item catalog comes
//! from: an explicit `--catalog` path, then `items.json` in the per-user
//! config directory, then the built-in items.

use std::path::{Path, PathBuf};
use clap::Parser;
use crate::item::{CatalogError, ItemCatalog};

const APP_DIR: &str = "console_game";
const CATALOG_FILE: &str = "items.json";

/// Command line flags for the game binary
#[derive(Debug, Parser)]
#[command(name = "console_game")]
#[command(about = "Builds a character, equips starter gear and shows its status")]
pub struct Cli {
    /// Character name
    #[arg(long, default_value = "Chad")]
    pub name: String,

    /// Character job
    #[arg(long, default_value = "Warrior")]
    pub job: String,

    /// Item catalog JSON file (array of { name, type, stat_bonus })
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Resolved startup settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub player_name: String,
    pub job: String,
    /// None means the built-in catalog
    pub catalog_path: Option<PathBuf>,
}

impl GameConfig {
    pub fn from_cli(cli: Cli) -> Self {
        let catalog_path = cli.catalog.or_else(|| {
            Self::user_catalog_path().filter(|path| path.exists())
        });

        GameConfig {
            player_name: cli.name,
            job: cli.job,
            catalog_path,
        }
    }

    /// `<config dir>/console_game/items.json`, if the platform has a config dir
    pub fn user_catalog_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CATALOG_FILE))
    }

    /// Loads the configured catalog, or the built-in one
    pub fn load_catalog(&self) -> Result<ItemCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => ItemCatalog::load(path),
            None => {
                log::info!("Using built-in item catalog");
                Ok(ItemCatalog::create_default())
            }
        }
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["console_game"]).unwrap();
        assert_eq!(cli.name, "Chad");
        assert_eq!(cli.job, "Warrior");
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn test_explicit_catalog_wins() {
        let cli = Cli::try_parse_from([
            "console_game", "--name", "Mia", "--job", "Mage", "--catalog", "/tmp/items.json",
        ]).unwrap();

        let config = GameConfig::from_cli(cli);
        assert_eq!(config.player_name, "Mia");
        assert_eq!(config.job, "Mage");
        assert_eq!(config.catalog_path(), Some(Path::new("/tmp/items.json")));
    }

    #[test]
    fn test_builtin_catalog_when_no_path() {
        let config = GameConfig {
            player_name: "Chad".to_string(),
            job: "Warrior".to_string(),
            catalog_path: None,
        };

        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.len(), ItemCatalog::create_default().len());
    }

    #[test]
    fn test_configured_catalog_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CATALOG_FILE);
        std::fs::write(&path, r#"[{ "name": "Club", "type": "Weapon", "stat_bonus": 1 }]"#).unwrap();

        let config = GameConfig {
            player_name: "Chad".to_string(),
            job: "Warrior".to_string(),
            catalog_path: Some(path),
        };

        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Club").is_some());
    }
}
