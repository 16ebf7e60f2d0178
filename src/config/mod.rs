// Configuration management for m3utrim
// Handles loading/saving settings, with sensible defaults when config is missing

use anyhow::Result;
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::playlist::CategoryRule;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Hard ceiling on selected channels, across every category.
    pub global_cap: usize,
    /// Ordered: earlier categories get first claim on matching channels.
    pub categories: Vec<CategoryRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("playlist.m3u8"),
            output_path: PathBuf::from("playlist_reduced.m3u8"),
            global_cap: 300,
            categories: default_categories(),
        }
    }
}

impl Config {
    /// Explicit path loads that file and fails if it is unusable;
    /// otherwise fall back to the per-user config, creating it with
    /// defaults on first run.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                let config: Config = toml::from_str(&content)?;
                Ok(config)
            }
            None => Self::load(),
        }
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("m3utrim");

        Ok(config_dir.join("config.toml"))
    }
}

/// The stock category table for Brazilian IPTV lists. Labels are matched
/// as case-insensitive substrings of the #EXTINF line; "HBO " keeps its
/// trailing space so it does not swallow HBO MAX entries.
fn default_categories() -> Vec<CategoryRule> {
    [
        ("GLOBO", 6),
        ("SBT", 4),
        ("RECORD", 4),
        ("BAND", 4),
        ("REDE TV", 3),
        ("TV CULTURA", 3),
        ("ESPN", 8),
        ("SPORTV", 8),
        ("PREMIERE", 12),
        ("HBO MAX", 8),
        ("HBO ", 6),
        ("DISNEY+", 10),
        ("TELECINE", 10),
        ("CINE SKY", 10),
        ("FILMES", 15),
        ("INFANTIL", 15),
        ("DISCOVERY", 8),
        ("HISTORY", 4),
        ("ANIMAL", 3),
        ("NATIONAL", 4),
        ("ESPORTES", 15),
        ("NOTICIAS", 8),
        ("COMBATE", 4),
        ("UFC", 4),
        ("TNT", 6),
        ("SPACE", 4),
        ("AXN", 4),
        ("FX", 4),
        ("WARNER", 6),
        ("UNIVERSAL", 4),
        ("COMEDY", 3),
        ("STAR", 6),
        ("AMC", 4),
        ("SONY", 4),
        ("PARAMOUNT", 6),
        ("NETFLIX", 6),
        ("PRIME", 6),
        ("DAZN", 4),
        ("CAZÉ", 4),
        ("BAND NEWS", 3),
        ("GLOBO NEWS", 3),
        ("CNN", 3),
        ("CARTOON", 4),
        ("NICK", 6),
        ("DISNEY CH", 6),
        ("BOOMERANG", 3),
        ("GLOOB", 4),
        ("FOOD", 3),
        ("TLC", 3),
        ("LIFETIME", 3),
        ("GNT", 4),
        ("MULTISHOW", 4),
        ("MUSIC", 4),
        ("MTV", 4),
        ("VH1", 3),
        ("BIS", 3),
    ]
    .into_iter()
    .map(|(label, quota)| CategoryRule::new(label, quota))
    .collect()
}
