use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::engine::GlyphTheme;
use crate::world::WorldError;

/// Config used when the binary is started without arguments.
pub const DEFAULT_CONFIG_FILE: &str = "public/cave.toml";
pub const DEFAULT_MAP_FILE: &str = "cave_map.txt";
pub const DEFAULT_HELP_FILE: &str = "help.txt";

/// Where the game finds its files and how it draws the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub map_file: PathBuf,
    pub help_file: PathBuf,
    pub glyphs: GlyphTheme,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            map_file: PathBuf::from(DEFAULT_MAP_FILE),
            help_file: PathBuf::from(DEFAULT_HELP_FILE),
            glyphs: GlyphTheme::default(),
        }
    }
}

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    map_file: Option<PathBuf>,

    #[serde(default)]
    help_file: Option<PathBuf>,

    #[serde(default)]
    glyphs: Option<GlyphTheme>,
}

impl GameConfig {
    /// Load a config file. Relative paths inside it are taken relative to
    /// the directory holding the config file.
    pub fn load(path: &Path) -> Result<Self, WorldError> {
        let contents = fs::read_to_string(path).map_err(|e| WorldError::io(path, e))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_toml_str(&contents, base)
    }

    pub fn from_toml_str(contents: &str, base: &Path) -> Result<Self, WorldError> {
        let file: ConfigFile = toml::from_str(contents)?;
        let defaults = GameConfig::default();

        Ok(GameConfig {
            map_file: base.join(file.map_file.unwrap_or(defaults.map_file)),
            help_file: base.join(file.help_file.unwrap_or(defaults.help_file)),
            glyphs: file.glyphs.unwrap_or(defaults.glyphs),
        })
    }
}
