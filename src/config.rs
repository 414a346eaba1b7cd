use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

const APP_NAME: &str = "edistats";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

/// Optional defaults read from a TOML file; CLI flags override them
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub(crate) json: bool,
    pub(crate) no_color: bool,
    pub(crate) debug: bool,
    pub(crate) color: Option<ConfigColorMode>,
    /// Glob restricting which directory entries are processed (e.g. "*.txt")
    pub(crate) pattern: Option<String>,
}

/// A config plus what happened while looking for it.
///
/// Loading runs before logging is set up (the config can enable `debug`),
/// so messages are kept and logged afterwards.
#[derive(Debug, Default)]
pub(crate) struct LoadedConfig {
    pub(crate) config: Config,
    pub(crate) path: Option<PathBuf>,
    pub(crate) warnings: Vec<String>,
}

impl LoadedConfig {
    pub(crate) fn log(&self) {
        for w in &self.warnings {
            warn!("{w}");
        }
        if let Some(path) = &self.path {
            debug!("loaded config from {}", path.display());
        }
    }
}

impl Config {
    /// Load the first config file that parses, or defaults
    pub(crate) fn load() -> LoadedConfig {
        let mut loaded = LoadedConfig::default();
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(config) => {
                        loaded.config = config;
                        loaded.path = Some(path);
                        return loaded;
                    }
                    Err(e) => loaded
                        .warnings
                        .push(format!("failed to parse {}: {}", path.display(), e)),
                }
            }
        }
        loaded
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }

    /// Candidate files, in lookup order:
    /// `~/.config/edistats/config.toml`, the platform config dir, `~/.edistats.toml`
    fn get_config_paths() -> Vec<PathBuf> {
        let candidates = [
            dirs::home_dir().map(|h| h.join(".config").join(APP_NAME).join(CONFIG_FILE)),
            dirs::config_dir().map(|c| c.join(APP_NAME).join(CONFIG_FILE)),
            dirs::home_dir().map(|h| h.join(format!(".{APP_NAME}.toml"))),
        ];
        let mut paths = Vec::new();
        for path in candidates.into_iter().flatten() {
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
        paths
    }
}
