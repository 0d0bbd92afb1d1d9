//! Configuration file I/O: path resolution and loading.

use std::path::{Path, PathBuf};

use super::Config;

/// Returns the platform-specific configuration directory for `fontpreview`.
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("fontpreview");
        }
        PathBuf::from(".").join("fontpreview")
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("fontpreview");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config").join("fontpreview");
        }
        PathBuf::from(".").join("fontpreview")
    }
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

impl Config {
    /// Loads config from the default path. Returns defaults if the file
    /// doesn't exist or can't be parsed.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Loads config from `path`, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        let data = match std::fs::read_to_string(path) {
            Ok(d) => d,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("config: failed to read {}: {e}", path.display());
                }
                return Self::default();
            }
        };

        match toml::from_str(&data) {
            Ok(cfg) => {
                log::info!("config: loaded from {}", path.display());
                cfg
            }
            Err(e) => {
                log::warn!("config: parse error in {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
