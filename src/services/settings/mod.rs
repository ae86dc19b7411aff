//! Portal settings persistence.
//!
//! Settings live in a small TOML file under the platform config
//! directory. A missing file yields defaults; a malformed one is an
//! error the caller decides how to handle.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::PortalSettings;

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine a config directory on this platform")]
    NoConfigDir,
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not valid settings TOML")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings")]
    Serialize(#[source] toml::ser::Error),
}

/// Where settings are stored for the current user.
pub fn default_settings_path() -> Result<PathBuf, SettingsError> {
    ProjectDirs::from("", "", "campus-events")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
        .ok_or(SettingsError::NoConfigDir)
}

/// Load settings from an explicit path.
pub fn load_from(path: &Path) -> Result<PortalSettings, SettingsError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::info!("no settings file at {}, using defaults", path.display());
            return Ok(PortalSettings::default());
        }
        Err(err) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source: err,
            })
        }
    };

    toml::from_str(&text).map_err(|err| SettingsError::Parse {
        path: path.to_path_buf(),
        source: err,
    })
}

/// Save settings to an explicit path, creating parent directories.
pub fn save_to(path: &Path, settings: &PortalSettings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| SettingsError::Write {
            path: path.to_path_buf(),
            source: err,
        })?;
    }

    let text = toml::to_string_pretty(settings).map_err(SettingsError::Serialize)?;
    fs::write(path, text).map_err(|err| SettingsError::Write {
        path: path.to_path_buf(),
        source: err,
    })
}

/// Load from the default location.
pub fn load() -> Result<PortalSettings, SettingsError> {
    load_from(&default_settings_path()?)
}

/// Save to the default location.
pub fn save(settings: &PortalSettings) -> Result<(), SettingsError> {
    save_to(&default_settings_path()?, settings)
}
