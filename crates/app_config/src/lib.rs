// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Application settings that outlive a session.
//!
//! Only the primary window's geometry is remembered; the scene itself always starts fresh.  On
//! desktop platforms the settings live in an sqlite database in the platform's per-user config
//! directory.  Elsewhere [`AppConfig::load`] leaves the defaults in place and [`AppConfig::save`]
//! does nothing.

use bevy::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
mod sqlite;

/// File name of the settings database inside the config directory.
pub const DB_FILE_NAME: &str = "settings.sqlite3";

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("no location is available to store settings")]
    NoStoragePath,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    /// Logical size of the primary window, if one was recorded.
    pub window_resolution: Option<Vec2>,
    /// Position of the primary window's top-left corner, as reported by the windowing system.
    pub window_position: Option<IVec2>,
    /// Where the settings are stored.  `None` keeps them in memory only.
    pub db_path: Option<PathBuf>,
}

impl AppConfig {
    /// Settings stored in `dir`, which is created if missing.
    pub fn with_storage_dir(dir: &Path) -> Result<Self, ConfigError> {
        std::fs::create_dir_all(dir)?;
        Ok(AppConfig {
            db_path: Some(dir.join(DB_FILE_NAME)),
            ..default()
        })
    }

    /// Settings stored in the platform's per-user config directory.
    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    pub fn in_platform_dir(
        qualifier: &str,
        organization: &str,
        application: &str,
    ) -> Result<Self, ConfigError> {
        let dirs = directories::ProjectDirs::from(qualifier, organization, application)
            .ok_or(ConfigError::NoStoragePath)?;
        Self::with_storage_dir(dirs.config_dir())
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    pub fn in_platform_dir(
        _qualifier: &str,
        _organization: &str,
        _application: &str,
    ) -> Result<Self, ConfigError> {
        Err(ConfigError::NoStoragePath)
    }

    /// Replaces the window settings with the stored ones.  If nothing was stored yet, the current
    /// values are kept.
    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    pub fn load(&mut self) -> Result<(), ConfigError> {
        let path = self.db_path.clone().ok_or(ConfigError::NoStoragePath)?;
        sqlite::load(self, &path)
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    pub fn load(&mut self) -> Result<(), ConfigError> {
        Ok(())
    }

    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self.db_path.as_deref().ok_or(ConfigError::NoStoragePath)?;
        sqlite::save(self, path)
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    pub fn save(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}


// End of File
