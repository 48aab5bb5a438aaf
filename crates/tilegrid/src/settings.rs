use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tilegrid_engine_edit::GridLimits;

// =============================================================================
// Project directory constants
// =============================================================================

const PROJECT_QUALIFIER: &str = "com";
const PROJECT_ORGANIZATION: &str = "GitHub";
const PROJECT_APPLICATION: &str = "tilegrid";

static PROJECT_DIRS: Lazy<Option<directories::ProjectDirs>> =
    Lazy::new(|| directories::ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORGANIZATION, PROJECT_APPLICATION));

/// Defaults applied to every script unless the script overrides them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub limits: GridLimits,
    pub smart_paths: bool,
}

impl Settings {
    const FILE_NAME: &'static str = "settings.toml";

    pub fn config_dir() -> Option<PathBuf> {
        PROJECT_DIRS.as_ref().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Read an explicitly given settings file. Errors are fatal here.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("can't read settings file {}", path.display()))?;
        let settings: Settings = toml::from_str(&text).with_context(|| format!("invalid settings file {}", path.display()))?;
        settings.limits.validate()?;
        Ok(settings)
    }

    /// Settings from the user's configuration directory, defaults if there
    /// are none or they can't be read.
    pub fn load() -> Self {
        let Some(config_dir) = Self::config_dir() else {
            return Self::default();
        };
        let settings_file = config_dir.join(Self::FILE_NAME);
        if !settings_file.exists() {
            return Self::default();
        }
        match Self::load_from(&settings_file) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("Error reading settings file: {err:#}");
                Self::default()
            }
        }
    }
}
