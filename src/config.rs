//! Settings handling for foldergen.
//! Settings name the creation directory, the template and the variables CSV.
//! They are read from a settings file that is created with defaults on first run.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CREATION_DIRECTORY, DEFAULT_CSV_PATH, DEFAULT_TEMPLATE_PATH};
use crate::error::{Error, Result};

fn default_creation_directory() -> PathBuf {
    PathBuf::from(DEFAULT_CREATION_DIRECTORY)
}

fn default_template_path() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_PATH)
}

fn default_csv_path() -> PathBuf {
    PathBuf::from(DEFAULT_CSV_PATH)
}

/// Locations used by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Root directory folder trees are created under
    #[serde(default = "default_creation_directory")]
    pub creation_directory: PathBuf,
    /// YAML folder template
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,
    /// CSV table of variables, one row per generated tree
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            creation_directory: default_creation_directory(),
            template_path: default_template_path(),
            csv_path: default_csv_path(),
        }
    }
}

/// Parses settings content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML settings
pub fn parse_settings(content: &str) -> Result<Settings> {
    match serde_json::from_str(content) {
        Ok(settings) => Ok(settings),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid settings format: {e}"))),
    }
}

impl Settings {
    /// Reads settings from `path`, writing the defaults there first if the
    /// file does not exist.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let defaults = Self::default();
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, serde_json::to_string_pretty(&defaults)?)?;
            info!("Created default '{}'.", path.display());
            return Ok(defaults);
        }

        debug!("Loading settings from {}", path.display());
        let settings = parse_settings(&fs::read_to_string(path)?)?;
        info!("Read settings from '{}'.", path.display());
        Ok(settings)
    }

    /// Replaces each location that has an override.
    pub fn with_overrides(
        mut self,
        creation_directory: Option<PathBuf>,
        template_path: Option<PathBuf>,
        csv_path: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = creation_directory {
            self.creation_directory = dir;
        }
        if let Some(path) = template_path {
            self.template_path = path;
        }
        if let Some(path) = csv_path {
            self.csv_path = path;
        }
        self
    }
}
