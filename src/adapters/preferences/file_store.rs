use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{AdminLogError, Result};
use crate::core::traits::preferences::PageSizeStore;

/// File name of the preferences document inside the config directory.
const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Serialize, Deserialize)]
struct Preferences {
    page_size: usize,
}

/// Page-size preference stored as a small JSON document.
pub struct FilePageSizeStore {
    path: PathBuf,
}

impl FilePageSizeStore {
    /// Store preferences in `{dir}/preferences.json`.
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(PREFERENCES_FILE),
        }
    }

    /// Store preferences next to the default config file.
    ///
    /// Returns `None` when the platform has no config directory.
    pub fn in_config_dir() -> Option<Self> {
        dirs::config_dir().map(|d| Self::new(&d.join("adminlog")))
    }
}

impl PageSizeStore for FilePageSizeStore {
    fn load(&self) -> Option<usize> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Preferences>(&content) {
            Ok(p) => Some(p.page_size),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "ignoring unreadable preferences"
                );
                None
            }
        }
    }

    fn save(&self, size: usize) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(&Preferences { page_size: size }).map_err(|e| {
            AdminLogError::PreferencesError {
                detail: format!("Failed to serialize preferences: {e}"),
            }
        })?;
        fs::write(&self.path, json).map_err(|e| AdminLogError::PreferencesError {
            detail: format!("Cannot write {}: {e}", self.path.display()),
        })
    }
}
