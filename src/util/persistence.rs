use std::{fs, io, path::PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::warn;

use crate::domain::AppSettings;

const APP_QUALIFIER: &str = "dev";
const APP_ORG: &str = "TcgLedger";
const APP_NAME: &str = "TCG Ledger";

fn settings_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

/// Saved settings, or defaults when none exist or the file is unreadable.
pub fn load_settings() -> AppSettings {
    let Some(path) = settings_file() else {
        return AppSettings::default();
    };
    let Ok(data) = fs::read_to_string(&path) else {
        return AppSettings::default();
    };
    match serde_json::from_str(&data) {
        Ok(settings) => settings,
        Err(err) => {
            warn!("ignoring unreadable settings at {}: {err}", path.display());
            AppSettings::default()
        }
    }
}

pub fn save_settings(settings: &AppSettings) -> Result<(), PersistSaveError> {
    let path = settings_file().ok_or(PersistSaveError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
