use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::model::character::Character;

pub const SAVE_EXTENSION: &str = "json";
pub const CATALOG_FILE_NAME: &str = "monsters.json";
pub const DIR_ENV_VAR: &str = "COMBAT_TRACKER_DIR";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to list {}: {source}", dir.display())]
    Enumerate {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode roster: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Picks the directory save files and the monster catalog live in.
///
/// `COMBAT_TRACKER_DIR` wins over the configured directory, which wins
/// over the platform documents folder.
pub fn documents_dir(configured: Option<&Path>) -> PathBuf {
    if let Some(dir) = std::env::var_os(DIR_ENV_VAR).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    if let Some(dir) = configured {
        return dir.to_path_buf();
    }
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// JSON save files in a single directory.
#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.dir.join(CATALOG_FILE_NAME)
    }

    pub fn new_save_path(&self) -> PathBuf {
        self.dir
            .join(format!("NewCampaignFile-{}.{SAVE_EXTENSION}", Uuid::new_v4()))
    }

    /// Every visible `.json` file in the directory, sorted by name.
    /// A directory that does not exist yet simply has no saves.
    pub fn list_save_files(&self) -> Result<Vec<PathBuf>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Enumerate {
                    dir: self.dir.clone(),
                    source,
                })
            }
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Enumerate {
                dir: self.dir.clone(),
                source,
            })?;
            let path = entry.path();

            let hidden = path
                .file_name()
                .and_then(OsStr::to_str)
                .is_some_and(|n| n.starts_with('.'));
            if hidden || !path.is_file() {
                continue;
            }
            if path.extension() == Some(OsStr::new(SAVE_EXTENSION)) {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    pub fn load(&self, path: &Path) -> Result<Vec<Character>, StoreError> {
        let data = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| StoreError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes next to the target first and renames over it, so a failed
    /// write never leaves a truncated save behind.
    pub fn save(&self, path: &Path, characters: &[Character]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(characters)?;

        let write_err = |source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let file_name = path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or("roster");
        let tmp = path.with_file_name(format!(".{file_name}.tmp"));

        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            write_err(source)
        })
    }
}
