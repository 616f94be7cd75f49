//! Flat-file persistence for tasks and the theme preference.
//!
//! Tasks live in `todos.json`, the theme flag in `theme.json`, both under a
//! per-user data directory. Loads are lenient: a missing or corrupt file
//! degrades to the default value with a logged warning, never an error the
//! caller has to handle.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::Task;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not locate a home directory for the data dir")]
    NoDataDir,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ThemePrefs {
    #[serde(default)]
    dark_mode: bool,
}

#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    /// Open (and create if needed) the data directory. `override_dir` wins
    /// over the per-user default.
    pub fn open(override_dir: Option<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = match override_dir {
            Some(dir) => dir,
            None => ProjectDirs::from("", "", "tuido")
                .ok_or(StoreError::NoDataDir)?
                .data_dir()
                .to_path_buf(),
        };
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.data_dir.join("todos.json")
    }

    pub fn theme_path(&self) -> PathBuf {
        self.data_dir.join("theme.json")
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("tuido.log")
    }

    pub fn load_tasks(&self) -> Vec<Task> {
        let path = self.tasks_path();
        if !path.exists() {
            return Vec::new();
        }
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!(path = %path.display(), %err, "task file is corrupt, starting empty");
                    Vec::new()
                }
            },
            Err(err) => {
                warn!(path = %path.display(), %err, "could not read task file, starting empty");
                Vec::new()
            }
        }
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(tasks)?;
        fs::write(self.tasks_path(), raw)?;
        Ok(())
    }

    pub fn load_dark_mode(&self) -> bool {
        let path = self.theme_path();
        if !path.exists() {
            return false;
        }
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<ThemePrefs>(&raw) {
                Ok(prefs) => prefs.dark_mode,
                Err(err) => {
                    warn!(path = %path.display(), %err, "theme file is corrupt, using light");
                    false
                }
            },
            Err(err) => {
                warn!(path = %path.display(), %err, "could not read theme file, using light");
                false
            }
        }
    }

    pub fn save_dark_mode(&self, dark_mode: bool) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&ThemePrefs { dark_mode })?;
        fs::write(self.theme_path(), raw)?;
        Ok(())
    }
}
