//! JSON file storage for the app record.
//!
//! The whole record is read and written wholesale as one pretty-printed
//! JSON file, with a backup copy written alongside on every save. Loading
//! merges the stored object over the default record one top-level key at a
//! time: a key present in the stored record replaces the default's value
//! wholesale, never field-by-field. That shallow merge is a known quirk of
//! the data format and is preserved here so old exports keep loading the
//! same way.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use tracing::{error, warn};

use super::data_dir;
use crate::error::StorageError;
use crate::model::AppData;

const DATA_FILE: &str = "data.json";
const BACKUP_FILE: &str = "data.backup.json";
const LAST_VISIT_FILE: &str = "last-visit";

/// Handle on the data directory. All persistence goes through here; the
/// rest of the crate only ever sees [`AppData`].
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the store at the default data directory.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self { dir: data_dir()? })
    }

    /// Open a store rooted at an explicit directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn data_path(&self) -> PathBuf {
        self.dir.join(DATA_FILE)
    }

    fn backup_path(&self) -> PathBuf {
        self.dir.join(BACKUP_FILE)
    }

    fn last_visit_path(&self) -> PathBuf {
        self.dir.join(LAST_VISIT_FILE)
    }

    /// Load the record, degrading to the default on any failure. A missing
    /// file is the normal first run; a corrupt one is logged and ignored.
    pub fn load(&self) -> AppData {
        let path = self.data_path();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return AppData::default(),
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to read data file");
                return AppData::default();
            }
        };
        match serde_json::from_str::<Value>(&content) {
            Ok(value) => match merge_into_default(value) {
                Ok(data) => data,
                Err(e) => {
                    error!(path = %path.display(), error = %e, "stored record is malformed");
                    AppData::default()
                }
            },
            Err(e) => {
                error!(path = %path.display(), error = %e, "data file is not valid JSON");
                AppData::default()
            }
        }
    }

    /// Persist the record and refresh its `lastUpdated` stamp. The backup
    /// copy is best-effort: its failure is logged but never fails the save.
    pub fn save(&self, data: &mut AppData) -> Result<(), StorageError> {
        data.meta.last_updated = Utc::now();
        let json = serde_json::to_string_pretty(data)?;
        let path = self.data_path();
        std::fs::write(&path, json).map_err(|source| StorageError::SaveFailed {
            path: path.clone(),
            source,
        })?;

        if let Err(e) = self.write_backup(data) {
            warn!(error = %e, "could not write backup copy");
        }
        Ok(())
    }

    fn write_backup(&self, data: &AppData) -> Result<(), StorageError> {
        let wrapper = serde_json::json!({
            "data": data,
            "timestamp": Utc::now(),
        });
        let path = self.backup_path();
        std::fs::write(&path, serde_json::to_string_pretty(&wrapper)?).map_err(|source| {
            StorageError::SaveFailed { path, source }
        })
    }

    /// The record held in the backup copy, or `None` on any failure.
    pub fn restore_backup(&self) -> Option<AppData> {
        let path = self.backup_path();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    error!(path = %path.display(), error = %e, "failed to read backup");
                }
                return None;
            }
        };
        let wrapper: Value = match serde_json::from_str(&content) {
            Ok(v) => v,
            Err(e) => {
                error!(path = %path.display(), error = %e, "backup is not valid JSON");
                return None;
            }
        };
        match wrapper.get("data") {
            Some(data) => match merge_into_default(data.clone()) {
                Ok(data) => Some(data),
                Err(e) => {
                    error!(path = %path.display(), error = %e, "backup record is malformed");
                    None
                }
            },
            None => None,
        }
    }

    /// Write the record plus an export stamp to
    /// `deeper-backup-YYYY-MM-DD.json` in `dir`. Returns the file path.
    pub fn export(
        &self,
        data: &AppData,
        dir: &Path,
        now: DateTime<Utc>,
    ) -> Result<PathBuf, StorageError> {
        let mut value = serde_json::to_value(data)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("exportDate".into(), serde_json::json!(now));
            obj.insert("version".into(), Value::String(data.meta.version.clone()));
        }
        let path = dir.join(format!("deeper-backup-{}.json", now.date_naive()));
        std::fs::write(&path, serde_json::to_string_pretty(&value)?).map_err(|source| {
            StorageError::SaveFailed {
                path: path.clone(),
                source,
            }
        })?;
        Ok(path)
    }

    /// Parse an exported file into a record. Rejected outright unless both
    /// `meta` and `preferences` are present; a partial record is never
    /// merged in.
    pub fn import(&self, path: &Path) -> Result<AppData, StorageError> {
        let content = std::fs::read_to_string(path).map_err(|source| StorageError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| StorageError::ImportParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let valid = value.get("meta").is_some() && value.get("preferences").is_some();
        if !valid {
            return Err(StorageError::InvalidImportFormat);
        }
        merge_into_default(value).map_err(|e| StorageError::ImportParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Clear the primary record, its backup, and the last-visit marker.
    /// `confirmed` carries the caller's double-confirmation outcome; when
    /// false nothing is touched.
    pub fn reset(&self, confirmed: bool) -> Result<bool, StorageError> {
        if !confirmed {
            return Ok(false);
        }
        for path in [self.data_path(), self.backup_path(), self.last_visit_path()] {
            match std::fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(source) => return Err(StorageError::SaveFailed { path, source }),
            }
        }
        Ok(true)
    }

    /// True on the first call of a given day; rewrites the marker as a
    /// side effect.
    pub fn is_first_visit_today(&self, today: NaiveDate) -> bool {
        let marker = today.to_string();
        let path = self.last_visit_path();
        let last = std::fs::read_to_string(&path).ok();
        if last.as_deref() == Some(marker.as_str()) {
            return false;
        }
        if let Err(e) = std::fs::write(&path, &marker) {
            warn!(path = %path.display(), error = %e, "could not update last-visit marker");
        }
        true
    }
}

/// Shallow top-level merge of a stored object over the default record.
fn merge_into_default(stored: Value) -> Result<AppData, serde_json::Error> {
    let mut base = serde_json::to_value(AppData::default())?;
    if let (Some(base_obj), Value::Object(stored_obj)) = (base.as_object_mut(), stored) {
        for (key, value) in stored_obj {
            base_obj.insert(key, value);
        }
    }
    serde_json::from_value(base)
}
