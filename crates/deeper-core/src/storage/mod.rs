mod store;

pub use store::Store;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/deeper[-dev]/` based on DEEPER_ENV.
///
/// Set DEEPER_ENV=dev to use a separate development data directory.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DEEPER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("deeper-dev")
    } else {
        base_dir.join("deeper")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
