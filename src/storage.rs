use crate::errors::StoreError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Reads the raw slot contents. A slot that was never written is `None`.
pub async fn read_slot(path: &Path) -> Result<Option<Vec<u8>>, StoreError> {
    match fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Overwrites the slot. The payload lands in a sibling file first and is then
/// renamed over the slot, so readers see either the old or the new contents.
pub async fn write_slot(path: &Path, payload: &[u8]) -> Result<(), StoreError> {
    let staging = staging_path(path);
    if let Err(err) = fs::write(&staging, payload).await {
        let _ = fs::remove_file(&staging).await;
        return Err(err.into());
    }
    if let Err(err) = fs::rename(&staging, path).await {
        let _ = fs::remove_file(&staging).await;
        return Err(err.into());
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
