use std::{
    fmt,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::warning;

#[derive(Debug)]
pub enum StoreError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for StoreError {
    fn from(err: Error) -> Self {
        StoreError::IoError(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::SerdeError(err)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "I/O error: {}", e),
            StoreError::SerdeError(e) => write!(f, "invalid data: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// A collection persisted as one pretty-printed JSON file.
///
/// Every call opens, fully reads or writes, and closes the file; nothing is
/// cached between calls.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the collection; a missing file is an empty collection.
    pub async fn try_load<T>(&self) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(StoreError::IoError(e)),
        };
        let records = serde_json::from_str(&content)?;
        Ok(records)
    }

    /// Reads the collection, reporting any failure and falling back to empty.
    pub async fn load<T>(&self) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.try_load().await {
            Ok(records) => records,
            Err(StoreError::SerdeError(e)) => {
                warning!(
                    "File {} is corrupt or empty, starting with an empty list. Err: {}",
                    self.path.display(),
                    e
                );
                T::default()
            }
            Err(e) => {
                warning!("Failed to read {}. Err: {}", self.path.display(), e);
                T::default()
            }
        }
    }

    /// Overwrites the file with the full collection.
    ///
    /// The JSON is written to a sibling temporary file first and renamed over
    /// the target.
    pub async fn save<T>(&self, records: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(records)?;
        let tmp = self.tmp_path();
        async_fs::write(&tmp, json).await?;
        if let Err(e) = async_fs::rename(&tmp, &self.path).await {
            let _ = async_fs::remove_file(&tmp).await;
            return Err(StoreError::IoError(e));
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
