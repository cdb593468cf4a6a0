use crate::domain::directory::Directory;
use crate::domain::file_extension::FileExtension;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("Error in file store operation: {0}")]
pub struct FileStoreError(String);

impl FileStoreError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
pub trait FileStore {
    fn path_for(
        &self,
        directory: &Directory,
        name: &str,
        extension: FileExtension,
    ) -> Result<PathBuf, FileStoreError>;
    fn exists(&self, path: &Path) -> bool;
    fn delete(&self, path: &Path) -> Result<(), FileStoreError>;
    fn write_new(&self, path: &Path, bytes: &[u8]) -> Result<(), FileStoreError>;
    fn read_all(&self, path: &Path) -> Result<Vec<u8>, FileStoreError>;
    fn sanitize_name(&self, raw: &str) -> String;
}
