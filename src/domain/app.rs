use crate::domain::directory::Directory;
use crate::domain::file_extension::FileExtension;
use crate::domain::utils;
use crate::ports::outbound::file_store::{FileStore, FileStoreError};
use crate::ports::outbound::image_codec::ImageCodec;
use crate::ports::outbound::reporter::Reporter;
use std::error::Error;
use std::path::PathBuf;

pub struct ImageDiskStore<IC, FS, R> {
    pub codec: IC,
    pub file_store: FS,
    pub reporter: R,
}

/// Where `store` put an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub path: PathBuf,
    pub extension: FileExtension,
    /// A previous image under the same name was removed first.
    pub replaced: bool,
}

impl<IC, FS, R> ImageDiskStore<IC, FS, R>
where
    IC: ImageCodec,
    FS: FileStore,
    R: Reporter,
{
    pub fn new(codec: IC, file_store: FS, reporter: R) -> Self {
        Self {
            codec,
            file_store,
            reporter,
        }
    }

    /// Sanitised form of `name`, or `None` if nothing usable is left.
    pub(crate) fn file_name(&self, name: &str) -> Option<String> {
        let sanitised = self.file_store.sanitize_name(name);
        if utils::is_usable_name(&sanitised) {
            Some(sanitised)
        } else {
            self.reporter
                .error(&format!("Name \"{name}\" cannot be used as a file name"));
            None
        }
    }

    pub(crate) fn report<E: Error>(&self, error: &E) {
        let message = match error.source() {
            Some(source) => format!("{error}: {source}"),
            None => error.to_string(),
        };
        self.reporter.error(&message);
    }

    /// Every file currently on disk for `file_name`, in lookup order.
    pub(crate) fn existing_paths(
        &self,
        directory: &Directory,
        file_name: &str,
    ) -> Result<Vec<PathBuf>, FileStoreError> {
        let mut found = Vec::new();
        for extension in FileExtension::LOOKUP_ORDER {
            let path = self.file_store.path_for(directory, file_name, extension)?;
            if self.file_store.exists(&path) {
                found.push(path);
            }
        }
        Ok(found)
    }
}
