use crate::domain::app::ImageDiskStore;
use crate::domain::directory::Directory;
use crate::domain::error::RetrieveError;
use crate::ports::outbound::file_store::FileStore;
use crate::ports::outbound::image_codec::{Image, ImageCodec};
use crate::ports::outbound::reporter::Reporter;

impl<IC, FS, R> ImageDiskStore<IC, FS, R>
where
    IC: ImageCodec,
    FS: FileStore,
    R: Reporter,
{
    /// Loads the image stored as `name`, trying `.png`, then `.jpg`, then a
    /// file with no suffix at all.
    pub fn retrieve(&self, name: &str, directory: &Directory) -> Result<Image, RetrieveError> {
        let Some(file_name) = self.file_name(name) else {
            return Err(RetrieveError::InvalidName(name.to_string()));
        };

        let existing = match self.existing_paths(directory, &file_name) {
            Ok(existing) => existing,
            Err(source) => {
                return Err(self.fail_retrieve(RetrieveError::Path {
                    directory: directory.clone(),
                    source,
                }))
            }
        };

        let Some(path) = existing.into_iter().next() else {
            return Err(self.fail_retrieve(RetrieveError::NotFound {
                name: name.to_string(),
                directory: directory.clone(),
            }));
        };

        let bytes = match self.file_store.read_all(&path) {
            Ok(bytes) if bytes.is_empty() => {
                return Err(self.fail_retrieve(RetrieveError::Empty { path }))
            }
            Ok(bytes) => bytes,
            Err(source) => return Err(self.fail_retrieve(RetrieveError::Read { path, source })),
        };

        self.codec
            .decode(&bytes)
            .map_err(|source| self.fail_retrieve(RetrieveError::Decode { path, source }))
    }

    fn fail_retrieve(&self, error: RetrieveError) -> RetrieveError {
        self.report(&error);
        error
    }
}
