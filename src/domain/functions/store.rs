use crate::domain::app::{ImageDiskStore, StoredImage};
use crate::domain::directory::Directory;
use crate::domain::error::StoreError;
use crate::domain::file_extension::FileExtension;
use crate::ports::outbound::file_store::FileStore;
use crate::ports::outbound::image_codec::{CodecError, Encoding, Image, ImageCodec};
use crate::ports::outbound::reporter::Reporter;

const MAX_QUALITY: f32 = 1.0;

impl<IC, FS, R> ImageDiskStore<IC, FS, R>
where
    IC: ImageCodec,
    FS: FileStore,
    R: Reporter,
{
    /// Writes `image` to `directory` as `name`, replacing whatever was stored
    /// under that name before. PNG is preferred, JPEG is the fallback.
    pub fn store(
        &self,
        image: &Image,
        directory: &Directory,
        name: &str,
    ) -> Result<StoredImage, StoreError> {
        let (bytes, encoding) = match self.encode(image) {
            Ok(encoded) => encoded,
            Err(why) => return Err(self.fail(StoreError::Encoding(why))),
        };
        let extension = FileExtension::from(encoding);

        let Some(file_name) = self.file_name(name) else {
            return Err(StoreError::InvalidName(name.to_string()));
        };

        let path_error = |source| StoreError::Path {
            directory: directory.clone(),
            source,
        };
        let (path, existing) = match self
            .file_store
            .path_for(directory, &file_name, extension)
            .and_then(|path| Ok((path, self.existing_paths(directory, &file_name)?)))
        {
            Ok(paths) => paths,
            Err(source) => return Err(self.fail(path_error(source))),
        };

        for old in &existing {
            self.reporter.warn(&format!(
                "File with name \"{name}\" already exists in {directory}. Removing and replacing with contents of new data..."
            ));
            if let Err(source) = self.file_store.delete(old) {
                return Err(self.fail(StoreError::Delete {
                    path: old.clone(),
                    source,
                }));
            }
        }

        if let Err(source) = self.file_store.write_new(&path, &bytes) {
            return Err(self.fail(StoreError::Write { path, source }));
        }

        Ok(StoredImage {
            path,
            extension,
            replaced: !existing.is_empty(),
        })
    }

    fn fail(&self, error: StoreError) -> StoreError {
        self.report(&error);
        error
    }

    fn encode(&self, image: &Image) -> Result<(Vec<u8>, Encoding), CodecError> {
        let lossless = match self.codec.encode(image, Encoding::Lossless) {
            Ok(bytes) => return Ok((bytes, Encoding::Lossless)),
            Err(why) => why,
        };

        let lossy = Encoding::Lossy {
            quality: MAX_QUALITY,
        };
        match self.codec.encode(image, lossy) {
            Ok(bytes) => Ok((bytes, lossy)),
            Err(why) => Err(CodecError::new(format!("{lossless}; {why}"))),
        }
    }
}
