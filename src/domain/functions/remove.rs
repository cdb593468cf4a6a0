use crate::domain::app::ImageDiskStore;
use crate::domain::directory::Directory;
use crate::domain::error::RemoveError;
use crate::ports::outbound::file_store::FileStore;
use crate::ports::outbound::image_codec::ImageCodec;
use crate::ports::outbound::reporter::Reporter;

impl<IC, FS, R> ImageDiskStore<IC, FS, R>
where
    IC: ImageCodec,
    FS: FileStore,
    R: Reporter,
{
    /// Deletes every file stored as `name`, whatever its suffix. Returns how
    /// many files went.
    pub fn remove(&self, name: &str, directory: &Directory) -> Result<usize, RemoveError> {
        let Some(file_name) = self.file_name(name) else {
            return Err(RemoveError::InvalidName(name.to_string()));
        };

        let existing = match self.existing_paths(directory, &file_name) {
            Ok(existing) if existing.is_empty() => {
                return Err(self.fail_remove(RemoveError::NotFound {
                    name: name.to_string(),
                    directory: directory.clone(),
                }))
            }
            Ok(existing) => existing,
            Err(source) => {
                return Err(self.fail_remove(RemoveError::Path {
                    directory: directory.clone(),
                    source,
                }))
            }
        };

        for path in &existing {
            if let Err(source) = self.file_store.delete(path) {
                return Err(self.fail_remove(RemoveError::Delete {
                    path: path.clone(),
                    source,
                }));
            }
        }

        Ok(existing.len())
    }

    fn fail_remove(&self, error: RemoveError) -> RemoveError {
        self.report(&error);
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::file_extension::FileExtension;
    use crate::domain::utils::sanitise_name;
    use crate::ports::outbound::file_store::{FileStoreError, MockFileStore};
    use crate::ports::outbound::image_codec::MockImageCodec;
    use crate::ports::outbound::reporter::MockReporter;
    use std::path::{Path, PathBuf};

    fn file_store_with(existing: &'static [&'static str]) -> MockFileStore {
        let mut file_store = MockFileStore::new();
        file_store
            .expect_sanitize_name()
            .returning(|raw| sanitise_name(raw));
        file_store
            .expect_path_for()
            .returning(|_, name, extension: FileExtension| {
                Ok(PathBuf::from("/disk").join(extension.file_name(name)))
            });
        file_store
            .expect_exists()
            .returning(move |path| existing.iter().any(|e| path == Path::new(e)));
        file_store
    }

    #[test]
    fn test_remove_every_encoding() {
        let mut file_store = file_store_with(&["/disk/photo.png", "/disk/photo.jpg"]);
        file_store.expect_delete().times(2).returning(|_| Ok(()));

        let disk = ImageDiskStore::new(MockImageCodec::new(), file_store, MockReporter::new());

        assert_eq!(disk.remove("photo", &Directory::Documents).unwrap(), 2);
    }

    #[test]
    fn test_remove_missing() {
        let mut file_store = file_store_with(&[]);
        file_store.expect_delete().never();

        let mut reporter = MockReporter::new();
        reporter.expect_error().times(1).return_const(());

        let disk = ImageDiskStore::new(MockImageCodec::new(), file_store, reporter);
        let result = disk.remove("photo", &Directory::Documents);

        assert!(matches!(result, Err(RemoveError::NotFound { .. })));
    }

    #[test]
    fn test_remove_delete_failure() {
        let mut file_store = file_store_with(&["/disk/photo.png"]);
        file_store
            .expect_delete()
            .times(1)
            .returning(|_| Err(FileStoreError::new(String::from("busy"))));

        let mut reporter = MockReporter::new();
        reporter
            .expect_error()
            .withf(|message: &str| message.contains("busy"))
            .times(1)
            .return_const(());

        let disk = ImageDiskStore::new(MockImageCodec::new(), file_store, reporter);
        let result = disk.remove("photo", &Directory::Documents);

        assert!(matches!(result, Err(RemoveError::Delete { .. })));
    }
}
