use crate::domain::directory::Directory;
use crate::domain::file_extension::FileExtension;
use crate::domain::utils;
use crate::ports::outbound::file_store::{FileStore, FileStoreError};
use std::env;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const DEFAULT_APP_NAME: &str = "image_disk";

/// File store over the local file system. With a root every directory is a
/// folder beneath it, otherwise the platform's standard folders are used.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: Option<PathBuf>,
    app_name: String,
}

impl LocalFileStore {
    pub fn create() -> Self {
        let root = env::var_os("IMAGE_DISK_ROOT").map(PathBuf::from);
        let app_name =
            env::var("IMAGE_DISK_APP_NAME").unwrap_or_else(|_| String::from(DEFAULT_APP_NAME));
        log::debug!("Using file store root {root:?} for app {app_name}");
        Self { root, app_name }
    }

    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: Some(root.as_ref().to_path_buf()),
            app_name: String::from(DEFAULT_APP_NAME),
        }
    }

    fn directory_path(&self, directory: &Directory) -> Result<PathBuf, FileStoreError> {
        if let Directory::SharedContainer { app_group } = directory {
            let group = utils::sanitise_name(app_group);
            if !utils::is_usable_name(&group) || group != *app_group {
                return Err(FileStoreError::new(format!(
                    "\"{app_group}\" is not a valid app group"
                )));
            }
        }

        if let Some(root) = &self.root {
            return Ok(match directory {
                Directory::Documents => root.join("documents"),
                Directory::Caches => root.join("caches"),
                Directory::ApplicationSupport => root.join("application_support"),
                Directory::Temporary => root.join("temporary"),
                Directory::SharedContainer { app_group } => root.join("shared").join(app_group),
            });
        }

        let path = match directory {
            Directory::Documents => dirs::document_dir(),
            Directory::Caches => dirs::cache_dir().map(|dir| dir.join(&self.app_name)),
            Directory::ApplicationSupport => dirs::data_dir().map(|dir| dir.join(&self.app_name)),
            Directory::Temporary => Some(env::temp_dir().join(&self.app_name)),
            Directory::SharedContainer { app_group } => {
                dirs::data_dir().map(|dir| dir.join("shared").join(app_group))
            }
        };

        path.ok_or_else(|| {
            FileStoreError::new(format!("No {directory} directory on this platform"))
        })
    }
}

impl FileStore for LocalFileStore {
    fn path_for(
        &self,
        directory: &Directory,
        name: &str,
        extension: FileExtension,
    ) -> Result<PathBuf, FileStoreError> {
        Ok(self.directory_path(directory)?.join(extension.file_name(name)))
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn delete(&self, path: &Path) -> Result<(), FileStoreError> {
        fs::remove_file(path).map_err(|why| {
            log::debug!("Error removing {path:?}: {why:?}");
            FileStoreError::new(why.to_string())
        })
    }

    fn write_new(&self, path: &Path, bytes: &[u8]) -> Result<(), FileStoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|why| {
                log::debug!("Error creating {parent:?}: {why:?}");
                FileStoreError::new(why.to_string())
            })?;
        }

        write_or_remove(path, |file| file.write_all(bytes))
    }

    fn read_all(&self, path: &Path) -> Result<Vec<u8>, FileStoreError> {
        fs::read(path).map_err(|why| {
            log::debug!("Error reading {path:?}: {why:?}");
            FileStoreError::new(why.to_string())
        })
    }

    fn sanitize_name(&self, raw: &str) -> String {
        utils::sanitise_name(raw)
    }
}

/// Creates `path` and hands it to `write`. A file left half written is removed.
fn write_or_remove<F>(path: &Path, write: F) -> Result<(), FileStoreError>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|why| {
            log::debug!("Error creating {path:?}: {why:?}");
            FileStoreError::new(why.to_string())
        })?;

    write(&mut file).map_err(|why| {
        log::debug!("Error writing {path:?}: {why:?}");
        drop(file);
        if let Err(cleanup) = fs::remove_file(path) {
            log::warn!("Could not remove partial file {path:?}: {cleanup:?}");
        }
        FileStoreError::new(why.to_string())
    })
}
