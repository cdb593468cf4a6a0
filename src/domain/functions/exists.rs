use crate::domain::app::ImageDiskStore;
use crate::domain::directory::Directory;
use crate::ports::outbound::file_store::FileStore;
use crate::ports::outbound::image_codec::ImageCodec;
use crate::ports::outbound::reporter::Reporter;

impl<IC, FS, R> ImageDiskStore<IC, FS, R>
where
    IC: ImageCodec,
    FS: FileStore,
    R: Reporter,
{
    pub fn exists(&self, name: &str, directory: &Directory) -> bool {
        let Some(file_name) = self.file_name(name) else {
            return false;
        };

        match self.existing_paths(directory, &file_name) {
            Ok(existing) => !existing.is_empty(),
            Err(why) => {
                self.report(&why);
                false
            }
        }
    }
}
