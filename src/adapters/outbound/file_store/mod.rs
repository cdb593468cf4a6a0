mod local;

pub use crate::adapters::outbound::file_store::local::LocalFileStore;
use crate::ports::outbound::file_store::FileStore;

#[must_use]
pub fn init_file_store() -> impl FileStore {
    LocalFileStore::create()
}
