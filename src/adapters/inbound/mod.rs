pub mod cli;

use crate::adapters::inbound::cli::Cli;
use crate::domain::app::ImageDiskStore;
use crate::ports::inbound::client::Client;
use crate::ports::outbound::file_store::FileStore;
use crate::ports::outbound::image_codec::ImageCodec;
use crate::ports::outbound::reporter::Reporter;

pub fn create_client<IC, FS, R>(disk: ImageDiskStore<IC, FS, R>) -> impl Client
where
    IC: ImageCodec,
    FS: FileStore,
    R: Reporter,
{
    Cli::new(disk, argh::from_env())
}
