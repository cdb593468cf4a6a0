use crate::domain::directory::Directory;
use argh::FromArgs;
use std::path::PathBuf;

#[derive(FromArgs, Debug, PartialEq)]
/// Store and retrieve images on local disk.
pub struct Args {
    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs, Debug, PartialEq)]
#[argh(subcommand)]
pub enum Command {
    Store(StoreArgs),
    Retrieve(RetrieveArgs),
    Exists(ExistsArgs),
    Remove(RemoveArgs),
}

#[derive(FromArgs, Debug, PartialEq)]
/// Store an image file under a name, replacing any image already stored with that name.
#[argh(subcommand, name = "store")]
pub struct StoreArgs {
    /// image file to read
    #[argh(positional)]
    pub source: PathBuf,
    /// name to store the image as
    #[argh(positional)]
    pub name: String,
    /// documents, caches, application-support, temporary or shared:<group>
    #[argh(option, short = 'd', default = "Directory::Documents")]
    pub directory: Directory,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Retrieve a stored image and write it out as PNG.
#[argh(subcommand, name = "retrieve")]
pub struct RetrieveArgs {
    /// name the image was stored as
    #[argh(positional)]
    pub name: String,
    /// file to write
    #[argh(positional)]
    pub output: PathBuf,
    /// documents, caches, application-support, temporary or shared:<group>
    #[argh(option, short = 'd', default = "Directory::Documents")]
    pub directory: Directory,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Print whether an image is stored under a name.
#[argh(subcommand, name = "exists")]
pub struct ExistsArgs {
    /// name to look for
    #[argh(positional)]
    pub name: String,
    /// documents, caches, application-support, temporary or shared:<group>
    #[argh(option, short = 'd', default = "Directory::Documents")]
    pub directory: Directory,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Remove every file stored under a name.
#[argh(subcommand, name = "remove")]
pub struct RemoveArgs {
    /// name to remove
    #[argh(positional)]
    pub name: String,
    /// documents, caches, application-support, temporary or shared:<group>
    #[argh(option, short = 'd', default = "Directory::Documents")]
    pub directory: Directory,
}
