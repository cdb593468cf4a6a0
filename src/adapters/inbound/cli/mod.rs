pub mod args;

use crate::adapters::inbound::cli::args::{Args, Command, RetrieveArgs, StoreArgs};
use crate::domain::app::ImageDiskStore;
use crate::ports::inbound::client::Client;
use crate::ports::outbound::file_store::FileStore;
use crate::ports::outbound::image_codec::{Encoding, ImageCodec};
use crate::ports::outbound::reporter::Reporter;
use std::fs;
use std::process::ExitCode;

pub struct Cli<IC, FS, R> {
    disk: ImageDiskStore<IC, FS, R>,
    args: Args,
}

impl<IC, FS, R> Cli<IC, FS, R>
where
    IC: ImageCodec,
    FS: FileStore,
    R: Reporter,
{
    pub fn new(disk: ImageDiskStore<IC, FS, R>, args: Args) -> Self {
        Self { disk, args }
    }

    fn store(&self, args: &StoreArgs) -> bool {
        let image = match fs::read(&args.source)
            .map_err(|why| why.to_string())
            .and_then(|bytes| self.disk.codec.decode(&bytes).map_err(|why| why.to_string()))
        {
            Ok(image) => image,
            Err(why) => {
                log::error!("Could not load {:?}: {why}", args.source);
                return false;
            }
        };

        match self.disk.store(&image, &args.directory, &args.name) {
            Ok(stored) => {
                println!("{}", stored.path.display());
                true
            }
            Err(_) => false,
        }
    }

    fn retrieve(&self, args: &RetrieveArgs) -> bool {
        let Ok(image) = self.disk.retrieve(&args.name, &args.directory) else {
            return false;
        };

        let bytes = match self.disk.codec.encode(&image, Encoding::Lossless) {
            Ok(bytes) => bytes,
            Err(why) => {
                log::error!("Could not encode retrieved image: {why}");
                return false;
            }
        };

        if let Err(why) = fs::write(&args.output, bytes) {
            log::error!("Could not write {:?}: {why:?}", args.output);
            return false;
        }
        true
    }
}

impl<IC, FS, R> Client for Cli<IC, FS, R>
where
    IC: ImageCodec,
    FS: FileStore,
    R: Reporter,
{
    fn run(&mut self) -> ExitCode {
        let succeeded = match &self.args.command {
            Command::Store(args) => self.store(args),
            Command::Retrieve(args) => self.retrieve(args),
            Command::Exists(args) => {
                println!("{}", self.disk.exists(&args.name, &args.directory));
                true
            }
            Command::Remove(args) => match self.disk.remove(&args.name, &args.directory) {
                Ok(removed) => {
                    log::info!("Removed {removed} file(s) for \"{}\"", args.name);
                    true
                }
                Err(_) => false,
            },
        };

        if succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::file_store::LocalFileStore;
    use crate::adapters::outbound::image_codec::init_image_codec;
    use crate::adapters::outbound::reporter::init_reporter;
    use crate::ports::outbound::image_codec::Image;
    use argh::FromArgs;
    use tempfile::TempDir;

    fn run(root: &TempDir, args: &[&str]) -> ExitCode {
        let disk = ImageDiskStore::new(
            init_image_codec(),
            LocalFileStore::with_root(root.path()),
            init_reporter(),
        );
        let args = Args::from_args(&["image_disk"], args).unwrap();
        Cli::new(disk, args).run()
    }

    #[test]
    fn test_store_then_retrieve() {
        let root = TempDir::new().unwrap();
        let source = root.path().join("source.png");
        let output = root.path().join("output.png");
        Image::new_rgb8(5, 5).save(&source).unwrap();

        let source = source.to_str().unwrap();
        let output = output.to_str().unwrap();

        assert_eq!(run(&root, &["store", source, "Holiday Snap"]), ExitCode::SUCCESS);
        assert!(root.path().join("documents/Holiday_Snap.png").is_file());

        assert_eq!(
            run(&root, &["retrieve", "Holiday Snap", output]),
            ExitCode::SUCCESS
        );
        let retrieved = image::open(output).unwrap();
        assert_eq!((retrieved.width(), retrieved.height()), (5, 5));
    }

    #[test]
    fn test_store_missing_source() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("missing.png");

        assert_eq!(
            run(&root, &["store", missing.to_str().unwrap(), "x"]),
            ExitCode::FAILURE
        );
    }

    #[test]
    fn test_retrieve_missing() {
        let root = TempDir::new().unwrap();
        let output = root.path().join("out.png");

        assert_eq!(
            run(&root, &["retrieve", "nothing", output.to_str().unwrap(), "-d", "caches"]),
            ExitCode::FAILURE
        );
        assert!(!output.exists());
    }

    #[test]
    fn test_remove_missing() {
        let root = TempDir::new().unwrap();
        assert_eq!(run(&root, &["remove", "nothing"]), ExitCode::FAILURE);
    }

    #[test]
    fn test_exists() {
        let root = TempDir::new().unwrap();
        assert_eq!(run(&root, &["exists", "nothing"]), ExitCode::SUCCESS);
    }
}
