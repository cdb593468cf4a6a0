use crate::domain::directory::Directory;
use crate::ports::outbound::file_store::FileStoreError;
use crate::ports::outbound::image_codec::CodecError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not convert image to PNG or JPEG")]
    Encoding(#[source] CodecError),
    #[error("Name \"{0}\" cannot be used as a file name")]
    InvalidName(String),
    #[error("Could not build a path in {directory}")]
    Path {
        directory: Directory,
        #[source]
        source: FileStoreError,
    },
    #[error("Could not remove previous image at {path:?}")]
    Delete {
        path: PathBuf,
        #[source]
        source: FileStoreError,
    },
    #[error("Could not write image to {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: FileStoreError,
    },
}

#[derive(Debug, Error)]
pub enum RetrieveError {
    #[error("Name \"{0}\" cannot be used as a file name")]
    InvalidName(String),
    #[error("Could not build a path in {directory}")]
    Path {
        directory: Directory,
        #[source]
        source: FileStoreError,
    },
    #[error("Image with name \"{name}\" does not exist in {directory}")]
    NotFound { name: String, directory: Directory },
    #[error("Could not read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: FileStoreError,
    },
    #[error("No data at {path:?}")]
    Empty { path: PathBuf },
    #[error("Could not convert data at {path:?} to an image")]
    Decode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },
}

#[derive(Debug, Error)]
pub enum RemoveError {
    #[error("Name \"{0}\" cannot be used as a file name")]
    InvalidName(String),
    #[error("Could not build a path in {directory}")]
    Path {
        directory: Directory,
        #[source]
        source: FileStoreError,
    },
    #[error("Image with name \"{name}\" does not exist in {directory}")]
    NotFound { name: String, directory: Directory },
    #[error("Could not remove {path:?}")]
    Delete {
        path: PathBuf,
        #[source]
        source: FileStoreError,
    },
}
