pub mod app;
pub mod directory;
pub mod error;
pub mod file_extension;
pub mod functions;
pub mod utils;
