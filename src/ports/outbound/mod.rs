pub mod file_store;
pub mod image_codec;
pub mod reporter;
