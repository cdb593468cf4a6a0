use thiserror::Error;

#[cfg(test)]
use mockall::automock;

pub type Image = image::DynamicImage;

/// The two byte formats an image can be written in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Encoding {
    Lossless,
    /// `quality` runs from 0.0 (smallest) to 1.0 (best).
    Lossy { quality: f32 },
}

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("Error in image codec: {0}")]
pub struct CodecError(String);

impl CodecError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

#[cfg_attr(test, automock)]
pub trait ImageCodec {
    fn encode(&self, image: &Image, encoding: Encoding) -> Result<Vec<u8>, CodecError>;
    fn decode(&self, bytes: &[u8]) -> Result<Image, CodecError>;
}
