use crate::ports::outbound::image_codec::{CodecError, Encoding, Image, ImageCodec};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;

const MIN_JPEG_QUALITY: u8 = 1;
const MAX_JPEG_QUALITY: u8 = 100;

pub struct ImageRs;

impl ImageRs {
    pub fn create() -> Self {
        Self
    }
}

impl ImageCodec for ImageRs {
    fn encode(&self, image: &Image, encoding: Encoding) -> Result<Vec<u8>, CodecError> {
        let mut bytes = Vec::new();
        let result = match encoding {
            Encoding::Lossless => image.write_with_encoder(PngEncoder::new(&mut bytes)),
            Encoding::Lossy { quality } => image.write_with_encoder(
                JpegEncoder::new_with_quality(&mut bytes, jpeg_quality(quality)),
            ),
        };

        match result {
            Ok(()) => Ok(bytes),
            Err(why) => {
                log::debug!("Could not encode {:?} image as {encoding:?}: {why}", image.color());
                Err(CodecError::new(why.to_string()))
            }
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<Image, CodecError> {
        image::load_from_memory(bytes).map_err(|why| CodecError::new(why.to_string()))
    }
}

fn jpeg_quality(quality: f32) -> u8 {
    let scaled = (quality.clamp(0.0, 1.0) * f32::from(MAX_JPEG_QUALITY)).round() as u8;
    scaled.max(MIN_JPEG_QUALITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, Rgba, RgbImage, RgbaImage};

    fn gradient() -> Image {
        Image::ImageRgba8(RgbaImage::from_fn(8, 8, |x, y| {
            Rgba([(x * 30) as u8, (y * 30) as u8, 128, 255 - (x as u8)])
        }))
    }

    #[test]
    fn test_jpeg_quality_mapping() {
        assert_eq!(jpeg_quality(1.0), 100);
        assert_eq!(jpeg_quality(0.5), 50);
        assert_eq!(jpeg_quality(0.0), 1);
        assert_eq!(jpeg_quality(7.0), 100);
        assert_eq!(jpeg_quality(-1.0), 1);
    }

    #[test]
    fn test_encode_lossless_is_png() {
        let bytes = ImageRs.encode(&gradient(), Encoding::Lossless).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_lossless_preserves_pixels() {
        let original = gradient();
        let bytes = ImageRs.encode(&original, Encoding::Lossless).unwrap();
        let decoded = ImageRs.decode(&bytes).unwrap();

        assert_eq!(decoded.to_rgba8(), original.to_rgba8());
        assert_eq!(ImageRs.encode(&decoded, Encoding::Lossless).unwrap(), bytes);
    }

    #[test]
    fn test_encode_lossy_is_jpeg() {
        let image = Image::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([200, 10, 10])));
        let bytes = ImageRs
            .encode(&image, Encoding::Lossy { quality: 1.0 })
            .unwrap();

        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
        let decoded = ImageRs.decode(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 4));
    }

    #[test]
    fn test_encode_float_image_as_png_fails() {
        let image = Image::new_rgba32f(2, 2);

        assert!(ImageRs.encode(&image, Encoding::Lossless).is_err());
    }

    #[test]
    fn test_decode_garbage() {
        assert!(ImageRs.decode(b"definitely not an image").is_err());
    }

    #[test]
    fn test_decode_empty() {
        assert!(ImageRs.decode(&[]).is_err());
    }
}
