mod image_rs;

use crate::adapters::outbound::image_codec::image_rs::ImageRs;
use crate::ports::outbound::image_codec::ImageCodec;

#[must_use]
pub fn init_image_codec() -> impl ImageCodec {
    ImageRs::create()
}
