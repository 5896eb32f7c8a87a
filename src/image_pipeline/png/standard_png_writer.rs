use std::io::Write;

use image::codecs::png::PngEncoder;
use image::{ImageBuffer, Luma};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::png::writer::PngWriter;
use crate::image_pipeline::render::types::{GrayscaleRaster, RasterSamples};

/// PNG writer backed by the `image` crate encoder with its default
/// compression and filter settings.
pub struct StandardPngWriter;

fn to_u32(value: usize, raster: &GrayscaleRaster) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| ConversionError::InvalidDimensions(raster.width, raster.height))
}

impl PngWriter for StandardPngWriter {
    fn write_png(&self, raster: &GrayscaleRaster, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", raster.width, raster.height);

        let width = to_u32(raster.width, raster)?;
        let height = to_u32(raster.height, raster)?;
        let encoder = PngEncoder::new(output);

        let encoded = match &raster.samples {
            RasterSamples::Eight(samples) => {
                ImageBuffer::<Luma<u8>, &[u8]>::from_raw(width, height, samples.as_slice())
                    .ok_or(ConversionError::InvalidDimensions(raster.width, raster.height))?
                    .write_with_encoder(encoder)
            }
            RasterSamples::Sixteen(samples) => {
                ImageBuffer::<Luma<u16>, &[u16]>::from_raw(width, height, samples.as_slice())
                    .ok_or(ConversionError::InvalidDimensions(raster.width, raster.height))?
                    .write_with_encoder(encoder)
            }
        };
        encoded.map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
