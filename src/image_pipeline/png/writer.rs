use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::render::types::GrayscaleRaster;

pub trait PngWriter {
    fn write_png(&self, raster: &GrayscaleRaster, output: &mut dyn Write) -> Result<()>;
}
