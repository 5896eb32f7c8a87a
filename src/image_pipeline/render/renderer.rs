use crate::image_pipeline::common::config::GrayDepth;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::dicom::types::PixelGrid;
use crate::image_pipeline::render::types::GrayscaleRaster;

pub trait RasterRenderer {
    fn render(&self, grid: &PixelGrid, depth: GrayDepth) -> Result<GrayscaleRaster>;
}
