use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::dicom::types::PixelGrid;

pub trait DicomImageReader {
    /// Decodes `frame` of the pixel data held in `data` into a single channel grid.
    fn read_dicom(&self, data: &[u8], frame: u32) -> Result<PixelGrid>;
}
