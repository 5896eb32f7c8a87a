//! Rendered raster types

/// Quantized grayscale samples, row-major
#[derive(Debug, Clone, PartialEq)]
pub enum RasterSamples {
    Eight(Vec<u8>),
    Sixteen(Vec<u16>),
}

/// Grayscale bitmap with one output pixel per source sample and no margins
#[derive(Debug, Clone)]
pub struct GrayscaleRaster {
    pub width: usize,
    pub height: usize,
    pub samples: RasterSamples,
}
