//! Image processing pipeline module
//!
//! This module provides a structured approach to DICOM image conversion,
//! with separate modules for DICOM reading, grayscale rendering, PNG writing,
//! and conversion orchestration.

pub mod dicom;
pub mod render;
pub mod png;
pub mod conversions;
pub mod common;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use self::common::{
    ConversionConfig,
    ConversionConfigBuilder,
    ConversionError,
    GrayDepth,
    Result,
};

pub use self::dicom::{
    DicomImageReader,
    DicomRsReader,
    PixelGrid,
};

pub use self::render::{
    GrayscaleRaster,
    GrayscaleRenderer,
    RasterRenderer,
    RasterSamples,
    RenderCanvas,
};

pub use self::png::{
    PngWriter,
    StandardPngWriter,
};

pub use self::conversions::{
    DicomToPngPipeline,
    StandardDicomToPngPipeline,
};
