//! PNG writing module
//!
//! Encodes grayscale rasters as PNG byte streams, entirely in memory.

mod writer;
mod standard_png_writer;

pub use writer::PngWriter;
pub use standard_png_writer::StandardPngWriter;
