//! DICOM reading module
//!
//! Decodes DICOM byte streams into in-memory pixel grids.

mod reader;
mod dicom_rs_reader;
pub mod types;

pub use reader::DicomImageReader;
pub use dicom_rs_reader::DicomRsReader;
pub use types::PixelGrid;
