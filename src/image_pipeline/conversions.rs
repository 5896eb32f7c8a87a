//! Pipeline conversions module
//!
//! This module contains orchestration logic for DICOM to PNG conversion.

mod dicom_to_png;


pub use dicom_to_png::{DicomToPngPipeline, StandardDicomToPngPipeline};
