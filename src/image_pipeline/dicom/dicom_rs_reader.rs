//! DICOM reader implementation using the dicom-rs crates.
//!
//! Parses the file meta group and data set with `dicom::object`, then decodes the
//! pixel data element with `dicom::pixeldata`. Stored values are returned as-is,
//! without applying the modality rescale, so the grid holds exactly what the
//! pixel data element encodes.

use tracing::debug;

use dicom::object::from_reader;
use dicom::pixeldata::{ConvertOptions, ModalityLutOption, PixelDecoder};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::dicom::reader::DicomImageReader;
use crate::image_pipeline::dicom::types::PixelGrid;

/// DICOM reader backed by the dicom-rs object and pixel data decoders.
///
/// Any transfer syntax dicom-rs can decode is supported. Colour sources are
/// reduced to luminance so the grid always has one sample per pixel.
pub struct DicomRsReader;

/// Length of the file preamble preceding the magic code.
const PREAMBLE_LEN: usize = 128;

const MAGIC_CODE: &[u8; 4] = b"DICM";

/// ITU-R BT.601 luma weights.
const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Skips the 128-byte preamble when present. Streams starting with the magic
/// code are accepted as well.
fn strip_preamble(data: &[u8]) -> Result<&[u8]> {
    let magic_end = PREAMBLE_LEN + MAGIC_CODE.len();
    if data.len() >= magic_end && &data[PREAMBLE_LEN..magic_end] == MAGIC_CODE {
        return Ok(&data[PREAMBLE_LEN..]);
    }
    if data.starts_with(MAGIC_CODE) {
        return Ok(data);
    }
    Err(ConversionError::DecodeError(
        "missing DICM magic code, not a DICOM file".to_string(),
    ))
}

impl DicomImageReader for DicomRsReader {
    fn read_dicom(&self, data: &[u8], frame: u32) -> Result<PixelGrid> {
        debug!("Decoding DICOM object, {} bytes", data.len());

        let stream = strip_preamble(data)?;
        let object = from_reader(stream)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let decoded = object
            .decode_pixel_data()
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let frame_count = decoded.number_of_frames();
        if frame >= frame_count {
            return Err(ConversionError::DecodeError(format!(
                "frame {} requested but pixel data holds {} frame(s)",
                frame, frame_count
            )));
        }

        // Only the requested frame is converted, as [rows, columns, samples]
        let options = ConvertOptions::new().with_modality_lut(ModalityLutOption::None);
        let array = decoded
            .to_ndarray_frame_with_options::<f32>(frame, &options)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let (height, width, samples) = match array.shape() {
            &[rows, columns, samples] => (rows, columns, samples),
            other => {
                return Err(ConversionError::DecodeError(format!(
                    "unexpected pixel array shape {:?}",
                    other
                )));
            }
        };
        let bits_stored = decoded.bits_stored();

        debug!(
            "Decoded frame {}/{}: {}x{}, {} sample(s) per pixel, {} bits stored",
            frame + 1,
            frame_count,
            width,
            height,
            samples,
            bits_stored
        );

        let frame_samples = array.iter().copied();
        let data: Vec<f32> = match samples {
            1 => frame_samples.collect(),
            3 => frame_samples
                .collect::<Vec<f32>>()
                .chunks_exact(3)
                .map(|pixel| {
                    pixel
                        .iter()
                        .zip(LUMA_WEIGHTS)
                        .map(|(&v, w)| v * w)
                        .sum::<f32>()
                })
                .collect(),
            n => {
                return Err(ConversionError::DecodeError(format!(
                    "unsupported samples per pixel: {}",
                    n
                )));
            }
        };

        Ok(PixelGrid {
            width,
            height,
            data,
            frame_count,
            bits_stored,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::test_fixtures::DicomFixture;

    #[test]
    fn test_reads_monochrome_grid() {
        let bytes = DicomFixture::monochrome(3, 2, vec![0, 10, 20, 30, 40, 50]).to_bytes();

        let grid = DicomRsReader.read_dicom(&bytes, 0).unwrap();

        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 2);
        assert_eq!(grid.data, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(grid.frame_count, 1);
        assert_eq!(grid.bits_stored, 16);
    }

    #[test]
    fn test_ignores_rescale() {
        let bytes = DicomFixture::monochrome(2, 1, vec![5, 9])
            .with_rescale(2.0, -1024.0)
            .to_bytes();

        let grid = DicomRsReader.read_dicom(&bytes, 0).unwrap();

        assert_eq!(grid.data, vec![5.0, 9.0]);
    }

    #[test]
    fn test_selects_frame() {
        let bytes = DicomFixture::monochrome(2, 2, vec![1, 2, 3, 4, 50, 60, 70, 80])
            .with_frames(2)
            .to_bytes();

        let grid = DicomRsReader.read_dicom(&bytes, 1).unwrap();

        assert_eq!(grid.frame_count, 2);
        assert_eq!(grid.data, vec![50.0, 60.0, 70.0, 80.0]);
    }

    #[test]
    fn test_first_frame_holds_single_frame_samples() {
        let bytes = DicomFixture::monochrome(2, 1, vec![7, 8, 1, 2, 3, 4])
            .with_frames(3)
            .to_bytes();

        let grid = DicomRsReader.read_dicom(&bytes, 0).unwrap();

        assert_eq!(grid.frame_count, 3);
        assert_eq!((grid.width, grid.height), (2, 1));
        assert_eq!(grid.data, vec![7.0, 8.0]);
    }

    #[test]
    fn test_frame_out_of_range() {
        let bytes = DicomFixture::monochrome(2, 2, vec![1, 2, 3, 4]).to_bytes();

        let result = DicomRsReader.read_dicom(&bytes, 1);

        assert!(matches!(result, Err(ConversionError::DecodeError(_))));
    }

    #[test]
    fn test_rgb_reduced_to_luminance() {
        let bytes = DicomFixture::rgb(2, 1, vec![255, 255, 255, 0, 0, 0]).to_bytes();

        let grid = DicomRsReader.read_dicom(&bytes, 0).unwrap();

        assert_eq!(grid.width, 2);
        assert_eq!(grid.height, 1);
        assert!((grid.data[0] - 255.0).abs() < 0.01);
        assert_eq!(grid.data[1], 0.0);
    }

    #[test]
    fn test_accepts_stream_without_preamble() {
        let bytes = DicomFixture::monochrome(1, 1, vec![7]).to_bytes();

        let grid = DicomRsReader.read_dicom(&bytes[PREAMBLE_LEN..], 0).unwrap();

        assert_eq!(grid.data, vec![7.0]);
    }

    #[test]
    fn test_rejects_non_dicom_bytes() {
        let result = DicomRsReader.read_dicom(b"definitely not a dicom file", 0);

        assert!(matches!(result, Err(ConversionError::DecodeError(_))));
    }

    #[test]
    fn test_rejects_truncated_object() {
        let bytes = DicomFixture::monochrome(4, 4, vec![100; 16]).to_bytes();

        let result = DicomRsReader.read_dicom(&bytes[..PREAMBLE_LEN + 40], 0);

        assert!(matches!(result, Err(ConversionError::DecodeError(_))));
    }

    #[test]
    fn test_missing_pixel_data() {
        let bytes = DicomFixture::monochrome(2, 2, vec![1, 2, 3, 4])
            .without_pixel_data()
            .to_bytes();

        let result = DicomRsReader.read_dicom(&bytes, 0);

        assert!(matches!(result, Err(ConversionError::DecodeError(_))));
    }
}
