//! DICOM pixel data types

/// A single decoded frame of DICOM pixel data
#[derive(Debug, Clone)]
pub struct PixelGrid {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Stored intensity values, row-major, one sample per pixel
    pub data: Vec<f32>,
    /// Number of frames in the source pixel data
    pub frame_count: u32,
    /// Bits stored per sample in the source
    pub bits_stored: u16,
}

impl PixelGrid {
    /// Smallest and largest finite sample, `None` when there are none.
    pub fn intensity_range(&self) -> Option<(f32, f32)> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })
    }
}
