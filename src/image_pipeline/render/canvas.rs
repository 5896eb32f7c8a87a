//! Per-call rendering surface.

use tracing::trace;

use crate::image_pipeline::common::config::GrayDepth;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::render::types::{GrayscaleRaster, RasterSamples};

/// Normalized intensity plane a single render call paints into.
///
/// Values are in `0.0..=1.0`. A canvas is never shared: it is created by the
/// renderer for one grid and its buffer is freed when it goes out of scope,
/// on success and error paths alike.
pub struct RenderCanvas {
    width: usize,
    height: usize,
    plane: Vec<f32>,
}

impl RenderCanvas {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(ConversionError::InvalidDimensions(width, height))?;
        trace!(width, height, "Allocated render canvas");
        Ok(Self {
            width,
            height,
            plane: vec![0.0; len],
        })
    }

    /// Paints the plane from row-major normalized values. Values outside
    /// `0.0..=1.0` are clamped, NaN paints black.
    pub fn paint<I>(&mut self, values: I) -> Result<()>
    where
        I: ExactSizeIterator<Item = f32>,
    {
        if values.len() != self.plane.len() {
            return Err(ConversionError::InvalidDimensions(self.width, self.height));
        }
        for (dst, v) in self.plane.iter_mut().zip(values) {
            *dst = if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        }
        Ok(())
    }

    /// Quantizes the plane into `depth` levels and releases the canvas.
    ///
    /// A normalized value `v` lands in bin `floor(v * levels)`, with 1.0
    /// folded into the top bin, so 0.0 maps to black and 1.0 to white.
    pub fn rasterize(mut self, depth: GrayDepth) -> GrayscaleRaster {
        let max = depth.max_value();
        let levels = max + 1.0;
        let plane = std::mem::take(&mut self.plane);
        let quantize = |v: f32| (v * levels).floor().min(max);

        let samples = match depth {
            GrayDepth::Eight => {
                RasterSamples::Eight(plane.into_iter().map(|v| quantize(v) as u8).collect())
            }
            GrayDepth::Sixteen => {
                RasterSamples::Sixteen(plane.into_iter().map(|v| quantize(v) as u16).collect())
            }
        };

        GrayscaleRaster {
            width: self.width,
            height: self.height,
            samples,
        }
    }
}

impl Drop for RenderCanvas {
    fn drop(&mut self) {
        trace!(width = self.width, height = self.height, "Released render canvas");
    }
}
