use tracing::debug;

use crate::image_pipeline::common::config::GrayDepth;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::dicom::types::PixelGrid;
use crate::image_pipeline::render::canvas::RenderCanvas;
use crate::image_pipeline::render::renderer::RasterRenderer;
use crate::image_pipeline::render::types::GrayscaleRaster;

/// Linear min/max grayscale renderer.
///
/// The smallest sample of the grid renders black and the largest renders
/// white, with no window/level applied. Output is exactly `width x height`:
/// nothing is drawn around the image.
pub struct GrayscaleRenderer;

impl RasterRenderer for GrayscaleRenderer {
    fn render(&self, grid: &PixelGrid, depth: GrayDepth) -> Result<GrayscaleRaster> {
        let mut canvas = RenderCanvas::new(grid.width, grid.height)?;

        // A flat grid has no range to stretch; it renders as the bottom of the scale.
        let (min, range) = match grid.intensity_range() {
            Some((min, max)) if max > min => (min, max - min),
            _ => (0.0, 0.0),
        };
        debug!(min, range, ?depth, "Rendering {}x{} grid", grid.width, grid.height);

        if range > 0.0 {
            canvas.paint(grid.data.iter().map(|&v| (v - min) / range))?;
        } else {
            canvas.paint(grid.data.iter().map(|_| 0.0))?;
        }

        Ok(canvas.rasterize(depth))
    }
}
