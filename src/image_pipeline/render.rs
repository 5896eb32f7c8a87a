//! Grayscale rendering module
//!
//! Maps decoded pixel grids onto grayscale rasters. Each render call owns its
//! own [`RenderCanvas`], released when the call returns.

mod renderer;
mod canvas;
mod grayscale_renderer;
pub mod types;

pub use renderer::RasterRenderer;
pub use canvas::RenderCanvas;
pub use grayscale_renderer::GrayscaleRenderer;
pub use types::{GrayscaleRaster, RasterSamples};
