use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::config::ServiceConfig;
use crate::image_pipeline::{Result, StandardDicomToPngPipeline};
use crate::server::handlers::ImagesResponse;

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<StandardDicomToPngPipeline>,
    brain_image_path: Arc<PathBuf>,
    annotation_image_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            pipeline: Arc::new(StandardDicomToPngPipeline::new(config.conversion.clone())),
            brain_image_path: Arc::new(config.brain_image_path.clone()),
            annotation_image_path: Arc::new(config.annotation_image_path.clone()),
        }
    }

    pub fn brain_image_path(&self) -> &Path {
        &self.brain_image_path
    }

    pub fn annotation_image_path(&self) -> &Path {
        &self.annotation_image_path
    }

    fn convert(&self, path: &Path) -> Result<String> {
        let encoded = self.pipeline.convert_file_to_base64(path)?;
        info!("Converted DICOM file to PNG: {}", path.display());
        Ok(encoded)
    }

    /// Converts the brain then the annotation image. Blocking; either failure
    /// fails the pair.
    pub fn convert_pair(&self) -> Result<ImagesResponse> {
        Ok(ImagesResponse {
            brain_image: self.convert(self.brain_image_path())?,
            annotation_image: self.convert(self.annotation_image_path())?,
        })
    }
}
