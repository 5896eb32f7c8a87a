use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    common::config::ConversionConfig,
    common::error::{ConversionError, Result},
    dicom::{DicomImageReader, DicomRsReader},
    png::{PngWriter, StandardPngWriter},
    render::{GrayscaleRenderer, RasterRenderer},
};

/// Pipeline assembled from the dicom-rs reader, linear grayscale renderer and
/// `image` PNG encoder.
pub type StandardDicomToPngPipeline =
    DicomToPngPipeline<DicomRsReader, GrayscaleRenderer, StandardPngWriter>;

/// Converts DICOM sources into grayscale PNGs.
///
/// Holds no per-call state: every conversion decodes, renders on a fresh
/// canvas and encodes independently, so one pipeline can serve concurrent
/// callers from behind an `Arc`.
pub struct DicomToPngPipeline<R: DicomImageReader, Rn: RasterRenderer, W: PngWriter> {
    reader: R,
    renderer: Rn,
    writer: W,
    config: ConversionConfig,
}

impl StandardDicomToPngPipeline {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: DicomRsReader,
            renderer: GrayscaleRenderer,
            writer: StandardPngWriter,
            config,
        }
    }
}

impl<R: DicomImageReader, Rn: RasterRenderer, W: PngWriter> DicomToPngPipeline<R, Rn, W> {
    pub fn with_custom(reader: R, renderer: Rn, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            renderer,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(ConversionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Converts DICOM bytes into PNG bytes.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8]) -> Result<Vec<u8>> {
        info!("Starting DICOM to PNG conversion");

        let grid = {
            let _span = tracing::info_span!("decode_dicom", frame = self.config.frame).entered();
            self.reader.read_dicom(input_data, self.config.frame)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = grid.width,
                height = grid.height
            ).entered();
            self.validate_dimensions(grid.width, grid.height)?;
        }

        let raster = {
            let _span = tracing::info_span!("render_grayscale").entered();
            self.renderer.render(&grid, self.config.output_depth)?
        };

        let mut png = Vec::new();
        {
            let _span = tracing::info_span!("encode_png").entered();
            self.writer.write_png(&raster, &mut png)?;
        }

        info!(
            width = grid.width,
            height = grid.height,
            bits_stored = grid.bits_stored,
            png_size = png.len(),
            "Conversion complete"
        );
        Ok(png)
    }

    /// Reads the DICOM file at `input_path` and converts it into PNG bytes.
    ///
    /// A missing or unreadable file is reported as a decode failure, the same
    /// as a corrupt one.
    #[instrument(skip(self, input_path), fields(input = %input_path.as_ref().display()))]
    pub fn convert_file<P: AsRef<Path>>(&self, input_path: P) -> Result<Vec<u8>> {
        let input_path = input_path.as_ref();

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::DecodeError(format!("{}: {}", input_path.display(), e))
            })?
        };

        self.convert(&input_data)
    }

    /// Converts the DICOM file at `input_path` into a base64 encoded PNG
    /// (standard alphabet, padded, no data URI prefix).
    pub fn convert_file_to_base64<P: AsRef<Path>>(&self, input_path: P) -> Result<String> {
        let png = self.convert_file(input_path)?;

        let _span = tracing::info_span!("encode_base64", png_size = png.len()).entered();
        Ok(STANDARD.encode(png))
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
