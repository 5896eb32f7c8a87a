//! DICOM to PNG conversion configuration types

/// Sample depth of the rendered grayscale PNG
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrayDepth {
    /// 8 bits per sample (default, matches typical screen rendering)
    Eight,
    /// 16 bits per sample (keeps more of the source intensity resolution)
    Sixteen,
}

impl GrayDepth {
    /// Brightest representable output sample
    pub fn max_value(self) -> f32 {
        match self {
            GrayDepth::Eight => u8::MAX as f32,
            GrayDepth::Sixteen => u16::MAX as f32,
        }
    }
}

/// Default upper bound on either image side
pub const DEFAULT_MAX_DIMENSION: usize = 16384;

/// Configuration for DICOM to PNG conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Whether to validate image dimensions before rendering
    pub validate_dimensions: bool,
    /// Largest accepted width or height, `None` for no limit
    pub max_dimension: Option<usize>,
    /// Frame to render from multi-frame sources
    pub frame: u32,
    /// Output sample depth
    pub output_depth: GrayDepth,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            max_dimension: Some(DEFAULT_MAX_DIMENSION),
            frame: 0,
            output_depth: GrayDepth::Eight,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    frame: Option<u32>,
    output_depth: Option<GrayDepth>,
}

impl ConversionConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn frame(mut self, frame: u32) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn output_depth(mut self, depth: GrayDepth) -> Self {
        self.output_depth = Some(depth);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            frame: self.frame.unwrap_or(default.frame),
            output_depth: self.output_depth.unwrap_or(default.output_depth),
        }
    }
}
