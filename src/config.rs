//! Service configuration
//!
//! Source paths and the listen address come from command line flags, falling
//! back to environment variables and then to the defaults below.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

use crate::image_pipeline::{ConversionConfig, GrayDepth};

pub const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(Ipv4Addr::LOCALHOST),
    5000,
);
pub const DEFAULT_BRAIN_IMAGE_PATH: &str = "assets/images/image.0100.dcm";
pub const DEFAULT_ANNOTATION_IMAGE_PATH: &str = "assets/annotations/image.0100.dcm";

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// DICOM file served as `brain_image`
    pub brain_image_path: PathBuf,
    /// DICOM file served as `annotation_image`
    pub annotation_image_path: PathBuf,
    /// Settings shared by both conversions
    pub conversion: ConversionConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            brain_image_path: PathBuf::from(DEFAULT_BRAIN_IMAGE_PATH),
            annotation_image_path: PathBuf::from(DEFAULT_ANNOTATION_IMAGE_PATH),
            conversion: ConversionConfig::default(),
        }
    }
}

impl ServiceConfig {
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct ServiceConfigBuilder {
    bind_addr: Option<SocketAddr>,
    brain_image_path: Option<PathBuf>,
    annotation_image_path: Option<PathBuf>,
    conversion: Option<ConversionConfig>,
}

impl ServiceConfigBuilder {
    pub fn bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = Some(addr);
        self
    }

    pub fn brain_image_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.brain_image_path = Some(path.into());
        self
    }

    pub fn annotation_image_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.annotation_image_path = Some(path.into());
        self
    }

    pub fn conversion(mut self, conversion: ConversionConfig) -> Self {
        self.conversion = Some(conversion);
        self
    }

    pub fn build(self) -> ServiceConfig {
        let default = ServiceConfig::default();
        ServiceConfig {
            bind_addr: self.bind_addr.unwrap_or(default.bind_addr),
            brain_image_path: self.brain_image_path.unwrap_or(default.brain_image_path),
            annotation_image_path: self
                .annotation_image_path
                .unwrap_or(default.annotation_image_path),
            conversion: self.conversion.unwrap_or(default.conversion),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Serves DICOM images as base64 encoded grayscale PNGs")]
pub struct ServiceArgs {
    /// Address to listen on
    #[arg(long, env = "DICOM_PREVIEW_BIND", default_value_t = DEFAULT_BIND_ADDR)]
    pub bind: SocketAddr,

    /// DICOM file returned as `brain_image`
    #[arg(long, env = "DICOM_PREVIEW_BRAIN_IMAGE", default_value = DEFAULT_BRAIN_IMAGE_PATH)]
    pub brain_image: PathBuf,

    /// DICOM file returned as `annotation_image`
    #[arg(
        long,
        env = "DICOM_PREVIEW_ANNOTATION_IMAGE",
        default_value = DEFAULT_ANNOTATION_IMAGE_PATH
    )]
    pub annotation_image: PathBuf,

    /// Frame to render from multi-frame files
    #[arg(long, default_value_t = 0)]
    pub frame: u32,

    /// Reject images wider or taller than this many pixels
    #[arg(long)]
    pub max_dimension: Option<usize>,

    /// Emit 16-bit grayscale PNGs instead of 8-bit
    #[arg(long)]
    pub sixteen_bit: bool,
}

impl ServiceArgs {
    pub fn into_config(self) -> ServiceConfig {
        let mut conversion = ConversionConfig::builder()
            .frame(self.frame)
            .output_depth(if self.sixteen_bit {
                GrayDepth::Sixteen
            } else {
                GrayDepth::Eight
            });
        if let Some(max) = self.max_dimension {
            conversion = conversion.max_dimension(Some(max));
        }

        ServiceConfig::builder()
            .bind_addr(self.bind)
            .brain_image_path(self.brain_image)
            .annotation_image_path(self.annotation_image)
            .conversion(conversion.build())
            .build()
    }
}
