//! Common utilities module
//!
//! Shared error and configuration types used across the image pipeline.

pub mod config;
pub mod error;

pub use config::{ConversionConfig, ConversionConfigBuilder, GrayDepth};
pub use error::{ConversionError, Result};
