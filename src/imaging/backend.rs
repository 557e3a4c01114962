//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three operations the exporter needs:
//! load a source, resample it to an exact size, and write a PNG.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use the recording `MockBackend` below.

use super::params::ResampleParams;
use image::DynamicImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Resample failed: {0}")]
    ResampleFailed(String),
    #[error("Encode failed: {0}")]
    EncodeFailed(String),
}

/// A decoded source raster.
///
/// Width and height are reported as real values because the size calculator
/// works in continuous units; the pixel buffer itself is never mutated.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: DynamicImage,
}

impl SourceImage {
    pub fn new(pixels: DynamicImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> f64 {
        self.pixels.width() as f64
    }

    pub fn height(&self) -> f64 {
        self.pixels.height() as f64
    }

    /// Dimensions as (width, height).
    pub fn dimensions(&self) -> (f64, f64) {
        (self.width(), self.height())
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }
}

/// Trait for image processing backends.
///
/// `Sync` so variants can be rendered from rayon workers.
pub trait ImageBackend: Sync {
    /// Decode a source image from disk.
    fn load(&self, path: &Path) -> Result<SourceImage, BackendError>;

    /// Scale the whole source into a new raster of exactly `params.size`.
    fn resample(
        &self,
        source: &SourceImage,
        params: &ResampleParams,
    ) -> Result<DynamicImage, BackendError>;

    /// Encode as PNG and write to `path`, replacing any existing file.
    fn write_png(&self, image: &DynamicImage, path: &Path) -> Result<(), BackendError>;
}
