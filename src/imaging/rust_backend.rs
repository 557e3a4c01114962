//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG) | `image::ImageReader` (content-sniffed) |
//! | Resample | `image::imageops::resize`, then `overlay` onto a transparent canvas |
//! | Encode → PNG | `image::codecs::png::PngEncoder` with default settings |

use super::backend::{BackendError, ImageBackend, SourceImage};
use super::params::{ResampleFilter, ResampleParams};
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use std::path::Path;
use std::sync::LazyLock;

/// Source extensions the exporter accepts, paired with the decoder they need.
const SOURCE_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    SOURCE_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the source file extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBackend for RustBackend {
    fn load(&self, path: &Path) -> Result<SourceImage, BackendError> {
        let pixels = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| {
                BackendError::Decode(format!("Failed to decode {}: {}", path.display(), e))
            })?;
        Ok(SourceImage::new(pixels))
    }

    fn resample(
        &self,
        source: &SourceImage,
        params: &ResampleParams,
    ) -> Result<DynamicImage, BackendError> {
        let size = params.size;
        if size.is_empty() {
            return Err(BackendError::ResampleFailed(format!(
                "output size {} has no area",
                size
            )));
        }
        let src = source.pixels();
        if src.width() == 0 || src.height() == 0 {
            return Err(BackendError::ResampleFailed(
                "source image has no area".to_string(),
            ));
        }

        // Full source bounds into full destination bounds, no cropping.
        let scaled = imageops::resize(
            &src.to_rgba8(),
            size.width,
            size.height,
            params.filter.into(),
        );

        // Source-over at full opacity onto a transparent surface.
        let mut canvas = RgbaImage::new(size.width, size.height);
        imageops::overlay(&mut canvas, &scaled, 0, 0);

        Ok(DynamicImage::ImageRgba8(canvas))
    }

    fn write_png(&self, image: &DynamicImage, path: &Path) -> Result<(), BackendError> {
        // Encode fully in memory so a failed encode never truncates an existing file.
        let mut bytes = Vec::new();
        image
            .write_with_encoder(PngEncoder::new(&mut bytes))
            .map_err(|e| BackendError::EncodeFailed(format!("PNG encode failed: {}", e)))?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
