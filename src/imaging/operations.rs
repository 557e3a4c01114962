//! High-level image operations.
//!
//! These functions combine calculations with backend execution: work out the
//! output size for a scale variant, then ask the backend for the pixels.

use super::backend::{BackendError, ImageBackend, SourceImage};
use super::calculations::calculate_fill_size;
use super::params::{ResampleFilter, ResampleParams, Scale};
use image::DynamicImage;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Plan the resample for one scale variant without executing it.
pub fn plan_variant(source: (f64, f64), scale: Scale, filter: ResampleFilter) -> ResampleParams {
    let (box_w, box_h) = scale.bounding_box();
    ResampleParams {
        size: calculate_fill_size(source, (box_w as f64, box_h as f64)),
        filter,
    }
}

/// Render one scale variant of `source`.
///
/// Returns the raster together with the parameters it was produced with.
pub fn render_variant(
    backend: &impl ImageBackend,
    source: &SourceImage,
    scale: Scale,
    filter: ResampleFilter,
) -> Result<(DynamicImage, ResampleParams)> {
    let params = plan_variant(source.dimensions(), scale, filter);
    let raster = backend.resample(source, &params)?;
    Ok((raster, params))
}
