//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::PixelSize;

/// The axis whose ratio decides the uniform scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillAxis {
    Width,
    Height,
}

/// Pick the uniform scale factor that makes the source cover the target box.
///
/// Returns the larger of `target_w / source_w` and `target_h / source_h`
/// along with the axis it came from. On a tie the height ratio wins.
pub fn fill_ratio(source: (f64, f64), target: (f64, f64)) -> (f64, FillAxis) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let width_ratio = tgt_w / src_w;
    let height_ratio = tgt_h / src_h;

    if width_ratio > height_ratio {
        (width_ratio, FillAxis::Width)
    } else {
        (height_ratio, FillAxis::Height)
    }
}

/// Calculate the output size that fills a bounding box (cover, not fit).
///
/// The source aspect ratio is preserved and the image is scaled uniformly
/// until it covers the target on both axes; one axis matches the box, the
/// other may exceed it. Both dimensions are floored to whole pixels.
///
/// Source dimensions must be positive. Nothing guards against zero here;
/// a zero source yields a degenerate size that the resampler rejects.
///
/// # Arguments
/// * `source` - Source image dimensions (width, height)
/// * `target` - Bounding box dimensions (width, height)
///
/// # Examples
/// ```
/// # use imageset_gen::imaging::{calculate_fill_size, PixelSize};
/// // 100x50 into a 38x38 box: the height ratio (0.76) wins
/// assert_eq!(calculate_fill_size((100.0, 50.0), (38.0, 38.0)), PixelSize::new(76, 38));
/// ```
pub fn calculate_fill_size(source: (f64, f64), target: (f64, f64)) -> PixelSize {
    let (src_w, src_h) = source;
    let (ratio, _) = fill_ratio(source, target);

    // `as` saturates: NaN and negatives land on 0.
    PixelSize::new((src_w * ratio).floor() as u32, (src_h * ratio).floor() as u32)
}
