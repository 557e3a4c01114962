//! Parameter types for image operations.
//!
//! These types describe *what* to produce, not *how*. They sit between the
//! high-level [`operations`](super::operations) module (which decides which
//! variants an imageset needs) and the [`backend`](super::backend) (which does
//! the pixel work), so the exporter can run against a mock backend in tests.
//!
//! ## Types
//!
//! - [`Scale`] — One of the three fixed imageset variants (1x, 2x, 3x) and its bounding box.
//! - [`PixelSize`] — Integer output dimensions computed by the size calculator.
//! - [`ResampleFilter`] — Resampling kernel, selectable in config.
//! - [`ResampleParams`] — Everything one resample needs: output size + filter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scale variant of an imageset.
///
/// The bounding boxes are fixed: 13×13 at 1x, 25×25 at 2x, 38×38 at 3x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scale {
    X1,
    X2,
    X3,
}

impl Scale {
    /// Manifest order.
    pub const ALL: [Scale; 3] = [Scale::X1, Scale::X2, Scale::X3];

    /// Order in which the exporter renders variants, largest first.
    pub const EXPORT_ORDER: [Scale; 3] = [Scale::X3, Scale::X2, Scale::X1];

    /// Scale label as it appears in filenames and the manifest (`"2x"`).
    pub fn label(self) -> &'static str {
        match self {
            Scale::X1 => "1x",
            Scale::X2 => "2x",
            Scale::X3 => "3x",
        }
    }

    /// Device pixels per point.
    pub fn factor(self) -> u32 {
        match self {
            Scale::X1 => 1,
            Scale::X2 => 2,
            Scale::X3 => 3,
        }
    }

    /// Target bounding box as (width, height).
    pub fn bounding_box(self) -> (u32, u32) {
        match self {
            Scale::X1 => (13, 13),
            Scale::X2 => (25, 25),
            Scale::X3 => (38, 38),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output dimensions in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for PixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Resampling kernel used when scaling a source down to a variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

/// Parameters for a single resample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResampleParams {
    pub size: PixelSize,
    pub filter: ResampleFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_labels_and_boxes() {
        assert_eq!(Scale::X1.label(), "1x");
        assert_eq!(Scale::X2.bounding_box(), (25, 25));
        assert_eq!(Scale::X3.bounding_box(), (38, 38));
        assert_eq!(Scale::X3.factor(), 3);
    }

    #[test]
    fn manifest_order_is_ascending() {
        assert_eq!(Scale::ALL, [Scale::X1, Scale::X2, Scale::X3]);
    }

    #[test]
    fn export_order_is_largest_first() {
        assert_eq!(Scale::EXPORT_ORDER, [Scale::X3, Scale::X2, Scale::X1]);
    }

    #[test]
    fn pixel_size_empty() {
        assert!(PixelSize::new(0, 10).is_empty());
        assert!(!PixelSize::new(1, 1).is_empty());
        assert_eq!(PixelSize::new(76, 38).to_string(), "76x38");
    }

    #[test]
    fn filter_default_is_lanczos3() {
        assert_eq!(ResampleFilter::default(), ResampleFilter::Lanczos3);
    }
}
