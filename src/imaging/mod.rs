//! Image processing built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (PNG, JPEG) |
//! | **Fill size** | [`calculate_fill_size`] — pure ratio math |
//! | **Resample** | `imageops::resize` + source-over composite |
//! | **Encode** | `PngEncoder`, default settings |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend, SourceImage};
pub use calculations::{FillAxis, calculate_fill_size, fill_ratio};
pub use operations::{plan_variant, render_variant};
pub use params::{PixelSize, ResampleFilter, ResampleParams, Scale};
pub use rust_backend::{RustBackend, supported_input_extensions};
