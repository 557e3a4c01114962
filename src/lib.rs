//! # imageset-gen
//!
//! Turns one source image into an asset catalog imageset: three scaled PNG
//! variants and the `Contents.json` that describes them.
//!
//! ```text
//! icon.png  ──▶  <destination>/icon.imageset/
//!                  ├── icon@1x.png    (fills 13×13)
//!                  ├── icon@2x.png    (fills 25×25)
//!                  ├── icon@3x.png    (fills 38×38)
//!                  └── Contents.json
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`source`] | Source/destination selection capabilities and source loading |
//! | [`imaging`] | Fill-size math, resampling and PNG encoding behind [`imaging::ImageBackend`] |
//! | [`manifest`] | The fixed `Contents.json` schema |
//! | [`export`] | The export pipeline: folder, variants, manifest |
//! | [`reveal`] | Show an exported imageset in the file browser |
//! | [`naming`] | `ImageName` and every artifact filename derived from it |
//! | [`types`] | `ExportTarget` and `LastExportLocation` |
//! | [`config`] | `imageset.toml` loading, merging and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Fill, Not Fit
//!
//! Each variant is scaled uniformly until it *covers* its bounding box: one
//! axis matches the box, the other may overflow it. Nothing is cropped, so a
//! 100×50 source becomes a 76×38 @3x variant. See
//! [`imaging::calculate_fill_size`].
//!
//! ## No Hidden State
//!
//! The location of the last export is returned in the
//! [`export::ExportReport`] and handed to [`reveal::reveal`] by the caller.
//! Nothing is kept in globals between exports.
//!
//! ## Failures Are Reported, Not Logged
//!
//! A resample or write failure stops the export and comes back as an
//! [`export::ExportError`] naming the artifact. `Contents.json` is only
//! written after all three variants, so a folder without a manifest is an
//! incomplete export.

pub mod config;
pub mod export;
pub mod imaging;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod reveal;
pub mod source;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
