//! The `Contents.json` descriptor of an imageset.
//!
//! The schema is fixed: three `universal` images in 1x, 2x, 3x order, a
//! constant `info` block and two constant `properties`.
//!
//! ```json
//! {
//!   "images": [
//!     { "filename": "icon@1x.png", "idiom": "universal", "scale": "1x" },
//!     { "filename": "icon@2x.png", "idiom": "universal", "scale": "2x" },
//!     { "filename": "icon@3x.png", "idiom": "universal", "scale": "3x" }
//!   ],
//!   "info": { "author": "imageset-gen", "version": 1 },
//!   "properties": {
//!     "preserves-vector-representation": true,
//!     "template-rendering-intent": "original"
//!   }
//! }
//! ```
//!
//! Rendering is deterministic: struct field order fixes key order, so the
//! same name always produces the same bytes.

use crate::imaging::Scale;
use crate::naming::ImageName;
use serde::{Deserialize, Serialize};

pub const MANIFEST_AUTHOR: &str = "imageset-gen";
pub const MANIFEST_VERSION: u32 = 1;
pub const IDIOM_UNIVERSAL: &str = "universal";
pub const TEMPLATE_RENDERING_INTENT: &str = "original";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestImage>,
    pub info: ManifestInfo,
    pub properties: ManifestProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestImage {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ManifestProperties {
    pub preserves_vector_representation: bool,
    pub template_rendering_intent: String,
}

/// Build the manifest describing the three variants of `name`.
pub fn build_manifest(name: &ImageName) -> Manifest {
    Manifest {
        images: Scale::ALL
            .iter()
            .map(|&scale| ManifestImage {
                filename: name.variant_filename(scale),
                idiom: IDIOM_UNIVERSAL.to_string(),
                scale: scale.label().to_string(),
            })
            .collect(),
        info: ManifestInfo {
            author: MANIFEST_AUTHOR.to_string(),
            version: MANIFEST_VERSION,
        },
        properties: ManifestProperties {
            preserves_vector_representation: true,
            template_rendering_intent: TEMPLATE_RENDERING_INTENT.to_string(),
        },
    }
}

/// Render the manifest for `name` as pretty JSON with a trailing newline.
pub fn render_manifest(name: &ImageName) -> String {
    let mut json = serde_json::to_string_pretty(&build_manifest(name))
        .expect("manifest of plain strings must serialize");
    json.push('\n');
    json
}
