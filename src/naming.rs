//! Centralized naming for imageset artifacts.
//!
//! Every file an export produces is named from a single [`ImageName`]:
//!
//! ```text
//! icon.png  →  icon.imageset/
//!                ├── icon@1x.png
//!                ├── icon@2x.png
//!                ├── icon@3x.png
//!                └── Contents.json
//! ```
//!
//! Destinations handed over by file pickers sometimes arrive as `file://`
//! URLs; [`normalize_destination`] turns those back into plain paths.

use crate::imaging::Scale;
use percent_encoding::percent_decode_str;
use std::fmt;
use std::path::{Path, PathBuf};

/// Filename of the manifest inside every imageset folder.
pub const MANIFEST_FILENAME: &str = "Contents.json";

/// Suffix of an imageset folder.
pub const IMAGESET_EXTENSION: &str = "imageset";

const FILE_SCHEME: &str = "file://";

/// Identifier that names every artifact of an export.
///
/// Never empty and never contains a path separator, so it is always a
/// single path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageName(String);

impl ImageName {
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() || name.contains(['/', '\\']) {
            return None;
        }
        Some(Self(name))
    }

    /// Derive the name from a source file: base name, extension stripped.
    ///
    /// - `/in/icon.png` → `icon`
    /// - `/in/tab.bar.jpeg` → `tab.bar`
    pub fn from_source_path(path: &Path) -> Option<Self> {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .and_then(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<name>.imageset`
    pub fn imageset_folder_name(&self) -> String {
        format!("{}.{}", self.0, IMAGESET_EXTENSION)
    }

    /// `<name>@<n>x.png`
    pub fn variant_filename(&self, scale: Scale) -> String {
        format!("{}@{}.png", self.0, scale.label())
    }
}

impl fmt::Display for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turn a destination that may be a `file://` URL into a plain path.
///
/// URL input has its scheme (and an optional `localhost` host) stripped and
/// percent-escapes decoded. Anything else is already a path and is returned
/// untouched, so a literal `%` in a directory name survives.
pub fn normalize_destination(destination: &Path) -> PathBuf {
    let raw = destination.to_string_lossy();
    let Some(rest) = raw.strip_prefix(FILE_SCHEME) else {
        return destination.to_path_buf();
    };
    let rest = rest.strip_prefix("localhost").unwrap_or(rest);

    let decoded = percent_decode_str(rest)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_else(|_| rest.to_string());
    PathBuf::from(decoded)
}
