//! Shared types passed between selection, export, output and reveal.

use crate::imaging::Scale;
use crate::naming::{ImageName, MANIFEST_FILENAME, normalize_destination};
use std::path::{Path, PathBuf};

/// Where an export goes: a destination directory plus the image name.
///
/// The folder path is normalized once on construction, so every artifact
/// path derived from it is a plain filesystem path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    name: ImageName,
    folder: PathBuf,
}

impl ExportTarget {
    pub fn new(destination: &Path, name: ImageName) -> Self {
        let folder = normalize_destination(destination).join(name.imageset_folder_name());
        Self { name, folder }
    }

    pub fn name(&self) -> &ImageName {
        &self.name
    }

    /// `<destination>/<name>.imageset`
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// `<folder>/<name>@<n>x.png`
    pub fn variant_path(&self, scale: Scale) -> PathBuf {
        self.folder.join(self.name.variant_filename(scale))
    }

    /// `<folder>/Contents.json`
    pub fn manifest_path(&self) -> PathBuf {
        self.folder.join(MANIFEST_FILENAME)
    }
}

/// Folder of the most recent successful export.
///
/// Only an export that wrote every artifact produces one; callers hold on to
/// it and hand it to [`reveal`](crate::reveal::reveal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastExportLocation(PathBuf);

impl LastExportLocation {
    pub(crate) fn new(folder: PathBuf) -> Self {
        Self(folder)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
