//! Selecting the source image and the destination directory.
//!
//! Selection is a capability, not a dialog: the exporter only needs
//! "something that yields a path". [`SourceProvider`] and
//! [`DestinationProvider`] model that; [`ArgSelection`] satisfies both from
//! command-line arguments, and tests use fixed paths.
//!
//! Every way a selection can go wrong is a [`SelectionError`] variant, so
//! callers can re-prompt on `Cancelled` and report the rest.

use crate::imaging::{ImageBackend, SourceImage, supported_input_extensions};
use crate::naming::ImageName;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// What the user was asked to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Source,
    Destination,
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionKind::Source => f.write_str("source image"),
            SelectionKind::Destination => f.write_str("destination directory"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("No {0} selected")]
    Cancelled(SelectionKind),
    #[error("Unsupported source format: {} (expected one of: {})", .0.display(), supported_input_extensions().join(", "))]
    UnsupportedFormat(PathBuf),
    #[error("Cannot derive an image name from {}", .0.display())]
    InvalidName(PathBuf),
    #[error("Unreadable source image {}: {cause}", .path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        cause: crate::imaging::BackendError,
    },
}

/// Yields the path of the image to export.
pub trait SourceProvider {
    fn choose_source(&self) -> Result<PathBuf, SelectionError>;
}

/// Yields the directory the imageset folder is created in.
///
/// The directory need not exist yet; the exporter creates it.
pub trait DestinationProvider {
    fn choose_destination(&self) -> Result<PathBuf, SelectionError>;
}

/// Selection taken from command-line arguments. A missing argument counts
/// as a cancelled selection.
#[derive(Debug, Clone, Default)]
pub struct ArgSelection {
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
}

impl SourceProvider for ArgSelection {
    fn choose_source(&self) -> Result<PathBuf, SelectionError> {
        self.source
            .clone()
            .ok_or(SelectionError::Cancelled(SelectionKind::Source))
    }
}

impl DestinationProvider for ArgSelection {
    fn choose_destination(&self) -> Result<PathBuf, SelectionError> {
        self.destination
            .clone()
            .ok_or(SelectionError::Cancelled(SelectionKind::Destination))
    }
}

/// A decoded source together with the name its artifacts will carry.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub path: PathBuf,
    pub name: ImageName,
    pub image: SourceImage,
}

/// Whether `path` has one of the accepted extensions (case-insensitive).
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            supported_input_extensions()
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}

/// Ask `provider` for a source, then validate and decode it.
pub fn load_source(
    backend: &impl ImageBackend,
    provider: &impl SourceProvider,
) -> Result<LoadedSource, SelectionError> {
    let path = provider.choose_source()?;
    if !has_supported_extension(&path) {
        return Err(SelectionError::UnsupportedFormat(path));
    }
    let name = ImageName::from_source_path(&path)
        .ok_or_else(|| SelectionError::InvalidName(path.clone()))?;
    let image = backend
        .load(&path)
        .map_err(|cause| SelectionError::UnreadableSource {
            path: path.clone(),
            cause,
        })?;
    log::debug!(
        "loaded {} ({}x{}) as '{}'",
        path.display(),
        image.width(),
        image.height(),
        name
    );
    Ok(LoadedSource { path, name, image })
}
