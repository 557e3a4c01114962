//! Imageset export: one source image in, one `.imageset` folder out.
//!
//! ## Pipeline
//!
//! ```text
//! Idle → DirectoryEnsured → 3x written → 2x written → 1x written → ManifestWritten → Done
//!   \___________________________ any failure → Failed ____________________________/
//! ```
//!
//! 1. Ensure `<destination>/<name>.imageset/` exists. Existing folders are
//!    reused as-is; files other than the four artifacts are never touched.
//! 2. For each scale, largest first: compute the fill size, resample, write
//!    `<name>@<n>x.png`.
//! 3. Write `Contents.json`, only once every variant is on disk.
//!
//! Each transition is reported as an [`ExportEvent`] when a sender is given.
//!
//! ## Failure Handling
//!
//! A failed step stops the export and is returned as an [`ExportError`]
//! naming the artifact. Files already written stay on disk; the missing
//! manifest is what marks the imageset as incomplete.
//!
//! With `parallel_variants` enabled the three variants render concurrently
//! on the rayon pool. All three run to completion and every failure is
//! collected into one error.

use crate::config::ExportConfig;
use crate::imaging::{
    BackendError, ImageBackend, PixelSize, ResampleFilter, RustBackend, Scale, SourceImage,
    render_variant,
};
use crate::manifest::render_manifest;
use crate::naming::ImageName;
use crate::types::{ExportTarget, LastExportLocation};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create {}: {source}", .path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to resample the {scale} variant ({}): {source}", .path.display())]
    ResampleFailed {
        scale: Scale,
        path: PathBuf,
        source: BackendError,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailed { path: PathBuf, source: BackendError },
    #[error("{} artifacts failed: {}", .0.len(), summarize(.0))]
    Multiple(Vec<ExportError>),
}

impl ExportError {
    /// Collapse a non-empty list of failures into one error.
    fn from_failures(mut failures: Vec<ExportError>) -> Self {
        if failures.len() == 1 {
            failures.remove(0)
        } else {
            ExportError::Multiple(failures)
        }
    }

    /// Paths of every artifact this error covers.
    pub fn failed_paths(&self) -> Vec<&Path> {
        match self {
            ExportError::DirectoryCreateFailed { path, .. }
            | ExportError::ResampleFailed { path, .. }
            | ExportError::WriteFailed { path, .. } => vec![path.as_path()],
            ExportError::Multiple(errors) => errors.iter().flat_map(|e| e.failed_paths()).collect(),
        }
    }
}

fn summarize(errors: &[ExportError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Knobs the exporter takes from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub filter: ResampleFilter,
    pub parallel_variants: bool,
}

impl ExportOptions {
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            filter: config.resample.filter,
            parallel_variants: config.processing.parallel_variants,
        }
    }
}

/// A variant that made it to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedVariant {
    pub scale: Scale,
    pub filename: String,
    pub path: PathBuf,
    pub size: PixelSize,
}

/// Progress events, in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportEvent {
    DirectoryEnsured { path: PathBuf, created: bool },
    VariantWritten(GeneratedVariant),
    ManifestWritten { path: PathBuf },
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub name: ImageName,
    /// The imageset folder; pass it to [`reveal`](crate::reveal::reveal).
    pub location: LastExportLocation,
    /// Variants in manifest order (1x, 2x, 3x).
    pub variants: Vec<GeneratedVariant>,
    pub manifest: PathBuf,
    /// Whether the folder was created by this export.
    pub created_folder: bool,
}

/// Export `source` into `target` using the `image`-crate backend.
pub fn export_imageset(
    source: &SourceImage,
    target: &ExportTarget,
    options: &ExportOptions,
    events: Option<Sender<ExportEvent>>,
) -> Result<ExportReport, ExportError> {
    export_imageset_with_backend(&RustBackend::new(), source, target, options, events)
}

/// Export using a specific backend (allows testing with mock).
pub fn export_imageset_with_backend(
    backend: &impl ImageBackend,
    source: &SourceImage,
    target: &ExportTarget,
    options: &ExportOptions,
    events: Option<Sender<ExportEvent>>,
) -> Result<ExportReport, ExportError> {
    let events = events.as_ref();
    let folder = target.folder();

    let created_folder = ensure_folder(folder)?;
    log::debug!(
        "{} {}",
        if created_folder { "created" } else { "reusing" },
        folder.display()
    );
    emit(
        events,
        ExportEvent::DirectoryEnsured {
            path: folder.to_path_buf(),
            created: created_folder,
        },
    );

    let mut variants = if options.parallel_variants {
        export_variants_parallel(backend, source, target, options.filter, events)?
    } else {
        export_variants_sequential(backend, source, target, options.filter, events)?
    };
    variants.sort_by_key(|v| v.scale);

    let manifest = target.manifest_path();
    std::fs::write(&manifest, render_manifest(target.name())).map_err(|e| {
        ExportError::WriteFailed {
            path: manifest.clone(),
            source: BackendError::Io(e),
        }
    })?;
    log::debug!("wrote {}", manifest.display());
    emit(
        events,
        ExportEvent::ManifestWritten {
            path: manifest.clone(),
        },
    );

    log::info!("exported '{}' to {}", target.name(), folder.display());
    Ok(ExportReport {
        name: target.name().clone(),
        location: LastExportLocation::new(folder.to_path_buf()),
        variants,
        manifest,
        created_folder,
    })
}

/// Create `folder` and its parents. Returns whether it had to be created.
fn ensure_folder(folder: &Path) -> Result<bool, ExportError> {
    let existed = folder.is_dir();
    std::fs::create_dir_all(folder).map_err(|source| ExportError::DirectoryCreateFailed {
        path: folder.to_path_buf(),
        source,
    })?;
    Ok(!existed)
}

fn export_variants_sequential(
    backend: &impl ImageBackend,
    source: &SourceImage,
    target: &ExportTarget,
    filter: ResampleFilter,
    events: Option<&Sender<ExportEvent>>,
) -> Result<Vec<GeneratedVariant>, ExportError> {
    Scale::EXPORT_ORDER
        .iter()
        .map(|&scale| export_variant(backend, source, target, scale, filter, events))
        .collect()
}

fn export_variants_parallel(
    backend: &impl ImageBackend,
    source: &SourceImage,
    target: &ExportTarget,
    filter: ResampleFilter,
    events: Option<&Sender<ExportEvent>>,
) -> Result<Vec<GeneratedVariant>, ExportError> {
    let results: Vec<_> = Scale::EXPORT_ORDER
        .par_iter()
        .map(|&scale| export_variant(backend, source, target, scale, filter, events))
        .collect();

    let (written, failures): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);
    if !failures.is_empty() {
        return Err(ExportError::from_failures(
            failures.into_iter().filter_map(Result::err).collect(),
        ));
    }
    Ok(written.into_iter().filter_map(Result::ok).collect())
}

fn export_variant(
    backend: &impl ImageBackend,
    source: &SourceImage,
    target: &ExportTarget,
    scale: Scale,
    filter: ResampleFilter,
    events: Option<&Sender<ExportEvent>>,
) -> Result<GeneratedVariant, ExportError> {
    let path = target.variant_path(scale);

    let (raster, params) =
        render_variant(backend, source, scale, filter).map_err(|source| {
            ExportError::ResampleFailed {
                scale,
                path: path.clone(),
                source,
            }
        })?;
    backend
        .write_png(&raster, &path)
        .map_err(|source| ExportError::WriteFailed {
            path: path.clone(),
            source,
        })?;
    log::debug!("wrote {} at {}", path.display(), params.size);

    let variant = GeneratedVariant {
        scale,
        filename: target.name().variant_filename(scale),
        path,
        size: params.size,
    };
    emit(events, ExportEvent::VariantWritten(variant.clone()));
    Ok(variant)
}

fn emit(events: Option<&Sender<ExportEvent>>, event: ExportEvent) {
    if let Some(tx) = events {
        // A dropped receiver only means nobody is watching.
        tx.send(event).ok();
    }
}
