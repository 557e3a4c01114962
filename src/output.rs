//! CLI output formatting for the export pipeline.
//!
//! # Output Format
//!
//! ```text
//! Source: icon.png (100x50)
//! icon.imageset → /tmp/out/icon.imageset (created)
//!     3x: 76x38 → icon@3x.png
//!     2x: 50x25 → icon@2x.png
//!     1x: 26x13 → icon@1x.png
//!     manifest → Contents.json
//! Exported icon: 3 variants + Contents.json
//! ```
//!
//! On failure the error is followed by one indented line per failed artifact:
//!
//! ```text
//! Export failed: Failed to write /tmp/out/icon.imageset/icon@2x.png: ...
//!     failed: icon@2x.png
//! ```
//!
//! # Architecture
//!
//! Each `format_*` function returns `Vec<String>` for testability; `print_*`
//! wrappers write to stdout. Format functions are pure.

use crate::export::{ExportError, ExportEvent, ExportReport};
use crate::source::LoadedSource;
use std::path::Path;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format the line describing the loaded source.
pub fn format_source(source: &LoadedSource) -> Vec<String> {
    vec![format!(
        "Source: {} ({}x{})",
        file_name(&source.path),
        source.image.width(),
        source.image.height()
    )]
}

/// Format a single export progress event as display lines.
pub fn format_export_event(event: &ExportEvent) -> Vec<String> {
    match event {
        ExportEvent::DirectoryEnsured { path, created } => {
            let state = if *created { "created" } else { "existing" };
            vec![format!("{} → {} ({})", file_name(path), path.display(), state)]
        }
        ExportEvent::VariantWritten(variant) => vec![format!(
            "{}{}: {} → {}",
            indent(1),
            variant.scale,
            variant.size,
            variant.filename
        )],
        ExportEvent::ManifestWritten { path } => {
            vec![format!("{}manifest → {}", indent(1), file_name(path))]
        }
    }
}

/// Format the closing summary of a successful export.
pub fn format_export_summary(report: &ExportReport) -> Vec<String> {
    vec![format!(
        "Exported {}: {} variants + {}",
        report.name,
        report.variants.len(),
        file_name(&report.manifest)
    )]
}

/// Format an export failure with one line per failed artifact.
pub fn format_export_error(error: &ExportError) -> Vec<String> {
    let mut lines = vec![format!("Export failed: {}", error)];
    for path in error.failed_paths() {
        lines.push(format!("{}failed: {}", indent(1), file_name(path)));
    }
    lines
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn print_export_summary(report: &ExportReport) {
    print_lines(&format_export_summary(report));
}
