//! End-to-end exports through the `image`-crate backend, on real files.

use image::{GenericImageView, Rgba, RgbaImage};
use imageset_gen::export::{ExportError, ExportOptions, export_imageset};
use imageset_gen::imaging::{ImageBackend, RustBackend};
use imageset_gen::manifest::{Manifest, render_manifest};
use imageset_gen::naming::ImageName;
use imageset_gen::source::{ArgSelection, LoadedSource, SelectionError, load_source};
use imageset_gen::types::ExportTarget;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 7 % 256) as u8, (y * 11 % 256) as u8, 90, 255])
    });
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

fn load(path: &Path) -> LoadedSource {
    let selection = ArgSelection {
        source: Some(path.to_path_buf()),
        destination: None,
    };
    load_source(&RustBackend::new(), &selection).unwrap()
}

/// Source `<tmp>/in/<file>` of the given size, exported into `<tmp>/out`.
fn setup(file: &str, width: u32, height: u32) -> (TempDir, LoadedSource, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("in");
    fs::create_dir_all(&input).unwrap();
    let source_path = input.join(file);
    write_png(&source_path, width, height);
    let loaded = load(&source_path);
    let out = tmp.path().join("out");
    (tmp, loaded, out)
}

fn dimensions(path: &Path) -> (u32, u32) {
    image::open(path).unwrap().dimensions()
}

fn sorted_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn square_source_produces_full_imageset() {
    let (_tmp, loaded, out) = setup("icon.png", 64, 64);
    let target = ExportTarget::new(&out, loaded.name.clone());

    let report = export_imageset(&loaded.image, &target, &ExportOptions::default(), None).unwrap();

    let folder = out.join("icon.imageset");
    assert!(report.created_folder);
    assert_eq!(report.location.path(), folder);
    assert_eq!(
        sorted_entries(&folder),
        vec!["Contents.json", "icon@1x.png", "icon@2x.png", "icon@3x.png"]
    );
    assert_eq!(dimensions(&folder.join("icon@1x.png")), (13, 13));
    assert_eq!(dimensions(&folder.join("icon@2x.png")), (25, 25));
    assert_eq!(dimensions(&folder.join("icon@3x.png")), (38, 38));
}

#[test]
fn wide_source_fills_height() {
    let (_tmp, loaded, out) = setup("banner.png", 100, 50);
    let target = ExportTarget::new(&out, loaded.name.clone());

    export_imageset(&loaded.image, &target, &ExportOptions::default(), None).unwrap();

    let folder = out.join("banner.imageset");
    assert_eq!(dimensions(&folder.join("banner@3x.png")), (76, 38));
    assert_eq!(dimensions(&folder.join("banner@2x.png")), (50, 25));
    assert_eq!(dimensions(&folder.join("banner@1x.png")), (26, 13));
}

#[test]
fn tall_source_fills_width() {
    let (_tmp, loaded, out) = setup("tall.png", 150, 200);
    let target = ExportTarget::new(&out, loaded.name.clone());

    export_imageset(&loaded.image, &target, &ExportOptions::default(), None).unwrap();

    assert_eq!(
        dimensions(&out.join("tall.imageset").join("tall@3x.png")),
        (38, 50)
    );
}

#[test]
fn written_manifest_matches_schema() {
    let (_tmp, loaded, out) = setup("icon.png", 40, 40);
    let target = ExportTarget::new(&out, loaded.name.clone());

    export_imageset(&loaded.image, &target, &ExportOptions::default(), None).unwrap();

    let text = fs::read_to_string(out.join("icon.imageset/Contents.json")).unwrap();
    assert_eq!(text, render_manifest(&ImageName::new("icon").unwrap()));

    let manifest: Manifest = serde_json::from_str(&text).unwrap();
    let entries: Vec<(&str, &str, &str)> = manifest
        .images
        .iter()
        .map(|i| (i.filename.as_str(), i.idiom.as_str(), i.scale.as_str()))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("icon@1x.png", "universal", "1x"),
            ("icon@2x.png", "universal", "2x"),
            ("icon@3x.png", "universal", "3x"),
        ]
    );
    assert_eq!(manifest.info.version, 1);
    assert_eq!(manifest.properties.template_rendering_intent, "original");
}

#[test]
fn reexport_is_byte_identical() {
    let (_tmp, loaded, out) = setup("icon.png", 90, 60);
    let target = ExportTarget::new(&out, loaded.name.clone());
    let folder = out.join("icon.imageset");
    let files = ["Contents.json", "icon@1x.png", "icon@2x.png", "icon@3x.png"];

    export_imageset(&loaded.image, &target, &ExportOptions::default(), None).unwrap();
    let first: Vec<Vec<u8>> = files.iter().map(|f| fs::read(folder.join(f)).unwrap()).collect();

    let report =
        export_imageset(&loaded.image, &target, &ExportOptions::default(), None).unwrap();
    let second: Vec<Vec<u8>> = files.iter().map(|f| fs::read(folder.join(f)).unwrap()).collect();

    assert!(!report.created_folder);
    assert_eq!(first, second);
}

#[test]
fn reexport_keeps_unrelated_files() {
    let (_tmp, loaded, out) = setup("icon.png", 32, 32);
    let folder = out.join("icon.imageset");
    fs::create_dir_all(&folder).unwrap();
    fs::write(folder.join("notes.txt"), "keep me").unwrap();
    fs::write(folder.join("icon@3x.png"), "stale").unwrap();

    let target = ExportTarget::new(&out, loaded.name.clone());
    export_imageset(&loaded.image, &target, &ExportOptions::default(), None).unwrap();

    assert_eq!(fs::read_to_string(folder.join("notes.txt")).unwrap(), "keep me");
    assert_eq!(dimensions(&folder.join("icon@3x.png")), (38, 38));
}

#[test]
fn failed_variant_write_leaves_no_manifest() {
    let (_tmp, loaded, out) = setup("icon.png", 64, 64);
    let folder = out.join("icon.imageset");
    // A directory where the 2x file should go makes that write fail.
    fs::create_dir_all(folder.join("icon@2x.png")).unwrap();

    let target = ExportTarget::new(&out, loaded.name.clone());
    let err = export_imageset(&loaded.image, &target, &ExportOptions::default(), None)
        .unwrap_err();

    match &err {
        ExportError::WriteFailed { path, .. } => assert_eq!(path, &folder.join("icon@2x.png")),
        other => panic!("expected WriteFailed, got {other:?}"),
    }
    assert!(!folder.join("Contents.json").exists());
    // 3x is written before 2x; 1x is never attempted.
    assert!(folder.join("icon@3x.png").is_file());
    assert!(!folder.join("icon@1x.png").exists());
}

#[test]
fn parallel_export_matches_sequential() {
    let (tmp, loaded, out) = setup("icon.png", 120, 80);
    let sequential = ExportTarget::new(&out, loaded.name.clone());
    let parallel_out = tmp.path().join("out-parallel");
    let parallel = ExportTarget::new(&parallel_out, loaded.name.clone());

    export_imageset(&loaded.image, &sequential, &ExportOptions::default(), None).unwrap();
    let options = ExportOptions {
        parallel_variants: true,
        ..ExportOptions::default()
    };
    let report = export_imageset(&loaded.image, &parallel, &options, None).unwrap();

    assert_eq!(report.variants.len(), 3);
    for file in ["Contents.json", "icon@1x.png", "icon@2x.png", "icon@3x.png"] {
        assert_eq!(
            fs::read(out.join("icon.imageset").join(file)).unwrap(),
            fs::read(parallel_out.join("icon.imageset").join(file)).unwrap(),
            "{file} differs"
        );
    }
}

#[test]
fn file_url_destination_is_decoded() {
    let (tmp, loaded, _out) = setup("icon.png", 20, 20);
    let real = tmp.path().join("My Assets");
    let url = format!("file://{}", tmp.path().join("My%20Assets").display());

    let target = ExportTarget::new(Path::new(&url), loaded.name.clone());
    export_imageset(&loaded.image, &target, &ExportOptions::default(), None).unwrap();

    assert!(real.join("icon.imageset/Contents.json").is_file());
}

#[test]
fn variants_are_transparent_outside_the_image() {
    let (_tmp, loaded, out) = setup("icon.png", 50, 50);
    let target = ExportTarget::new(&out, loaded.name.clone());

    export_imageset(&loaded.image, &target, &ExportOptions::default(), None).unwrap();

    let variant = image::open(out.join("icon.imageset/icon@1x.png")).unwrap();
    assert!(variant.color().has_alpha());
    assert_eq!(variant.get_pixel(6, 6)[3], 255);
}

#[test]
fn jpeg_source_is_accepted() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("Photo.JPG");
    let img = image::RgbImage::from_pixel(30, 20, image::Rgb([200, 10, 10]));
    img.save_with_format(&path, image::ImageFormat::Jpeg).unwrap();

    let loaded = load(&path);
    assert_eq!(loaded.name.as_str(), "Photo");

    let target = ExportTarget::new(&tmp.path().join("out"), loaded.name.clone());
    export_imageset(&loaded.image, &target, &ExportOptions::default(), None).unwrap();
    assert_eq!(
        dimensions(&tmp.path().join("out/Photo.imageset/Photo@3x.png")),
        (57, 38)
    );
}

#[test]
fn unsupported_source_is_rejected_before_decoding() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("icon.gif");
    fs::write(&path, b"GIF89a").unwrap();
    let selection = ArgSelection {
        source: Some(path.clone()),
        destination: None,
    };

    let err = load_source(&RustBackend::new(), &selection).unwrap_err();
    assert!(matches!(err, SelectionError::UnsupportedFormat(p) if p == path));
}

#[test]
fn corrupt_source_is_unreadable() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("icon.png");
    fs::write(&path, b"not a png").unwrap();

    assert!(RustBackend::new().load(&path).is_err());
    let selection = ArgSelection {
        source: Some(path),
        destination: None,
    };
    let err = load_source(&RustBackend::new(), &selection).unwrap_err();
    assert!(matches!(err, SelectionError::UnreadableSource { .. }));
}
