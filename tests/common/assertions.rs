//! Assertion helpers for tests.

use appiconset::{IconsetConfig, RunReport, VariantKey};
use pretty_assertions::assert_eq;
use std::path::Path;

/// Assert a file is a PNG with square dimensions `side` x `side`.
pub fn assert_png_side(path: &Path, side: u32) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    assert_eq!(
        &bytes[..8],
        &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A],
        "{} is not a PNG",
        path.display()
    );

    let image = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
        .unwrap_or_else(|e| panic!("Failed to decode {}: {e}", path.display()));
    assert_eq!(
        (image.width(), image.height()),
        (side, side),
        "Unexpected dimensions for {}",
        path.display()
    );
}

/// Parse a manifest record's `size` and `scale` labels back into a key.
pub fn record_key(size: &str, scale: &str) -> (u32, u32, u32) {
    let (w, h) = size.split_once('x').expect("size label");
    let s = scale.strip_suffix('x').expect("scale label");
    (w.parse().unwrap(), h.parse().unwrap(), s.parse().unwrap())
}

/// Assert manifest entries are non-decreasing in (width, height, scale) and
/// that every record's filename exists on disk and follows the naming rule.
pub fn assert_manifest_consistent(report: &RunReport) {
    let config = IconsetConfig::macos();
    let keys: Vec<_> = report
        .manifest
        .images
        .iter()
        .map(|r| record_key(&r.size, &r.scale))
        .collect();

    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted, "Manifest entries are not sorted");

    for (record, &(width, height, scale)) in report.manifest.images.iter().zip(&keys) {
        assert_eq!(width, height, "Non-square record {record:?}");
        assert_eq!(record.idiom, "mac");
        assert_eq!(record.filename, config.filename(VariantKey::new(width, scale)));
        assert!(
            report.output_dir.join(&record.filename).is_file(),
            "Manifest names missing file {}",
            record.filename
        );
    }
}

/// Assert the manifest lists exactly `expected` as (width, scale) pairs.
pub fn assert_manifest_keys(report: &RunReport, expected: &[(u32, u32)]) {
    let actual: Vec<_> = report
        .manifest
        .images
        .iter()
        .map(|r| {
            let (w, _, s) = record_key(&r.size, &r.scale);
            (w, s)
        })
        .collect();
    assert_eq!(actual, expected);
}
