use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::models::{IconsetConfig, Manifest, ManifestRecord, Variant};
use crate::rendering::encode_rgba_png;

/// Options for how rasters are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Losslessly re-compress each PNG with oxipng
    pub optimize: bool,
}

/// Files produced by [`ManifestBuilder::write`].
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
    /// Raster files in manifest order
    pub rasters: Vec<PathBuf>,
}

/// Writes the variant rasters and the manifest describing them.
pub struct ManifestBuilder {
    config: IconsetConfig,
    options: WriteOptions,
}

impl ManifestBuilder {
    pub fn new(config: &IconsetConfig) -> Self {
        Self {
            config: config.clone(),
            options: WriteOptions::default(),
        }
    }

    #[inline]
    pub fn options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    /// Union of native and synthesized variants, one per key, sorted by
    /// `(width, height, scale)`. A native variant always wins over a
    /// synthesized one with the same key.
    pub fn merge(native: Vec<Variant>, synthesized: Vec<Variant>) -> Vec<Variant> {
        let mut merged = BTreeMap::new();
        for variant in native {
            merged.entry(variant.sort_key()).or_insert(variant);
        }
        for variant in synthesized {
            merged.entry(variant.sort_key()).or_insert(variant);
        }
        merged.into_values().collect()
    }

    /// Manifest records for `variants`, ordered by `(width, height, scale)`
    /// regardless of the input order.
    pub fn manifest(&self, variants: &[Variant]) -> Manifest {
        let mut keys: Vec<_> = variants.iter().map(|v| (v.sort_key(), v.key)).collect();
        keys.sort_by_key(|(sort_key, _)| *sort_key);
        keys.dedup_by_key(|(sort_key, _)| *sort_key);

        let records = keys
            .into_iter()
            .map(|(_, key)| ManifestRecord::new(&self.config, key))
            .collect();
        Manifest::new(&self.config, records)
    }

    /// Write every raster and then the manifest into `output_dir`.
    ///
    /// The directory is created if needed. Only the first variant for each
    /// key is written. Every raster write is attempted; if any fails, the
    /// first failure in manifest order is returned, files that were written
    /// are left in place and no manifest is written.
    pub fn write(
        &self,
        variants: &[Variant],
        output_dir: &Path,
    ) -> Result<BuildOutput, ConvertError> {
        std::fs::create_dir_all(output_dir).map_err(|source| ConvertError::StorageWrite {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let mut unique = BTreeMap::new();
        for variant in variants {
            unique.entry(variant.sort_key()).or_insert(variant);
        }
        let unique: Vec<&Variant> = unique.into_values().collect();

        let optimize = self.options.optimize;
        let results: Vec<Result<PathBuf, ConvertError>> = unique
            .par_iter()
            .map(|variant| {
                let path = output_dir.join(self.config.filename(variant.key));
                let bytes = encode_rgba_png(&variant.pixels, optimize)?;
                std::fs::write(&path, &bytes).map_err(|source| ConvertError::StorageWrite {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(
                    path = %path.display(),
                    origin = ?variant.origin,
                    bytes = bytes.len(),
                    "Wrote variant"
                );
                Ok(path)
            })
            .collect();
        let rasters = results.into_iter().collect::<Result<Vec<_>, _>>()?;

        let manifest = self.manifest(variants);
        let manifest_path = output_dir.join(&self.config.manifest_name);
        let json = manifest.to_json()?;
        std::fs::write(&manifest_path, json).map_err(|source| ConvertError::StorageWrite {
            path: manifest_path.clone(),
            source,
        })?;

        Ok(BuildOutput {
            manifest,
            manifest_path,
            rasters,
        })
    }
}
