use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::models::{CoverageGap, IconsetConfig, Manifest};
use crate::services::{Inventory, ManifestBuilder, ResolutionPlan, Resolver, WriteOptions};

/// Summary of one container → icon set conversion.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_dir: PathBuf,
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
    pub rasters: Vec<PathBuf>,
    pub native: usize,
    pub synthesized: usize,
    pub gaps: Vec<CoverageGap>,
}

impl RunReport {
    pub fn is_complete(&self) -> bool {
        self.gaps.is_empty()
    }
}

/// Inventory → Resolver → Builder for a single configuration.
pub struct IconsetPipeline {
    config: IconsetConfig,
    options: WriteOptions,
}

impl IconsetPipeline {
    pub fn new(config: IconsetConfig) -> Self {
        Self {
            config,
            options: WriteOptions::default(),
        }
    }

    #[inline]
    pub fn options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn config(&self) -> &IconsetConfig {
        &self.config
    }

    /// Read `container` and report what a run would do, without writing.
    pub fn plan(&self, container: &Path) -> Result<(Inventory, ResolutionPlan), ConvertError> {
        let inventory = Inventory::open(container)?;
        let plan = Resolver::new(&self.config).plan(&inventory);
        Ok((inventory, plan))
    }

    /// Convert `container` into a complete icon set inside `output_dir`.
    ///
    /// Read and format errors abort before anything is written. Coverage
    /// gaps are logged and returned in the report; they never abort.
    pub fn run(&self, container: &Path, output_dir: &Path) -> Result<RunReport, ConvertError> {
        let inventory = Inventory::open(container)?;
        self.run_inventory(inventory, output_dir)
    }

    /// Same as [`run`](Self::run) for an already decoded inventory.
    pub fn run_inventory(
        &self,
        inventory: Inventory,
        output_dir: &Path,
    ) -> Result<RunReport, ConvertError> {
        let resolution = Resolver::new(&self.config).resolve(&inventory);

        let native = inventory.len();
        let synthesized = resolution.synthesized.len();
        let variants = ManifestBuilder::merge(inventory.into_variants(), resolution.synthesized);

        let output = ManifestBuilder::new(&self.config)
            .options(self.options)
            .write(&variants, output_dir)?;

        tracing::info!(
            native,
            synthesized,
            gaps = resolution.gaps.len(),
            output = %output_dir.display(),
            "Wrote icon set"
        );

        Ok(RunReport {
            output_dir: output_dir.to_path_buf(),
            manifest: output.manifest,
            manifest_path: output.manifest_path,
            rasters: output.rasters,
            native,
            synthesized,
            gaps: resolution.gaps,
        })
    }
}

impl Default for IconsetPipeline {
    fn default() -> Self {
        Self::new(IconsetConfig::default())
    }
}
