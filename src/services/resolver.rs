use image::imageops::{self, FilterType};
use image::RgbaImage;
use rayon::prelude::*;
use std::collections::BTreeSet;

use crate::models::{CoverageGap, IconsetConfig, RequiredEntry, Variant, VariantKey};
use crate::services::Inventory;

/// A decision to build `target` by downscaling the native `source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Synthesis {
    pub target: VariantKey,
    pub source: VariantKey,
}

/// What the resolver intends to do, before any pixels are touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionPlan {
    pub synthesize: Vec<Synthesis>,
    pub gaps: Vec<CoverageGap>,
}

/// Outcome of [`Resolver::resolve`].
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub synthesized: Vec<Variant>,
    pub gaps: Vec<CoverageGap>,
}

/// Pick the smallest variant that can be downscaled to `target`.
///
/// A candidate must be at least as wide and at least as dense as the target.
/// Among candidates the lowest `(width, scale)` wins, so the result does not
/// depend on the order of `available`.
pub fn select_source(
    available: impl IntoIterator<Item = VariantKey>,
    target: VariantKey,
) -> Option<VariantKey> {
    available
        .into_iter()
        .filter(|candidate| candidate.can_serve(target))
        .min_by_key(|candidate| (candidate.width, candidate.scale))
}

/// Fills the required-size table from whatever the inventory provides.
pub struct Resolver {
    required: Vec<RequiredEntry>,
}

impl Resolver {
    pub fn new(config: &IconsetConfig) -> Self {
        Self {
            required: config.required.clone(),
        }
    }

    /// Decide, for every required entry missing from `inventory`, which
    /// native variant to synthesize it from.
    pub fn plan(&self, inventory: &Inventory) -> ResolutionPlan {
        let mut plan = ResolutionPlan::default();
        let mut seen = BTreeSet::new();

        for &target in &self.required {
            if inventory.contains(target) || !seen.insert(target) {
                continue;
            }
            match select_source(inventory.keys(), target) {
                Some(source) => {
                    tracing::debug!(%target, %source, "Synthesizing missing variant");
                    plan.synthesize.push(Synthesis { target, source });
                }
                None => plan.gaps.push(CoverageGap { required: target }),
            }
        }

        plan
    }

    /// Plan and then resample every missing variant.
    ///
    /// Native variants are left untouched; only the new ones are returned.
    pub fn resolve(&self, inventory: &Inventory) -> Resolution {
        let plan = self.plan(inventory);

        for gap in &plan.gaps {
            tracing::warn!(required = %gap.required, "Coverage gap: no source large enough");
        }

        let synthesized = plan
            .synthesize
            .par_iter()
            .filter_map(|step| {
                inventory
                    .get(step.source)
                    .map(|source| Variant::synthesized(step.target, downscale(source, step.target)))
            })
            .collect();

        Resolution {
            synthesized,
            gaps: plan.gaps,
        }
    }
}

/// Resample `source` to exactly the physical size of `target`.
fn downscale(source: &RgbaImage, target: VariantKey) -> RgbaImage {
    let size = target.pixel_size();
    if source.dimensions() == (size, size) {
        return source.clone();
    }
    imageops::resize(source, size, size, FilterType::Lanczos3)
}
