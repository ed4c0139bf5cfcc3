pub mod config;
pub mod manifest;
pub mod variant;

pub use config::IconsetConfig;
pub use manifest::{Manifest, ManifestInfo, ManifestRecord};
pub use variant::{CoverageGap, Origin, RequiredEntry, Variant, VariantKey};
