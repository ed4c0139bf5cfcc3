//! appiconset - icns to Xcode icon set
//!
//! Turns an `.icns` container into the full set of PNG variants an
//! `AppIcon.appiconset` needs, synthesizing missing sizes by downscaling
//! the closest larger source, and writes the matching `Contents.json`.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use error::{ConvertError, RenderError};
pub use models::{IconsetConfig, Manifest, Variant, VariantKey};
pub use services::{IconsetPipeline, RunReport, WriteOptions};
