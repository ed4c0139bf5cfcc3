pub mod inventory;
pub mod manifest_builder;
pub mod pipeline;
pub mod resolver;

pub use inventory::Inventory;
pub use manifest_builder::{BuildOutput, ManifestBuilder, WriteOptions};
pub use pipeline::{IconsetPipeline, RunReport};
pub use resolver::{select_source, Resolution, ResolutionPlan, Resolver, Synthesis};
