use image::RgbaImage;
use std::fmt;

/// Identity of a variant: logical width (height is always equal) and scale factor.
///
/// The derived ordering compares `width` first, then `scale`, which is both
/// the candidate-selection order and the manifest order for square icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariantKey {
    pub width: u32,
    pub scale: u32,
}

impl VariantKey {
    pub const fn new(width: u32, scale: u32) -> Self {
        Self { width, scale }
    }

    pub fn height(&self) -> u32 {
        self.width
    }

    /// Side length of the raster in physical pixels.
    pub fn pixel_size(&self) -> u32 {
        self.width * self.scale
    }

    /// `true` when a raster of this key can be downscaled to `target`.
    pub fn can_serve(&self, target: VariantKey) -> bool {
        self.width >= target.width && self.scale >= target.scale
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}@{}x", self.width, self.height(), self.scale)
    }
}

/// An entry of the required-size table.
pub type RequiredEntry = VariantKey;

/// Where a variant's pixels came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Native,
    Synthesized,
}

/// One raster at a specific `(width, scale)`.
#[derive(Debug, Clone)]
pub struct Variant {
    pub key: VariantKey,
    pub pixels: RgbaImage,
    pub origin: Origin,
}

impl Variant {
    pub fn native(key: VariantKey, pixels: RgbaImage) -> Self {
        Self {
            key,
            pixels,
            origin: Origin::Native,
        }
    }

    pub fn synthesized(key: VariantKey, pixels: RgbaImage) -> Self {
        Self {
            key,
            pixels,
            origin: Origin::Synthesized,
        }
    }

    /// Sort tuple for the manifest: `(width, height, scale)`.
    pub fn sort_key(&self) -> (u32, u32, u32) {
        (self.key.width, self.key.height(), self.key.scale)
    }
}

/// A required entry with no source large enough to synthesize it from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageGap {
    pub required: RequiredEntry,
}

impl fmt::Display for CoverageGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no source for {}", self.required)
    }
}
