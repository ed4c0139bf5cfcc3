use icns::{IconFamily, PixelFormat};
use image::RgbaImage;
use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;

use crate::error::ConvertError;
use crate::models::{Variant, VariantKey};

/// The variants physically present in an icon container, decoded to RGBA.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    rasters: BTreeMap<VariantKey, RgbaImage>,
}

impl Inventory {
    /// Read and decode every image in an `.icns` file.
    ///
    /// The whole file is read up front, so I/O failures surface as
    /// `ContainerRead` and an unparsable element directory as
    /// `ContainerFormat`. Elements that cannot be decoded (e.g. JPEG 2000)
    /// are skipped, leaving their key free for synthesis.
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        let bytes = std::fs::read(path).map_err(|source| ConvertError::ContainerRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes, path)
    }

    /// Decode an in-memory `.icns` file. `path` is only used in errors.
    pub fn from_bytes(bytes: &[u8], path: &Path) -> Result<Self, ConvertError> {
        let family =
            IconFamily::read(Cursor::new(bytes)).map_err(|e| ConvertError::ContainerFormat {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut rasters = BTreeMap::new();
        for icon_type in family.available_icons() {
            let key = VariantKey::new(icon_type.screen_width(), icon_type.pixel_density());
            if rasters.contains_key(&key) {
                tracing::debug!(?icon_type, %key, "Duplicate element for variant, keeping first");
                continue;
            }

            let image = match family.get_icon_with_type(icon_type) {
                Ok(image) => image.convert_to(PixelFormat::RGBA),
                Err(e) => {
                    tracing::warn!(?icon_type, %e, "Skipping element that cannot be decoded");
                    continue;
                }
            };
            let (width, height) = (image.width(), image.height());
            let Some(raster) = RgbaImage::from_raw(width, height, image.into_data().into_vec())
            else {
                tracing::warn!(?icon_type, width, height, "Skipping element with short pixel buffer");
                continue;
            };

            tracing::debug!(%key, width, height, "Found native variant");
            rasters.insert(key, raster);
        }

        Ok(Self { rasters })
    }

    /// Build an inventory from already-decoded rasters.
    ///
    /// Later entries replace earlier ones with the same key.
    pub fn from_rasters(rasters: impl IntoIterator<Item = (VariantKey, RgbaImage)>) -> Self {
        Self {
            rasters: rasters.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rasters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rasters.is_empty()
    }

    pub fn contains(&self, key: VariantKey) -> bool {
        self.rasters.contains_key(&key)
    }

    pub fn get(&self, key: VariantKey) -> Option<&RgbaImage> {
        self.rasters.get(&key)
    }

    /// Keys in ascending `(width, scale)` order.
    pub fn keys(&self) -> impl Iterator<Item = VariantKey> + '_ {
        self.rasters.keys().copied()
    }

    /// Hand the decoded rasters over as native variants.
    pub fn into_variants(self) -> Vec<Variant> {
        self.rasters
            .into_iter()
            .map(|(key, pixels)| Variant::native(key, pixels))
            .collect()
    }
}
