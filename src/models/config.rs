use crate::models::variant::{RequiredEntry, VariantKey};

/// Widths every macOS app icon set must provide, each at scale 1 and 2.
const MACOS_WIDTHS: [u32; 5] = [16, 32, 128, 256, 512];

/// Settings shared by the resolver and the manifest builder for one run.
///
/// Each pipeline owns its own copy, so independent conversions can run side
/// by side without any global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconsetConfig {
    /// Entries the output set must contain
    pub required: Vec<RequiredEntry>,

    /// Platform family written into every manifest record
    pub idiom: String,

    /// `info.author` of the manifest
    pub author: String,

    /// `info.version` of the manifest
    pub version: u32,

    /// File name of the manifest inside the output directory
    pub manifest_name: String,

    /// Prefix of every raster file name
    pub file_stem: String,
}

impl IconsetConfig {
    /// The macOS `AppIcon.appiconset` layout Xcode expects.
    pub fn macos() -> Self {
        let required = MACOS_WIDTHS
            .iter()
            .flat_map(|&width| [VariantKey::new(width, 1), VariantKey::new(width, 2)])
            .collect();

        Self {
            required,
            idiom: "mac".to_string(),
            author: "xcode".to_string(),
            version: 1,
            manifest_name: "Contents.json".to_string(),
            file_stem: "icon".to_string(),
        }
    }

    /// File name for a variant, e.g. `icon_128x128@2x.png`.
    ///
    /// The same string is used on disk and in the manifest record.
    pub fn filename(&self, key: VariantKey) -> String {
        let suffix = if key.scale > 1 {
            format!("@{}x", key.scale)
        } else {
            String::new()
        };
        format!(
            "{}_{}x{}{}.png",
            self.file_stem,
            key.width,
            key.height(),
            suffix
        )
    }
}

impl Default for IconsetConfig {
    fn default() -> Self {
        Self::macos()
    }
}
