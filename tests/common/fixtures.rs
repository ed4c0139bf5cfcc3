//! Test fixtures: real `.icns` containers built with the icns crate.

use icns::{IconFamily, IconType, Image, PixelFormat};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// One element per required (width, scale) entry.
pub const ALL_REQUIRED: [IconType; 10] = [
    IconType::RGBA32_16x16,
    IconType::RGBA32_16x16_2x,
    IconType::RGBA32_32x32,
    IconType::RGBA32_32x32_2x,
    IconType::RGBA32_128x128,
    IconType::RGBA32_128x128_2x,
    IconType::RGBA32_256x256,
    IconType::RGBA32_256x256_2x,
    IconType::RGBA32_512x512,
    IconType::RGBA32_512x512_2x,
];

/// An opaque diagonal gradient, so resampling has something to chew on.
pub fn gradient(icon_type: IconType) -> Image {
    let width = icon_type.pixel_width();
    let height = icon_type.pixel_height();
    let mut image = Image::new(PixelFormat::RGBA, width, height);
    for (i, pixel) in image.data_mut().chunks_exact_mut(4).enumerate() {
        let x = (i as u32 % width) * 255 / width.max(1);
        let y = (i as u32 / width) * 255 / height.max(1);
        pixel.copy_from_slice(&[x as u8, y as u8, 128, 255]);
    }
    image
}

/// Write an `.icns` file holding one gradient image per icon type.
pub fn write_icns(dir: &Path, name: &str, types: &[IconType]) -> PathBuf {
    let mut family = IconFamily::new();
    for &icon_type in types {
        family
            .add_icon_with_type(&gradient(icon_type), icon_type)
            .expect("add icon to family");
    }

    let path = dir.join(name);
    let file = BufWriter::new(File::create(&path).expect("create icns file"));
    family.write(file).expect("write icns file");
    path
}
