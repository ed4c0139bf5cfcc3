use crate::error::RenderError;
use image::RgbaImage;
use std::io::Cursor;

/// Encode an RGBA raster as an 8-bit RGBA PNG.
///
/// With `optimize` the image is encoded with fast settings first and then
/// re-compressed losslessly by oxipng (zopfli + adaptive filter selection).
pub fn encode_rgba_png(image: &RgbaImage, optimize: bool) -> Result<Vec<u8>, RenderError> {
    let compression = if optimize {
        png::Compression::Fast
    } else {
        png::Compression::Default
    };
    let png_bytes = encode(image, compression)?;

    if !optimize {
        return Ok(png_bytes);
    }

    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    );
    match optimized {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            tracing::debug!(%e, "oxipng failed, keeping unoptimized PNG");
            Ok(png_bytes)
        }
    }
}

fn encode(image: &RgbaImage, compression: png::Compression) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(compression);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.as_raw())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
