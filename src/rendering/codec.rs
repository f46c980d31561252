use std::io::Cursor;
use std::path::Path;

use image::ImageReader;
use raster_ops::{GrayBuffer, Rgb, RgbBuffer};

use crate::error::CodecError;

/// Decode any supported raster file into an RGB buffer.
///
/// The format is sniffed from the file contents, so the extension does not
/// have to match. Alpha is discarded and palette or grayscale sources are
/// expanded to three channels.
pub fn decode_rgb(path: &Path) -> Result<RgbBuffer, CodecError> {
    let read_error = |source: std::io::Error| CodecError::Read {
        path: path.to_path_buf(),
        source,
    };
    let reader = ImageReader::open(path)
        .map_err(read_error)?
        .with_guessed_format()
        .map_err(read_error)?;
    let decoded = reader.decode().map_err(|source| CodecError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgb = decoded.into_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    let pixels = rgb
        .into_raw()
        .chunks_exact(3)
        .map(|px| Rgb::new(px[0], px[1], px[2]))
        .collect();

    let buffer = RgbBuffer::from_vec(width, height, pixels)?;
    tracing::debug!(path = %path.display(), width, height, "Decoded input image");
    Ok(buffer)
}

/// Encode a single-channel buffer as an 8-bit grayscale PNG.
pub fn gray_png_bytes(image: &GrayBuffer) -> Result<Vec<u8>, CodecError> {
    let too_large = || CodecError::TooLarge {
        width: image.width(),
        height: image.height(),
    };
    let width = u32::try_from(image.width()).map_err(|_| too_large())?;
    let height = u32::try_from(image.height()).map_err(|_| too_large())?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.as_slice())
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode `image` with [`gray_png_bytes`] and write it to `path`.
pub fn encode_gray_png(image: &GrayBuffer, path: &Path) -> Result<(), CodecError> {
    let bytes = gray_png_bytes(image)?;
    std::fs::write(path, &bytes).map_err(|source| CodecError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote PNG");
    Ok(())
}
