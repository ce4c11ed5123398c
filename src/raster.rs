//! Raster I/O backing the `LoadPixels` / `SavePixelsAsBitmap` black box: pixel
//! data in and out of this crate's codec is a flat `Vec<u32>`, one packed
//! RGBA pixel per element (byte 0 = R, byte 1 = G, byte 2 = B, byte 3 = A),
//! decoded and encoded with the `image` crate.

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::error::PixzError;

/// Decodes any supported image format into packed RGBA pixels, row-major,
/// top-to-bottom. Fails with `ImageLoadFailed` on a decode error or a
/// zero-dimension image.
pub fn load_pixels(path: &Path) -> Result<(u32, u32, Vec<u32>), PixzError> {
    let img = image::open(path)?.to_rgba8();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(PixzError::ImageLoadFailed(format!(
            "zero-dimension image: {}x{}",
            width, height
        )));
    }
    let pixels = img
        .pixels()
        .map(|p| u32::from_le_bytes([p[0], p[1], p[2], p[3]]))
        .collect();
    Ok((width, height, pixels))
}

/// Encodes packed RGBA pixels as a BMP file (the one format this crate's
/// batch orchestrator ever writes, per its fixed `<stem>.bmp` output naming).
pub fn save_bitmap(path: &Path, width: u32, height: u32, pixels: &[u32]) -> Result<(), PixzError> {
    if pixels.len() != (width as usize) * (height as usize) {
        return Err(PixzError::ComputeException(format!(
            "pixel count {} does not match {}x{}",
            pixels.len(),
            width,
            height
        )));
    }
    let mut bytes = Vec::with_capacity(pixels.len() * 4);
    for &p in pixels {
        bytes.extend_from_slice(&p.to_le_bytes());
    }
    let buf: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(width, height, bytes)
        .ok_or_else(|| PixzError::ComputeException("image buffer allocation mismatch".into()))?;
    buf.save_with_format(path, image::ImageFormat::Bmp)?;
    Ok(())
}

/// Decodes an image into a flat 24bpp RGB byte buffer (3 bytes per pixel,
/// no alpha), the format `blur::blur_inplace` operates on.
pub fn load_rgb(path: &Path) -> Result<(u32, u32, Vec<u8>), PixzError> {
    let img = image::open(path)?.to_rgb8();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(PixzError::ImageLoadFailed(format!(
            "zero-dimension image: {}x{}",
            width, height
        )));
    }
    Ok((width, height, img.into_raw()))
}

/// Encodes a flat 24bpp RGB byte buffer as a BMP file.
pub fn save_rgb_bitmap(path: &Path, width: u32, height: u32, rgb: &[u8]) -> Result<(), PixzError> {
    let buf: ImageBuffer<image::Rgb<u8>, Vec<u8>> = ImageBuffer::from_raw(width, height, rgb.to_vec())
        .ok_or_else(|| PixzError::ComputeException("rgb buffer allocation mismatch".into()))?;
    buf.save_with_format(path, image::ImageFormat::Bmp)?;
    Ok(())
}
