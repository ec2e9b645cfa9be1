//! Upload preparation: decode, normalize, and re-encode incoming images.
//!
//! Accepts raw image bytes (PNG, JPEG, BMP, WebP) and produces a
//! normalized working copy: RGB color, neither dimension above
//! [`MAX_DIMENSION`], encoded as JPEG at [`JPEG_QUALITY`]. All filters
//! and previews operate on this working copy, so a single oversized
//! upload is paid for once.

use image::RgbImage;
use image::imageops::FilterType;

use crate::types::{Dimensions, FilterError};

/// Largest allowed width or height for the working copy, in pixels.
pub const MAX_DIMENSION: u32 = 1200;

/// JPEG quality for the working copy and for filtered output.
pub const JPEG_QUALITY: u8 = 85;

/// An upload normalized into the pipeline's working form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedImage {
    /// JPEG-encoded working copy.
    pub jpeg: Vec<u8>,
    /// Dimensions of the working copy in pixels.
    pub dimensions: Dimensions,
}

/// Decode raw image bytes into an RGB image.
///
/// Supports whatever formats the `image` crate can decode with the
/// enabled features (PNG, JPEG, BMP, WebP). Alpha is dropped.
///
/// # Errors
///
/// Returns [`FilterError::EmptyInput`] if `bytes` is empty.
/// Returns [`FilterError::ImageDecode`] if the format is unrecognized
/// or the data is corrupt.
#[must_use = "returns the decoded RGB image"]
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, FilterError> {
    if bytes.is_empty() {
        return Err(FilterError::EmptyInput);
    }

    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgb8())
}

/// Encode an RGB image as JPEG at [`JPEG_QUALITY`].
///
/// # Errors
///
/// Returns [`FilterError::JpegEncode`] if encoding fails.
pub fn encode_jpeg(image: &RgbImage) -> Result<Vec<u8>, FilterError> {
    let mut bytes = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
    image::ImageEncoder::write_image(
        encoder,
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgb8,
    )
    .map_err(|e| FilterError::JpegEncode(e.to_string()))?;
    Ok(bytes)
}

/// Compute dimensions scaled to fit within a square bound.
///
/// Dimensions already within the bound are returned unchanged (images
/// are never enlarged). Otherwise both dimensions are scaled by the
/// same factor so the larger one lands on the bound, preserving aspect
/// ratio. Results are rounded and floored at 1 pixel.
#[must_use]
pub fn fit_within(width: u32, height: u32, bound: u32) -> (u32, u32) {
    if width <= bound && height <= bound {
        return (width, height);
    }

    let scale = (f64::from(bound) / f64::from(width)).min(f64::from(bound) / f64::from(height));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = |dim: u32| ((f64::from(dim) * scale).round() as u32).max(1);
    (scaled(width), scaled(height))
}

/// Normalize an upload into the pipeline's working form.
///
/// Decodes, converts to RGB, downsizes so neither dimension exceeds
/// [`MAX_DIMENSION`] (Catmull-Rom resampling), and re-encodes as JPEG.
///
/// # Errors
///
/// Returns [`FilterError::EmptyInput`] for zero-byte input,
/// [`FilterError::ImageDecode`] for undecodable input, and
/// [`FilterError::JpegEncode`] if re-encoding fails.
pub fn prepare_upload(bytes: &[u8]) -> Result<PreparedImage, FilterError> {
    let rgb = decode_rgb(bytes)?;

    let (width, height) = fit_within(rgb.width(), rgb.height(), MAX_DIMENSION);
    let resized = if (width, height) == rgb.dimensions() {
        rgb
    } else {
        image::imageops::resize(&rgb, width, height, FilterType::CatmullRom)
    };

    let jpeg = encode_jpeg(&resized)?;
    Ok(PreparedImage {
        jpeg,
        dimensions: Dimensions { width, height },
    })
}
