//! Brightness and contrast enhancement.
//!
//! Both operations follow the interpolation model of classic image
//! enhancers: brightness interpolates between a black image and the
//! original, contrast between a solid mid-gray (the image's mean luma)
//! and the original. A factor of 1.0 is the identity, factors above 1.0
//! strengthen the effect.

use image::RgbImage;

use crate::tone::luma;

/// Factor used by the one-click brightness and contrast filters (+50%).
pub const BOOST_FACTOR: f32 = 1.5;

/// Scale every channel by `factor`.
///
/// A factor of 1.0 returns the image unchanged; values above brighten,
/// values below darken. Results saturate at 255.
#[must_use = "returns the enhanced image"]
pub fn brightness(image: &RgbImage, factor: f32) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y).0;
        image::Rgb(pixel.map(|c| scale_channel(c, factor)))
    })
}

/// Mean luma of the image, rounded to the nearest integer.
///
/// This is the gray point that [`contrast`] pivots around. Returns 0
/// for an empty image.
#[must_use]
pub fn mean_luma(image: &RgbImage) -> u8 {
    let count = u64::from(image.width()) * u64::from(image.height());
    if count == 0 {
        return 0;
    }

    let sum: u64 = image
        .pixels()
        .map(|p| {
            let [r, g, b] = p.0;
            u64::from(luma(r, g, b))
        })
        .sum();

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    {
        ((sum as f64 / count as f64) + 0.5) as u8
    }
}

/// Push every channel away from the image's mean luma by `factor`.
///
/// `out = mean + (in - mean) * factor`, clamped to `0..=255`. A factor
/// of 1.0 is the identity; below 1.0 flattens toward gray.
#[must_use = "returns the enhanced image"]
pub fn contrast(image: &RgbImage, factor: f32) -> RgbImage {
    let mean = f32::from(mean_luma(image));

    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y).0;
        image::Rgb(pixel.map(|c| {
            let value = (f32::from(c) - mean).mul_add(factor, mean);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                value.round().clamp(0.0, 255.0) as u8
            }
        }))
    })
}

/// Scale one channel value, rounding and saturating at 255.
fn scale_channel(channel: u8, factor: f32) -> u8 {
    let value = f32::from(channel) * factor;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        value.round().clamp(0.0, 255.0) as u8
    }
}
