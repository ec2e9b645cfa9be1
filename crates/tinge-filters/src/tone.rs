//! Point operations: grayscale, inversion, and sepia toning.
//!
//! These filters touch each pixel independently with no neighborhood
//! sampling, so they are cheap even at the maximum working resolution.

use image::RgbImage;

/// ITU-R 601-2 luma of an RGB triple, rounded.
///
/// `L = 0.299*R + 0.587*G + 0.114*B`, computed in integer arithmetic.
#[must_use]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted =
        299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    #[allow(clippy::cast_possible_truncation)]
    {
        ((weighted + 500) / 1000) as u8
    }
}

/// Convert to grayscale, replicated back into all three channels.
///
/// Output stays RGB so every filter produces the same pixel format.
#[must_use = "returns the filtered image"]
pub fn grayscale(image: &RgbImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        let l = luma(r, g, b);
        image::Rgb([l, l, l])
    })
}

/// Invert every channel: `c -> 255 - c`.
#[must_use = "returns the filtered image"]
pub fn invert(image: &RgbImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        image::Rgb([255 - r, 255 - g, 255 - b])
    })
}

/// Apply the standard sepia tone matrix, saturating at 255.
#[must_use = "returns the filtered image"]
pub fn sepia(image: &RgbImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        let (r, g, b) = (f32::from(r), f32::from(g), f32::from(b));

        let tr = 0.393f32.mul_add(r, 0.769f32.mul_add(g, 0.189 * b));
        let tg = 0.349f32.mul_add(r, 0.686f32.mul_add(g, 0.168 * b));
        let tb = 0.272f32.mul_add(r, 0.534f32.mul_add(g, 0.131 * b));

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let channel = |v: f32| v.min(255.0) as u8;
        image::Rgb([channel(tr), channel(tg), channel(tb)])
    })
}
