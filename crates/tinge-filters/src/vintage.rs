//! Vintage film look: warmth, grain, vignette, contrast, soft focus.
//!
//! The effect chain runs in a fixed order: color temperature, film
//! grain, vignette, contrast, then a soft-focus blur whose strength
//! rises as contrast falls. Parameters are clamped to their documented
//! ranges before use, so raw slider values are safe to pass through.
//!
//! Grain randomness comes from a caller-supplied [`Rng`] so results are
//! reproducible under a seeded generator.

use image::{GrayImage, RgbImage};
use rand::Rng;

use crate::types::VintageParams;

/// Per-pixel grain noise is drawn uniformly from this symmetric range
/// before scaling by the grain parameter.
const GRAIN_NOISE_MAX: i32 = 30;

/// Vignette darkening at the image corner when `vignette == 1.0`.
const VIGNETTE_STRENGTH: f64 = 0.7;

/// Contrast factor applied during the contrast step, relative to the
/// parameter (slightly flattening at the default of 1.0).
const CONTRAST_BASE: f32 = 0.8;

/// Apply the vintage film effect.
///
/// The same noise sample is added to all three channels of a pixel, so
/// grain is luminance noise rather than chroma speckle.
#[must_use = "returns the filtered image"]
pub fn vintage_film<R: Rng + ?Sized>(
    image: &RgbImage,
    params: &VintageParams,
    rng: &mut R,
) -> RgbImage {
    let params = params.clamped();

    let warmed = apply_warmth(image, params.warmth);
    let grained = apply_grain(&warmed, params.grain, rng);
    let vignetted = apply_vignette(&grained, params.vignette.into());
    let contrasted = crate::enhance::contrast(&vignetted, CONTRAST_BASE * params.contrast);

    // Soft focus: blur harder when contrast is low.
    let sigma = 0.5 * (2.0 - params.contrast);
    gaussian_blur_rgb(&contrasted, sigma)
}

/// Shift color temperature: boost red and green, pull blue.
fn apply_warmth(image: &RgbImage, warmth: f32) -> RgbImage {
    let r_gain = 1.2 * warmth;
    let g_gain = 1.1 * warmth;
    let b_gain = 0.8 / warmth;

    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        image::Rgb([
            gain_channel(r, r_gain),
            gain_channel(g, g_gain),
            gain_channel(b, b_gain),
        ])
    })
}

/// Add uniform luminance noise scaled by `grain`.
fn apply_grain<R: Rng + ?Sized>(image: &RgbImage, grain: f32, rng: &mut R) -> RgbImage {
    if grain <= 0.0 {
        return image.clone();
    }

    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        #[allow(clippy::cast_precision_loss)]
        let noise = rng.gen_range(-GRAIN_NOISE_MAX..=GRAIN_NOISE_MAX) as f32 * grain;
        for channel in &mut pixel.0 {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                *channel = (f32::from(*channel) + noise).clamp(0.0, 255.0) as u8;
            }
        }
    }
    out
}

/// Darken pixels by their normalized distance from the image center.
fn apply_vignette(image: &RgbImage, vignette: f64) -> RgbImage {
    if vignette <= 0.0 {
        return image.clone();
    }

    let center_x = f64::from(image.width()) / 2.0;
    let center_y = f64::from(image.height()) / 2.0;
    let max_distance = center_x.hypot(center_y);
    if max_distance <= 0.0 {
        return image.clone();
    }

    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let distance = (f64::from(x) - center_x).hypot(f64::from(y) - center_y);
        let factor = (1.0 - (distance / max_distance) * VIGNETTE_STRENGTH * vignette).max(0.0);

        let pixel = image.get_pixel(x, y).0;
        image::Rgb(pixel.map(|c| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                (f64::from(c) * factor) as u8
            }
        }))
    })
}

/// Scale one channel, truncating and saturating at 255.
fn gain_channel(channel: u8, gain: f32) -> u8 {
    let value = f32::from(channel) * gain;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        value.clamp(0.0, 255.0) as u8
    }
}

/// Apply Gaussian blur to an RGB image by blurring each channel
/// independently.
///
/// `imageproc::filter::gaussian_blur_f32` only accepts `GrayImage`, so
/// this splits the image into three single-channel images, blurs each,
/// and reassembles. Gaussian blur is a linear per-channel operation, so
/// the result equals blurring in color space. Non-positive sigma
/// returns the image unchanged.
#[must_use = "returns the blurred image"]
pub fn gaussian_blur_rgb(image: &RgbImage, sigma: f32) -> RgbImage {
    if sigma <= 0.0 {
        return image.clone();
    }

    let (w, h) = (image.width(), image.height());

    let channels: [GrayImage; 3] = std::array::from_fn(|c| {
        GrayImage::from_fn(w, h, |x, y| image::Luma([image.get_pixel(x, y).0[c]]))
    });

    let blurred: [GrayImage; 3] =
        std::array::from_fn(|c| imageproc::filter::gaussian_blur_f32(&channels[c], sigma));

    RgbImage::from_fn(w, h, |x, y| {
        image::Rgb([
            blurred[0].get_pixel(x, y).0[0],
            blurred[1].get_pixel(x, y).0[0],
            blurred[2].get_pixel(x, y).0[0],
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use crate::types::VintageParams;

    fn mid_gray(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |_, _| image::Rgb([128, 128, 128]))
    }

    #[test]
    fn output_dimensions_match_input() {
        let img = mid_gray(17, 31);
        let mut rng = SmallRng::seed_from_u64(7);
        let out = vintage_film(&img, &VintageParams::default(), &mut rng);
        assert_eq!(out.dimensions(), (17, 31));
    }

    #[test]
    fn same_seed_same_output() {
        let img = mid_gray(16, 16);
        let params = VintageParams::default();
        let a = vintage_film(&img, &params, &mut SmallRng::seed_from_u64(42));
        let b = vintage_film(&img, &params, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn warmth_orders_channels() {
        let img = mid_gray(8, 8);
        let warmed = apply_warmth(&img, 1.2);
        let [r, g, b] = warmed.get_pixel(4, 4).0;
        assert!(
            r > g && g > b,
            "warmth must boost red over green over blue, got R={r} G={g} B={b}",
        );
    }

    #[test]
    fn cool_warmth_favors_blue_retention() {
        let img = mid_gray(8, 8);
        let warm = apply_warmth(&img, 1.4);
        let cool = apply_warmth(&img, 0.6);
        assert!(cool.get_pixel(4, 4).0[2] > warm.get_pixel(4, 4).0[2]);
    }

    #[test]
    fn zero_grain_adds_no_noise() {
        let img = mid_gray(8, 8);
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(apply_grain(&img, 0.0, &mut rng), img);
    }

    #[test]
    fn grain_perturbs_pixels_within_bounds() {
        let img = mid_gray(16, 16);
        let mut rng = SmallRng::seed_from_u64(3);
        let grained = apply_grain(&img, 1.0, &mut rng);
        let mut changed = false;
        for pixel in grained.pixels() {
            let value = i32::from(pixel.0[0]);
            assert!(
                (value - 128).abs() <= GRAIN_NOISE_MAX,
                "noise must stay within ±{GRAIN_NOISE_MAX}, got {value}",
            );
            if value != 128 {
                changed = true;
            }
        }
        assert!(changed, "grain at strength 1.0 must perturb some pixels");
    }

    #[test]
    fn grain_is_luminance_noise() {
        // All three channels of a pixel receive the same noise sample.
        let img = mid_gray(8, 8);
        let mut rng = SmallRng::seed_from_u64(9);
        let grained = apply_grain(&img, 1.0, &mut rng);
        for pixel in grained.pixels() {
            let [r, g, b] = pixel.0;
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn vignette_darkens_corners_more_than_center() {
        let img = mid_gray(21, 21);
        let out = apply_vignette(&img, 1.0);
        let center = out.get_pixel(10, 10).0[0];
        let corner = out.get_pixel(0, 0).0[0];
        assert!(
            corner < center,
            "corner ({corner}) must be darker than center ({center})",
        );
    }

    #[test]
    fn zero_vignette_is_identity() {
        let img = mid_gray(9, 9);
        assert_eq!(apply_vignette(&img, 0.0), img);
    }

    #[test]
    fn strong_vignette_never_underflows() {
        // At vignette 3.0 the corner factor is negative; channels must
        // clamp to 0 instead of wrapping.
        let img = mid_gray(31, 31);
        let out = apply_vignette(&img, 3.0);
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn out_of_range_params_are_clamped_not_rejected() {
        let img = mid_gray(8, 8);
        let wild = VintageParams {
            warmth: 50.0,
            grain: -2.0,
            vignette: 99.0,
            contrast: 0.0,
        };
        let tame = wild.clamped();
        let mut rng_a = SmallRng::seed_from_u64(5);
        let mut rng_b = SmallRng::seed_from_u64(5);
        assert_eq!(
            vintage_film(&img, &wild, &mut rng_a),
            vintage_film(&img, &tame, &mut rng_b),
        );
    }

    #[test]
    fn blur_zero_sigma_returns_identical_image() {
        let img = mid_gray(8, 8);
        assert_eq!(gaussian_blur_rgb(&img, 0.0), img);
    }

    #[test]
    fn blur_smooths_sharp_color_edge() {
        let img = RgbImage::from_fn(10, 10, |x, _| {
            if x < 5 {
                image::Rgb([255, 0, 0])
            } else {
                image::Rgb([0, 0, 255])
            }
        });
        let blurred = gaussian_blur_rgb(&img, 2.0);
        let left = blurred.get_pixel(4, 5).0[0];
        let right = blurred.get_pixel(5, 5).0[0];
        assert!(left < 255, "red must bleed across the boundary, got {left}");
        assert!(right > 0, "red must bleed across the boundary, got {right}");
    }
}
