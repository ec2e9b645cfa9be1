//! Fixed convolution kernels for the classic filter set.
//!
//! Each kernel is applied as a correlation over a clamp-to-edge
//! neighborhood, per channel: `out = sum(weight * sample) / scale + offset`,
//! rounded and clamped to `0..=255`. A kernel whose weights sum to its
//! scale leaves uniform regions untouched; `contour` and `emboss` sum to
//! zero and rely on their offset instead.

use image::RgbImage;

/// A square convolution kernel with PIL-style scale and offset.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// Side length of the kernel (3 or 5).
    pub size: u32,
    /// Row-major weights, `size * size` entries.
    pub weights: &'static [i32],
    /// Divisor applied to the weighted sum.
    pub scale: i32,
    /// Constant added after division.
    pub offset: i32,
}

/// Classic ring blur: averages the 16 border pixels of a 5x5 window.
pub const BLUR: Kernel = Kernel {
    size: 5,
    #[rustfmt::skip]
    weights: &[
        1, 1, 1, 1, 1,
        1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
        1, 1, 1, 1, 1,
    ],
    scale: 16,
    offset: 0,
};

/// Laplacian outline on a white background.
pub const CONTOUR: Kernel = Kernel {
    size: 3,
    #[rustfmt::skip]
    weights: &[
        -1, -1, -1,
        -1,  8, -1,
        -1, -1, -1,
    ],
    scale: 1,
    offset: 255,
};

/// Detail boost: mild center-weighted sharpening on the 4-neighborhood.
pub const DETAIL: Kernel = Kernel {
    size: 3,
    #[rustfmt::skip]
    weights: &[
         0, -1,  0,
        -1, 10, -1,
         0, -1,  0,
    ],
    scale: 6,
    offset: 0,
};

/// Edge enhancement: strong center against the full 8-neighborhood.
pub const EDGE_ENHANCE: Kernel = Kernel {
    size: 3,
    #[rustfmt::skip]
    weights: &[
        -1, -1, -1,
        -1, 10, -1,
        -1, -1, -1,
    ],
    scale: 2,
    offset: 0,
};

/// Directional relief shading biased to mid-gray.
pub const EMBOSS: Kernel = Kernel {
    size: 3,
    #[rustfmt::skip]
    weights: &[
        -1, 0, 0,
         0, 1, 0,
         0, 0, 0,
    ],
    scale: 1,
    offset: 128,
};

/// Strong sharpening.
pub const SHARPEN: Kernel = Kernel {
    size: 3,
    #[rustfmt::skip]
    weights: &[
        -2, -2, -2,
        -2, 32, -2,
        -2, -2, -2,
    ],
    scale: 16,
    offset: 0,
};

/// Gentle smoothing.
pub const SMOOTH: Kernel = Kernel {
    size: 3,
    #[rustfmt::skip]
    weights: &[
        1, 1, 1,
        1, 5, 1,
        1, 1, 1,
    ],
    scale: 13,
    offset: 0,
};

/// Apply a kernel to an RGB image, channel by channel.
///
/// Samples outside the image are clamped to the nearest edge pixel, so
/// output dimensions equal input dimensions and borders are filtered
/// rather than left untouched.
#[must_use = "returns the filtered image"]
pub fn convolve_rgb(image: &RgbImage, kernel: &Kernel) -> RgbImage {
    debug_assert_eq!(
        kernel.weights.len(),
        (kernel.size * kernel.size) as usize,
        "kernel weight count must match its size"
    );
    debug_assert_ne!(kernel.scale, 0, "kernel scale must be non-zero");

    let (width, height) = image.dimensions();
    let radius = i64::from(kernel.size / 2);

    RgbImage::from_fn(width, height, |x, y| {
        let mut sums = [0i32; 3];
        let mut index = 0;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let weight = kernel.weights[index];
                index += 1;
                if weight == 0 {
                    continue;
                }
                let sx = clamp_coord(i64::from(x) + dx, width);
                let sy = clamp_coord(i64::from(y) + dy, height);
                let pixel = image.get_pixel(sx, sy);
                for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
                    *sum += weight * i32::from(channel);
                }
            }
        }

        let mut out = [0u8; 3];
        for (dst, sum) in out.iter_mut().zip(sums) {
            #[allow(clippy::cast_precision_loss)]
            let value = sum as f32 / kernel.scale as f32 + kernel.offset as f32;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                *dst = value.round().clamp(0.0, 255.0) as u8;
            }
        }
        image::Rgb(out)
    })
}

/// Clamp a signed coordinate into `0..len`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_coord(coord: i64, len: u32) -> u32 {
    coord.clamp(0, i64::from(len) - 1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every kernel that is not offset-based must preserve uniform regions,
    /// which requires its weights to sum to its scale.
    #[test]
    fn averaging_kernels_sum_to_scale() {
        for kernel in [&BLUR, &DETAIL, &EDGE_ENHANCE, &SHARPEN, &SMOOTH] {
            let sum: i32 = kernel.weights.iter().sum();
            assert_eq!(
                sum, kernel.scale,
                "kernel weights must sum to scale {}, got {sum}",
                kernel.scale,
            );
        }
    }

    #[test]
    fn offset_kernels_sum_to_zero() {
        for kernel in [&CONTOUR, &EMBOSS] {
            let sum: i32 = kernel.weights.iter().sum();
            assert_eq!(sum, 0, "offset kernel weights must cancel, got {sum}");
        }
    }

    #[test]
    fn kernel_sizes_match_weight_counts() {
        for kernel in [
            &BLUR,
            &CONTOUR,
            &DETAIL,
            &EDGE_ENHANCE,
            &EMBOSS,
            &SHARPEN,
            &SMOOTH,
        ] {
            assert_eq!(
                kernel.weights.len(),
                (kernel.size * kernel.size) as usize,
            );
        }
    }

    fn uniform(value: u8) -> RgbImage {
        RgbImage::from_fn(9, 9, |_, _| image::Rgb([value, value, value]))
    }

    #[test]
    fn blur_preserves_uniform_image() {
        let img = uniform(77);
        let out = convolve_rgb(&img, &BLUR);
        assert_eq!(img, out);
    }

    #[test]
    fn smooth_preserves_uniform_image() {
        let img = uniform(200);
        assert_eq!(convolve_rgb(&img, &SMOOTH), img);
    }

    #[test]
    fn contour_turns_uniform_image_white() {
        let out = convolve_rgb(&uniform(90), &CONTOUR);
        for pixel in out.pixels() {
            assert_eq!(pixel.0, [255, 255, 255]);
        }
    }

    #[test]
    fn emboss_turns_uniform_image_mid_gray() {
        let out = convolve_rgb(&uniform(90), &EMBOSS);
        for pixel in out.pixels() {
            assert_eq!(pixel.0, [128, 128, 128]);
        }
    }

    #[test]
    fn output_dimensions_match_input() {
        let img = RgbImage::new(17, 31);
        let out = convolve_rgb(&img, &BLUR);
        assert_eq!(out.dimensions(), (17, 31));
    }

    #[test]
    fn blur_softens_a_sharp_edge() {
        // Left half black, right half white.
        let img = RgbImage::from_fn(10, 10, |x, _| {
            if x < 5 {
                image::Rgb([0, 0, 0])
            } else {
                image::Rgb([255, 255, 255])
            }
        });
        let out = convolve_rgb(&img, &BLUR);
        let near_edge = out.get_pixel(4, 5).0[0];
        assert!(
            near_edge > 0 && near_edge < 255,
            "expected intermediate value at the boundary, got {near_edge}",
        );
    }

    #[test]
    fn sharpen_increases_edge_contrast() {
        let img = RgbImage::from_fn(10, 10, |x, _| {
            if x < 5 {
                image::Rgb([100, 100, 100])
            } else {
                image::Rgb([150, 150, 150])
            }
        });
        let out = convolve_rgb(&img, &SHARPEN);
        // The dark side of the edge gets darker, the bright side brighter.
        assert!(out.get_pixel(4, 5).0[0] < 100);
        assert!(out.get_pixel(5, 5).0[0] > 150);
    }

    #[test]
    fn channels_are_filtered_independently() {
        let img = RgbImage::from_fn(9, 9, |_, _| image::Rgb([10, 120, 240]));
        let out = convolve_rgb(&img, &SMOOTH);
        for pixel in out.pixels() {
            assert_eq!(pixel.0, [10, 120, 240]);
        }
    }
}
