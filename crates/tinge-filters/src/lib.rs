//! tinge-filters: Pure image filter pipeline (sans-IO).
//!
//! Takes JPEG/PNG/BMP/WebP bytes and a [`FilterRequest`], and produces
//! filtered JPEG bytes: decode -> filter -> encode, with per-phase
//! timing. Thirteen filters are available, from one-click point
//! operations (grayscale, invert, sepia) through convolutions (blur,
//! contour, emboss, ...) to the parameterized vintage film effect.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and returns structured data. All browser interaction
//! lives in `tinge-io`.

pub mod diagnostics;
pub mod enhance;
pub mod intake;
pub mod kernel;
pub mod tone;
pub mod types;
pub mod vintage;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

pub use diagnostics::RunDiagnostics;
pub use intake::{MAX_DIMENSION, PreparedImage, prepare_upload};
pub use types::{Dimensions, FilterError, FilterKind, FilterRequest, RgbImage, VintageParams};

/// Result of running a complete filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRun {
    /// JPEG-encoded filtered output.
    pub jpeg: Vec<u8>,
    /// Output dimensions in pixels (always equal to the input's).
    pub dimensions: Dimensions,
    /// Per-phase wall-clock timing for this run.
    pub diagnostics: RunDiagnostics,
}

/// Apply a filter to a decoded image, drawing grain noise from `rng`.
///
/// The `rng` is only consulted by [`FilterKind::VintageFilm`]; every
/// other filter is deterministic. Use this entry point in tests that
/// need reproducible grain.
#[must_use = "returns the filtered image"]
pub fn apply_with_rng<R: Rng + ?Sized>(
    image: &RgbImage,
    request: &FilterRequest,
    rng: &mut R,
) -> RgbImage {
    match request.kind {
        FilterKind::Grayscale => tone::grayscale(image),
        FilterKind::Blur => kernel::convolve_rgb(image, &kernel::BLUR),
        FilterKind::Contour => kernel::convolve_rgb(image, &kernel::CONTOUR),
        FilterKind::Detail => kernel::convolve_rgb(image, &kernel::DETAIL),
        FilterKind::EdgeEnhance => kernel::convolve_rgb(image, &kernel::EDGE_ENHANCE),
        FilterKind::Emboss => kernel::convolve_rgb(image, &kernel::EMBOSS),
        FilterKind::Sharpen => kernel::convolve_rgb(image, &kernel::SHARPEN),
        FilterKind::Smooth => kernel::convolve_rgb(image, &kernel::SMOOTH),
        FilterKind::Brightness => enhance::brightness(image, enhance::BOOST_FACTOR),
        FilterKind::Contrast => enhance::contrast(image, enhance::BOOST_FACTOR),
        FilterKind::Invert => tone::invert(image),
        FilterKind::Sepia => tone::sepia(image),
        FilterKind::VintageFilm => vintage::vintage_film(image, &request.vintage, rng),
    }
}

/// Apply a filter to a decoded image with entropy-seeded grain.
#[must_use = "returns the filtered image"]
pub fn apply(image: &RgbImage, request: &FilterRequest) -> RgbImage {
    let mut rng = SmallRng::from_entropy();
    apply_with_rng(image, request, &mut rng)
}

/// Run the full filter pass: decode, filter, encode.
///
/// Takes the working-copy bytes produced by [`prepare_upload`] (any
/// decodable image works) and returns the filtered JPEG plus timing.
///
/// # Errors
///
/// Returns [`FilterError::EmptyInput`] if `bytes` is empty,
/// [`FilterError::ImageDecode`] if the bytes cannot be decoded, and
/// [`FilterError::JpegEncode`] if the output cannot be encoded.
pub fn process(bytes: &[u8], request: &FilterRequest) -> Result<FilterRun, FilterError> {
    let (decoded, decode_time) = diagnostics::time(|| intake::decode_rgb(bytes));
    let decoded = decoded?;
    let dimensions = Dimensions {
        width: decoded.width(),
        height: decoded.height(),
    };

    let (filtered, filter_time) = diagnostics::time(|| apply(&decoded, request));

    let (jpeg, encode_time) = diagnostics::time(|| intake::encode_jpeg(&filtered));
    let jpeg = jpeg?;

    Ok(FilterRun {
        jpeg,
        dimensions,
        diagnostics: RunDiagnostics {
            decode: decode_time,
            filter: filter_time,
            encode: encode_time,
        },
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Helper: a small PNG with a red/blue vertical split.
    fn split_png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                image::Rgba([255, 0, 0, 255])
            } else {
                image::Rgba([0, 0, 255, 255])
            }
        });
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
        buf
    }

    #[test]
    fn process_empty_input() {
        let result = process(&[], &FilterRequest::default());
        assert!(matches!(result, Err(FilterError::EmptyInput)));
    }

    #[test]
    fn process_corrupt_input() {
        let result = process(&[0xFF, 0x00], &FilterRequest::default());
        assert!(matches!(result, Err(FilterError::ImageDecode(_))));
    }

    #[test]
    fn process_preserves_dimensions_for_every_filter() {
        let png = split_png(24, 16);
        for kind in FilterKind::ALL {
            let request = FilterRequest {
                kind,
                ..FilterRequest::default()
            };
            let run = process(&png, &request).unwrap();
            assert_eq!(
                run.dimensions,
                Dimensions {
                    width: 24,
                    height: 16
                },
                "filter {kind} changed dimensions",
            );

            // Output must itself be a decodable JPEG of the same size.
            let reloaded = image::load_from_memory(&run.jpeg).unwrap();
            assert_eq!((reloaded.width(), reloaded.height()), (24, 16));
        }
    }

    #[test]
    fn grayscale_run_produces_neutral_output() {
        let png = split_png(12, 12);
        let run = process(
            &png,
            &FilterRequest {
                kind: FilterKind::Grayscale,
                ..FilterRequest::default()
            },
        )
        .unwrap();
        let out = image::load_from_memory(&run.jpeg).unwrap().to_rgb8();
        for pixel in out.pixels() {
            let [r, g, b] = pixel.0;
            // JPEG is lossy; channels should agree within a small margin.
            assert!(
                i16::from(r).abs_diff(i16::from(g)) <= 8
                    && i16::from(g).abs_diff(i16::from(b)) <= 8,
                "expected near-neutral pixel, got {r},{g},{b}",
            );
        }
    }

    #[test]
    fn apply_invert_twice_is_identity() {
        let img = RgbImage::from_fn(6, 6, |x, y| image::Rgb([(x * 40) as u8, (y * 40) as u8, 7]));
        let request = FilterRequest {
            kind: FilterKind::Invert,
            ..FilterRequest::default()
        };
        let once = apply(&img, &request);
        let twice = apply(&once, &request);
        assert_eq!(twice, img);
    }

    #[test]
    fn apply_with_seeded_rng_is_deterministic() {
        let img = RgbImage::from_fn(10, 10, |_, _| image::Rgb([128, 128, 128]));
        let request = FilterRequest {
            kind: FilterKind::VintageFilm,
            ..FilterRequest::default()
        };
        let a = apply_with_rng(&img, &request, &mut SmallRng::seed_from_u64(11));
        let b = apply_with_rng(&img, &request, &mut SmallRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn diagnostics_are_collected() {
        let png = split_png(16, 16);
        let run = process(&png, &FilterRequest::default()).unwrap();
        // Phases can be fast enough to round to zero, but the struct is
        // populated and total is consistent.
        assert_eq!(
            run.diagnostics.total(),
            run.diagnostics.decode + run.diagnostics.filter + run.diagnostics.encode,
        );
    }
}
