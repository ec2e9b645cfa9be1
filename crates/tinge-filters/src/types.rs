//! Shared types for the tinge filter pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Re-export `RgbImage` so downstream crates can reference decoded
/// raster data without depending on `image` directly.
pub use image::RgbImage;

/// Identifier for one of the available image filters.
///
/// Serialized in snake_case so the serde form doubles as the stable
/// identifier used for analytics events and download filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Luma conversion, replicated back to RGB.
    Grayscale,
    /// Classic 5x5 ring blur.
    Blur,
    /// Laplacian outline on a white background.
    Contour,
    /// Detail-boosting convolution.
    Detail,
    /// Edge enhancement convolution.
    EdgeEnhance,
    /// Directional relief shading.
    Emboss,
    /// Strong unsharp-style sharpening.
    Sharpen,
    /// Gentle smoothing convolution.
    Smooth,
    /// Brightness boost (+50%).
    Brightness,
    /// Contrast boost (+50%) around the mean luma.
    Contrast,
    /// Per-channel color inversion.
    Invert,
    /// Warm sepia tone.
    Sepia,
    /// Parameterized vintage film look (warmth, grain, vignette, contrast).
    VintageFilm,
}

impl FilterKind {
    /// All filters in presentation order, for iterating the picker grid.
    pub const ALL: [Self; 13] = [
        Self::Grayscale,
        Self::Blur,
        Self::Contour,
        Self::Detail,
        Self::EdgeEnhance,
        Self::Emboss,
        Self::Sharpen,
        Self::Smooth,
        Self::Brightness,
        Self::Contrast,
        Self::Invert,
        Self::Sepia,
        Self::VintageFilm,
    ];

    /// Stable identifier: lowercase with underscores.
    ///
    /// Used in download filenames and analytics event names, and matches
    /// the serde representation.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Blur => "blur",
            Self::Contour => "contour",
            Self::Detail => "detail",
            Self::EdgeEnhance => "edge_enhance",
            Self::Emboss => "emboss",
            Self::Sharpen => "sharpen",
            Self::Smooth => "smooth",
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::Invert => "invert",
            Self::Sepia => "sepia",
            Self::VintageFilm => "vintage_film",
        }
    }

    /// Human-readable description shown on picker tiles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Grayscale => "Convert to grayscale",
            Self::Blur => "Blur effect",
            Self::Contour => "Contour effect",
            Self::Detail => "Enhance details",
            Self::EdgeEnhance => "Edge enhancement",
            Self::Emboss => "Emboss effect",
            Self::Sharpen => "Sharpen image",
            Self::Smooth => "Smooth image",
            Self::Brightness => "Increase brightness",
            Self::Contrast => "Increase contrast",
            Self::Invert => "Invert colors",
            Self::Sepia => "Sepia tone effect",
            Self::VintageFilm => "Add film grain effect",
        }
    }

    /// Look up a filter by its slug. Returns `None` for unknown slugs.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    /// Whether this filter exposes adjustable parameters.
    ///
    /// Only the vintage film filter does; the picker shows parameter
    /// sliders when it is selected.
    #[must_use]
    pub const fn has_parameters(self) -> bool {
        matches!(self, Self::VintageFilm)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Parameters for the vintage film filter.
///
/// Values outside the documented ranges are clamped at use, so a
/// `VintageParams` built from raw slider values is always safe to apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VintageParams {
    /// Color temperature. Above 1.0 warms (more red/yellow), below
    /// cools (more blue). Clamped to [`Self::WARMTH_RANGE`].
    pub warmth: f32,
    /// Film grain intensity. 0.0 disables grain entirely.
    /// Clamped to [`Self::GRAIN_RANGE`].
    pub grain: f32,
    /// Corner-darkening strength. 0.0 disables the vignette.
    /// Clamped to [`Self::VIGNETTE_RANGE`].
    pub vignette: f32,
    /// Contrast adjustment; also drives the soft-focus blur (lower
    /// contrast blurs more). Clamped to [`Self::CONTRAST_RANGE`].
    pub contrast: f32,
}

impl VintageParams {
    /// Valid warmth range.
    pub const WARMTH_RANGE: (f32, f32) = (0.6, 1.4);
    /// Valid grain range.
    pub const GRAIN_RANGE: (f32, f32) = (0.0, 3.0);
    /// Valid vignette range.
    pub const VIGNETTE_RANGE: (f32, f32) = (0.0, 3.0);
    /// Valid contrast range.
    pub const CONTRAST_RANGE: (f32, f32) = (0.6, 1.4);

    /// Return a copy with every parameter clamped to its valid range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            warmth: self.warmth.clamp(Self::WARMTH_RANGE.0, Self::WARMTH_RANGE.1),
            grain: self.grain.clamp(Self::GRAIN_RANGE.0, Self::GRAIN_RANGE.1),
            vignette: self
                .vignette
                .clamp(Self::VIGNETTE_RANGE.0, Self::VIGNETTE_RANGE.1),
            contrast: self
                .contrast
                .clamp(Self::CONTRAST_RANGE.0, Self::CONTRAST_RANGE.1),
        }
    }
}

impl Default for VintageParams {
    fn default() -> Self {
        Self {
            warmth: 1.0,
            grain: 1.0,
            vignette: 1.0,
            contrast: 1.0,
        }
    }
}

/// A complete filter request: which filter, plus any parameters.
///
/// Non-parameterized filters ignore the `vintage` field, so the picker
/// can carry one request value and mutate only the selected kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterRequest {
    /// The filter to apply.
    pub kind: FilterKind,
    /// Vintage film parameters, used only when `kind` is
    /// [`FilterKind::VintageFilm`].
    pub vintage: VintageParams,
}

impl Default for FilterRequest {
    fn default() -> Self {
        Self {
            kind: FilterKind::Grayscale,
            vintage: VintageParams::default(),
        }
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Errors that can occur while decoding, filtering, or encoding.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// Failed to encode the output JPEG.
    #[error("failed to encode JPEG: {0}")]
    JpegEncode(String),
}
