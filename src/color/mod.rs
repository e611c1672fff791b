/// Color model: a single 24-bit sRGB color seen through several colorspaces.
///
/// - `convert`: pure conversion math (sRGB, HSV, HSL, CIE XYZ, CIE Luv, LCHuv)
/// - `stop`: the `ColorStop` value object (position + packed color)
///
/// `ColorSpace` names one of the alternate coordinate views. Every view has
/// exactly three numeric components, addressed by axis 0..3.

pub mod convert;
pub mod stop;

pub use stop::ColorStop;

use std::fmt;
use std::str::FromStr;

use crate::error::GradientError;

/// Colorspace view identifier, matching the names used by the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    /// (r, g, b) in [0, 255]
    #[default]
    Rgb,
    /// (hue°, saturation, value)
    Hsv,
    /// (hue°, saturation, lightness)
    Hsl,
    /// CIE 1931 (X, Y, Z), D65
    Xyz,
    /// CIE 1976 (L*, u*, v*), D65
    Luv,
    /// Polar Luv: (hue°, lightness, chroma)
    HlcUv,
}

impl ColorSpace {
    pub const ALL: [ColorSpace; 6] = [
        ColorSpace::Rgb,
        ColorSpace::Hsv,
        ColorSpace::Hsl,
        ColorSpace::Xyz,
        ColorSpace::Luv,
        ColorSpace::HlcUv,
    ];

    /// Name as used in the UI and on the JS boundary.
    pub fn name(&self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Hsv => "hsv",
            ColorSpace::Hsl => "hsl",
            ColorSpace::Xyz => "xyz",
            ColorSpace::Luv => "luv",
            ColorSpace::HlcUv => "hlc_uv",
        }
    }

    /// Map a numeric id (flat-buffer configs) to a colorspace.
    /// Unknown ids fall back to rgb.
    pub fn from_id(id: u32) -> Self {
        match id {
            1 => ColorSpace::Hsv,
            2 => ColorSpace::Hsl,
            3 => ColorSpace::Xyz,
            4 => ColorSpace::Luv,
            5 => ColorSpace::HlcUv,
            _ => ColorSpace::Rgb,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            ColorSpace::Rgb => 0,
            ColorSpace::Hsv => 1,
            ColorSpace::Hsl => 2,
            ColorSpace::Xyz => 3,
            ColorSpace::Luv => 4,
            ColorSpace::HlcUv => 5,
        }
    }

    /// True when component 0 is an angle in degrees.
    pub fn has_hue(&self) -> bool {
        matches!(self, ColorSpace::Hsv | ColorSpace::Hsl | ColorSpace::HlcUv)
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ColorSpace::ALL
            .iter()
            .copied()
            .find(|cs| cs.name() == key)
            .ok_or_else(|| GradientError::UnknownColorSpace(s.to_string()))
    }
}
