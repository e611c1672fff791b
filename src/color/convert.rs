/// Colorspace conversions between sRGB, HSV, HSL, CIE XYZ, CIE Luv and LCHuv.
///
/// All functions are pure and total over their legal input ranges. RGB
/// triplets are f64 in [0, 255] and are NOT clamped or rounded here; the
/// RGB-writing side (`ColorStop::set_rgb`) does that. Hues are degrees in
/// [0, 360).
///
/// XYZ uses the sRGB companding curve and the sRGB/D65 matrices with 7
/// significant digits. Luv uses the D65 reference white and the exact CIE
/// constants ε = 216/24389, κ = 24389/27.

use crate::math::math3d::mat3_mul_vec;
use crate::math::utils::wrap_degrees;
use crate::math::{Matrix3, Vec3};

use super::ColorSpace;

/// D65 reference white (Xr, Yr, Zr).
pub const WHITE_D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// Linear sRGB → XYZ (D65).
pub const SRGB_TO_XYZ: Matrix3 = Matrix3 {
    m: [
        [0.4124564, 0.3575761, 0.1804375],
        [0.2126729, 0.7151522, 0.0721750],
        [0.0193339, 0.1191920, 0.9503041],
    ],
};

/// XYZ (D65) → linear sRGB.
pub const XYZ_TO_SRGB: Matrix3 = Matrix3 {
    m: [
        [3.2404542, -1.5371385, -0.4985314],
        [-0.9692660, 1.8760108, 0.0415560],
        [0.0556434, -0.2040259, 1.0572252],
    ],
};

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

// ─── sRGB ⇄ HSV / HSL ───────────────────────────────────────

/// Hue shared by HSV and HSL: picked via the channel equal to max.
#[inline]
fn hue_of(r: f64, g: f64, b: f64, max: f64, chroma: f64) -> f64 {
    if chroma == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        (g - b) / chroma
    } else if max == g {
        2.0 + (b - r) / chroma
    } else {
        4.0 + (r - g) / chroma
    };
    wrap_degrees(60.0 * h)
}

pub fn rgb_to_hsv(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb.map(|c| c / 255.0);
    let v = r.max(g).max(b);
    let c = v - r.min(g).min(b);
    let s = if v == 0.0 { 0.0 } else { c / v };
    [hue_of(r, g, b, v, c), s, v]
}

pub fn hsv_to_rgb(hsv: [f64; 3]) -> [f64; 3] {
    let [h, s, v] = hsv;
    let h = wrap_degrees(h);
    let f = |n: f64| {
        let k = (n + h / 60.0) % 6.0;
        255.0 * (v - v * s * k.min(4.0 - k).min(1.0).max(0.0))
    };
    [f(5.0), f(3.0), f(1.0)]
}

pub fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb.map(|c| c / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let c = max - min;
    let l = (max + min) / 2.0;
    let s = if c == 0.0 || l <= 0.0 || l >= 1.0 {
        0.0
    } else {
        c / (1.0 - (2.0 * l - 1.0).abs())
    };
    [hue_of(r, g, b, max, c), s, l]
}

pub fn hsl_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hsl;
    let h = wrap_degrees(h);
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        255.0 * (l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0))
    };
    [f(0.0), f(8.0), f(4.0)]
}

// ─── sRGB ⇄ XYZ ─────────────────────────────────────────────

/// sRGB companding, encoded [0, 1] → linear.
#[inline]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse companding, linear → encoded. Negative (out of gamut) values
/// stay on the linear segment.
#[inline]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

pub fn rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let lin = Vec3::from_array(rgb.map(|c| srgb_to_linear(c / 255.0)));
    mat3_mul_vec(&SRGB_TO_XYZ, &lin).to_array()
}

pub fn xyz_to_rgb(xyz: [f64; 3]) -> [f64; 3] {
    let lin = mat3_mul_vec(&XYZ_TO_SRGB, &Vec3::from_array(xyz));
    lin.to_array().map(|c| 255.0 * linear_to_srgb(c))
}

// ─── XYZ ⇄ Luv ⇄ LCHuv ──────────────────────────────────────

/// u′, v′ chromaticity of an XYZ triple; None for black (zero denominator).
#[inline]
fn chromaticity(xyz: Vec3) -> Option<(f64, f64)> {
    let d = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if d.abs() < 1e-12 {
        None
    } else {
        Some((4.0 * xyz.x / d, 9.0 * xyz.y / d))
    }
}

/// Reference chromaticity (ur, vr) of the D65 white point.
#[inline]
pub fn white_uv() -> (f64, f64) {
    let w = WHITE_D65;
    let d = w.x + 15.0 * w.y + 3.0 * w.z;
    (4.0 * w.x / d, 9.0 * w.y / d)
}

pub fn xyz_to_luv(xyz: [f64; 3]) -> [f64; 3] {
    let xyz = Vec3::from_array(xyz);
    let yr = xyz.y / WHITE_D65.y;
    let l = if yr > EPSILON { 116.0 * yr.cbrt() - 16.0 } else { KAPPA * yr };
    match chromaticity(xyz) {
        Some((up, vp)) => {
            let (ur, vr) = white_uv();
            [l, 13.0 * l * (up - ur), 13.0 * l * (vp - vr)]
        }
        None => [l, 0.0, 0.0],
    }
}

pub fn luv_to_xyz(luv: [f64; 3]) -> [f64; 3] {
    let [l, u, v] = luv;
    if l <= 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let y = WHITE_D65.y * if l > KAPPA * EPSILON {
        ((l + 16.0) / 116.0).powi(3)
    } else {
        l / KAPPA
    };
    let (ur, vr) = white_uv();
    let up = u / (13.0 * l) + ur;
    let vp = v / (13.0 * l) + vr;
    if vp.abs() < 1e-12 {
        return [0.0, y, 0.0];
    }
    let x = y * 9.0 * up / (4.0 * vp);
    let z = y * (12.0 - 3.0 * up - 20.0 * vp) / (4.0 * vp);
    [x, y, z]
}

/// Luv → (hue°, lightness, chroma).
pub fn luv_to_hlc_uv(luv: [f64; 3]) -> [f64; 3] {
    let [l, u, v] = luv;
    [wrap_degrees(v.atan2(u).to_degrees()), l, u.hypot(v)]
}

/// (hue°, lightness, chroma) → Luv.
pub fn hlc_uv_to_luv(hlc: [f64; 3]) -> [f64; 3] {
    let [h, l, c] = hlc;
    let (sin, cos) = h.to_radians().sin_cos();
    [l, c * cos, c * sin]
}

// ─── Dispatch by view ───────────────────────────────────────

/// Convert an RGB triplet into the given view.
pub fn rgb_to_view(space: ColorSpace, rgb: [f64; 3]) -> [f64; 3] {
    match space {
        ColorSpace::Rgb => rgb,
        ColorSpace::Hsv => rgb_to_hsv(rgb),
        ColorSpace::Hsl => rgb_to_hsl(rgb),
        ColorSpace::Xyz => rgb_to_xyz(rgb),
        ColorSpace::Luv => xyz_to_luv(rgb_to_xyz(rgb)),
        ColorSpace::HlcUv => luv_to_hlc_uv(xyz_to_luv(rgb_to_xyz(rgb))),
    }
}

/// Convert view components back to an (unclamped) RGB triplet.
pub fn view_to_rgb(space: ColorSpace, values: [f64; 3]) -> [f64; 3] {
    match space {
        ColorSpace::Rgb => values,
        ColorSpace::Hsv => hsv_to_rgb(values),
        ColorSpace::Hsl => hsl_to_rgb(values),
        ColorSpace::Xyz => xyz_to_rgb(values),
        ColorSpace::Luv => xyz_to_rgb(luv_to_xyz(values)),
        ColorSpace::HlcUv => xyz_to_rgb(luv_to_xyz(hlc_uv_to_luv(values))),
    }
}
