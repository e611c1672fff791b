/// Color stop: a fractional position and a packed 24-bit sRGB color.
///
/// The color is stored once, as `0xRRGGBB`. Every colorspace view (rgb,
/// hsv, hsl, xyz, luv, hlc_uv) is derived from it on read and written back
/// through it on write, so all views always describe the same color.
///
/// Writes never fail: positions clamp to [0, 1] (NaN becomes 0), channel
/// values round and clamp to [0, 255], packed colors mask to 24 bits.

use std::fmt;

use crate::error::{GradientError, Result};
use crate::math::utils;

use super::convert;
use super::ColorSpace;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ColorStop {
    position: f64,
    color: u32,
}

impl ColorStop {
    pub fn new(position: f64, color: u32) -> Self {
        let mut stop = Self::default();
        stop.set_position(position);
        stop.set_color(color);
        stop
    }

    /// Build a stop from view components, e.g. `from_view(0.5, Hsv, [350.0, 1.0, 1.0])`.
    pub fn from_view(position: f64, space: ColorSpace, values: [f64; 3]) -> Self {
        let mut stop = Self::new(position, 0);
        stop.set_view(space, values);
        stop
    }

    // ─── Position ───────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn set_position(&mut self, position: f64) {
        let p = utils::clamp(position, 0.0, 1.0);
        // NaN → 0, and fold -0.0 into 0.0 so positions compare and print cleanly
        self.position = if p.is_nan() || p == 0.0 { 0.0 } else { p };
    }

    /// Position scaled to a byte, truncated.
    pub fn pos255(&self) -> u8 {
        ((self.position * 255.0) as u32 & 0xFF) as u8
    }

    pub fn pos_hex(&self) -> String {
        format!("{:02X}", self.pos255())
    }

    /// Position as a percentage with one decimal, e.g. `"33.3%"`.
    pub fn pos_percent(&self) -> String {
        format!("{:.1}%", self.position * 100.0)
    }

    // ─── Packed color ───────────────────────────────────────

    #[inline]
    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn set_color(&mut self, color: u32) {
        self.color = color & 0xFF_FFFF;
    }

    pub fn color_hex(&self) -> String {
        format!("{:06X}", self.color)
    }

    #[inline]
    pub fn r(&self) -> u8 {
        ((self.color >> 16) & 0xFF) as u8
    }

    #[inline]
    pub fn g(&self) -> u8 {
        ((self.color >> 8) & 0xFF) as u8
    }

    #[inline]
    pub fn b(&self) -> u8 {
        (self.color & 0xFF) as u8
    }

    pub fn set_r(&mut self, v: f64) {
        self.color = (self.color & 0x00_FFFF) | (utils::channel_to_byte(v) as u32) << 16;
    }

    pub fn set_g(&mut self, v: f64) {
        self.color = (self.color & 0xFF_00FF) | (utils::channel_to_byte(v) as u32) << 8;
    }

    pub fn set_b(&mut self, v: f64) {
        self.color = (self.color & 0xFF_FF00) | utils::channel_to_byte(v) as u32;
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }

    pub fn set_rgb(&mut self, rgb: [f64; 3]) {
        self.set_r(rgb[0]);
        self.set_g(rgb[1]);
        self.set_b(rgb[2]);
    }

    /// Largest channel, 0..255.
    pub fn value(&self) -> u8 {
        self.r().max(self.g()).max(self.b())
    }

    /// Mean of the largest and smallest channel, 0..255.
    pub fn lightness(&self) -> f64 {
        let [r, g, b] = self.rgb();
        (r.max(g).max(b) as f64 + r.min(g).min(b) as f64) / 2.0
    }

    /// Rec. 709 luma, 0..255.
    pub fn luma(&self) -> f64 {
        0.2126 * self.r() as f64 + 0.7152 * self.g() as f64 + 0.0722 * self.b() as f64
    }

    // ─── Colorspace views ───────────────────────────────────

    fn rgb_f64(&self) -> [f64; 3] {
        self.rgb().map(|c| c as f64)
    }

    /// Read the three components of a view.
    pub fn view(&self, space: ColorSpace) -> [f64; 3] {
        convert::rgb_to_view(space, self.rgb_f64())
    }

    /// Overwrite the color from the three components of a view.
    pub fn set_view(&mut self, space: ColorSpace, values: [f64; 3]) {
        self.set_rgb(convert::view_to_rgb(space, values));
    }

    /// Read one component (axis 0..3) of a view.
    pub fn component(&self, space: ColorSpace, axis: usize) -> Result<f64> {
        self.view(space)
            .get(axis)
            .copied()
            .ok_or(GradientError::InvalidAxis(axis))
    }

    /// Overwrite one component of a view, keeping the other two as read.
    pub fn set_component(&mut self, space: ColorSpace, axis: usize, value: f64) -> Result<()> {
        let mut values = self.view(space);
        let slot = values.get_mut(axis).ok_or(GradientError::InvalidAxis(axis))?;
        *slot = value;
        self.set_view(space, values);
        Ok(())
    }

    pub fn hsv(&self) -> [f64; 3] {
        self.view(ColorSpace::Hsv)
    }

    pub fn set_hsv(&mut self, hsv: [f64; 3]) {
        self.set_view(ColorSpace::Hsv, hsv);
    }

    pub fn hsl(&self) -> [f64; 3] {
        self.view(ColorSpace::Hsl)
    }

    pub fn set_hsl(&mut self, hsl: [f64; 3]) {
        self.set_view(ColorSpace::Hsl, hsl);
    }

    pub fn xyz(&self) -> [f64; 3] {
        self.view(ColorSpace::Xyz)
    }

    pub fn set_xyz(&mut self, xyz: [f64; 3]) {
        self.set_view(ColorSpace::Xyz, xyz);
    }

    pub fn luv(&self) -> [f64; 3] {
        self.view(ColorSpace::Luv)
    }

    pub fn set_luv(&mut self, luv: [f64; 3]) {
        self.set_view(ColorSpace::Luv, luv);
    }

    pub fn hlc_uv(&self) -> [f64; 3] {
        self.view(ColorSpace::HlcUv)
    }

    pub fn set_hlc_uv(&mut self, hlc: [f64; 3]) {
        self.set_view(ColorSpace::HlcUv, hlc);
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} @ {}", self.color_hex(), self.pos_percent())
    }
}
