/// Designer configuration: random generator knobs, defaults and presets.
///
/// Configuration crosses the JS boundary as a flat `Float64Array`, the same
/// way every other parameter block does; see `generator_config_from_buffer`.

use crate::color::ColorSpace;

/// Gradient loaded when a decoded hash turns out empty.
pub const DEFAULT_HASH: &str = "0:093391-33:019C5C-56:ABCD39-64:BFD336-77:B7D135-100:84CE34";

/// Name exporters use when the gradient has none.
pub const DEFAULT_NAME: &str = "my_gradient";

/// Starter favourites shown in the gallery before the user saves any.
pub const PRESET_HASHES: [&str; 9] = [
    "F5515F-A1051D",
    "B3EB50-429421",
    "0FF0B3-036ED9",
    "F36265-961276",
    "E3E3E3-506874",
    "0:020024-35:090979-100:00D4FF",
    "F3DC00-FAA300-FF6201-FF1E02-F3DC00",
    "1F4E5A-15:029C8E-FFDB69-85:FFA658-EA5F40",
    "9C4F96-FF6355-FBA949-FAE442-8BD448-2AA8F2",
];

/// Parameters of the random gradient generator.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// HSV saturation range of the two anchor stops
    pub saturation: (f64, f64),
    /// HSV value range of the two anchor stops
    pub value: (f64, f64),
    /// Minimum hue distance (degrees) between the anchors
    pub min_hue_spread: f64,
    /// Stops inserted between the anchors
    pub subdivisions: usize,
    /// Colorspace the inserted stops are interpolated in
    pub colorspace: ColorSpace,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            saturation: (0.4, 1.0),
            value: (0.5, 1.0),
            min_hue_spread: 60.0,
            subdivisions: 3,
            colorspace: ColorSpace::HlcUv,
        }
    }
}

/// Build a GeneratorConfig from a flat f64 parameter array.
/// Layout: [sat_min, sat_max, val_min, val_max, subdivisions, colorspace_id, min_hue_spread]
///
/// Missing trailing entries keep their defaults; ranges are clamped to [0, 1]
/// and put in order.
pub fn generator_config_from_buffer(data: &[f64]) -> GeneratorConfig {
    let mut config = GeneratorConfig::default();

    if data.len() >= 2 {
        config.saturation = unit_range(data[0], data[1]);
    }
    if data.len() >= 4 {
        config.value = unit_range(data[2], data[3]);
    }
    if let Some(&n) = data.get(4) {
        if n.is_finite() && n >= 0.0 {
            config.subdivisions = (n as usize).min(64);
        }
    }
    if let Some(&id) = data.get(5) {
        if id.is_finite() && id >= 0.0 {
            config.colorspace = ColorSpace::from_id(id as u32);
        }
    }
    if let Some(&spread) = data.get(6) {
        if spread.is_finite() {
            config.min_hue_spread = spread.clamp(0.0, 180.0);
        }
    }

    config
}

fn unit_range(a: f64, b: f64) -> (f64, f64) {
    let a = if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) };
    let b = if b.is_nan() { 1.0 } else { b.clamp(0.0, 1.0) };
    if a <= b { (a, b) } else { (b, a) }
}
