use wasm_bindgen::prelude::*;

pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod gradient;
pub mod math;

pub use color::{ColorSpace, ColorStop};
pub use error::GradientError;
pub use gradient::Gradient;

use export::grd::GrdExporter;
use export::Exporter;

/// Initialize the WASM module (called automatically on load).
#[wasm_bindgen(start)]
pub fn init() {
    // Panic hook for readable panics in the browser console
    console_error_panic_hook::set_once();

    // A second init (hot reload) finds the logger already installed
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("gradient designer core {} ready", env!("CARGO_PKG_VERSION"));
    }
}

/// JS handle owning the gradient currently being edited.
///
/// Stops cross the boundary as a flat Float64Array `[pos, color, pos, color, ...]`,
/// colorspace views as 3-element Float64Arrays. Colorspaces are passed by name
/// ("rgb", "hsv", "hsl", "xyz", "luv", "hlc_uv").
///
/// Every mutator re-sorts the stops, so indices refer to position order.
#[wasm_bindgen]
#[derive(Default)]
pub struct GradientDesigner {
    gradient: Gradient,
}

#[wasm_bindgen]
impl GradientDesigner {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a hash (with or without the leading '#').
    pub fn from_hash(hash: &str) -> GradientDesigner {
        let mut gradient = Gradient::from_hash(hash);
        gradient.sort();
        Self { gradient }
    }

    /// Load the gradient from `window.location.hash`, falling back to the
    /// default gradient when the hash holds no stops.
    pub fn from_location() -> Result<GradientDesigner, JsError> {
        let hash = location()?
            .hash()
            .map_err(|_| JsError::new("cannot read window.location.hash"))?;
        let designer = Self::from_hash(&hash);
        if designer.gradient.is_empty() {
            log::info!("empty location hash, loading default gradient");
            return Ok(Self::from_hash(config::DEFAULT_HASH));
        }
        Ok(designer)
    }

    /// Write the current hash to `window.location.hash`.
    pub fn store_to_location(&self) -> Result<(), JsError> {
        location()?
            .set_hash(&self.gradient.hash())
            .map_err(|_| JsError::new("cannot write window.location.hash"))
    }

    /// Random gradient. `config` is the flat GeneratorConfig buffer (may be empty).
    pub fn random(config: &[f64]) -> GradientDesigner {
        let config = config::generator_config_from_buffer(config);
        let gradient = Gradient::random_with(&config, js_sys::Math::random);
        Self { gradient }
    }

    pub fn hash(&self) -> String {
        self.gradient.hash()
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> Option<String> {
        self.gradient.name().map(str::to_owned)
    }

    #[wasm_bindgen(setter)]
    pub fn set_name(&mut self, name: &str) {
        self.gradient.set_name(name);
    }

    pub fn len(&self) -> usize {
        self.gradient.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gradient.is_empty()
    }

    /// Flat `[pos, color, ...]` in position order.
    pub fn stops(&self) -> Vec<f64> {
        self.gradient.to_flat()
    }

    pub fn view(&self, index: usize, space: &str) -> Result<Vec<f64>, JsError> {
        let space = parse_space(space)?;
        Ok(self.gradient.get(index)?.view(space).to_vec())
    }

    pub fn set_view(&mut self, index: usize, space: &str, values: &[f64]) -> Result<(), JsError> {
        let space = parse_space(space)?;
        if values.len() != 3 {
            return Err(JsError::new("a colorspace view has exactly 3 components"));
        }
        self.gradient.get_mut(index)?.set_view(space, [values[0], values[1], values[2]]);
        self.gradient.sort();
        Ok(())
    }

    pub fn set_position(&mut self, index: usize, position: f64) -> Result<(), JsError> {
        self.gradient.get_mut(index)?.set_position(position);
        self.gradient.sort();
        Ok(())
    }

    pub fn set_color(&mut self, index: usize, color: u32) -> Result<(), JsError> {
        self.gradient.get_mut(index)?.set_color(color);
        Ok(())
    }

    /// Set a color from user input such as "#F0A" or "ff00aa".
    pub fn set_color_hex(&mut self, index: usize, hex: &str) -> Result<(), JsError> {
        let color = math::utils::parse_hex_color(hex);
        self.gradient.get_mut(index)?.set_color(color);
        Ok(())
    }

    /// Add a stop at `position` colored from its neighbours.
    pub fn insert_at(&mut self, position: f64, space: &str, shortest_hue: bool) -> Result<(), JsError> {
        let space = parse_space(space)?;
        self.gradient.insert_interpolated(position, space, shortest_hue);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<(), JsError> {
        self.gradient.remove(index)?;
        Ok(())
    }

    /// Packed 0xRRGGBB color at `position`.
    pub fn color_at(&self, position: f64, space: &str, shortest_hue: bool) -> Result<u32, JsError> {
        let space = parse_space(space)?;
        Ok(self.gradient.color_at(position, space, shortest_hue).color())
    }

    pub fn subdivide(&mut self, n: usize, space: &str, shortest_hue: bool) -> Result<(), JsError> {
        let space = parse_space(space)?;
        self.gradient.subdivide(n, space, shortest_hue);
        Ok(())
    }

    pub fn distribute_evenly(&mut self) {
        self.gradient.distribute_evenly();
        self.gradient.sort();
    }

    pub fn normalize(&mut self, space: &str, axis: usize) -> Result<(), JsError> {
        let space = parse_space(space)?;
        self.gradient.normalize(space, axis).inspect_err(|e| log::warn!("{e}"))?;
        Ok(())
    }

    pub fn reverse(&mut self) {
        self.gradient.reverse();
    }

    pub fn mirror(&mut self) {
        self.gradient.mirror();
    }

    /// Photoshop .grd bytes. Falls back to the gradient's own name.
    pub fn export_grd(&self, name: Option<String>, comment: Option<String>) -> Vec<u8> {
        GrdExporter
            .file(&self.gradient, &self.export_name(name), comment.as_deref())
            .into_bytes()
    }

    /// Hexdump shown in the code view.
    pub fn export_grd_hexdump(&self, name: Option<String>, comment: Option<String>) -> String {
        GrdExporter.generate(&self.gradient, &self.export_name(name), comment.as_deref())
    }
}

impl GradientDesigner {
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    fn export_name(&self, name: Option<String>) -> String {
        name.filter(|n| !n.is_empty())
            .or_else(|| self.gradient.name().map(str::to_owned))
            .unwrap_or_else(|| config::DEFAULT_NAME.to_string())
    }
}

/// Convert a packed color to a colorspace view (used by the HSV picker).
#[wasm_bindgen]
pub fn color_to_view(color: u32, space: &str) -> Result<Vec<f64>, JsError> {
    let space = parse_space(space)?;
    Ok(ColorStop::new(0.0, color).view(space).to_vec())
}

/// Convert view components to a packed color, rounding and clamping channels.
#[wasm_bindgen]
pub fn view_to_color(space: &str, a: f64, b: f64, c: f64) -> Result<u32, JsError> {
    let space = parse_space(space)?;
    Ok(ColorStop::from_view(0.0, space, [a, b, c]).color())
}

#[wasm_bindgen]
pub fn default_hash() -> String {
    config::DEFAULT_HASH.to_string()
}

/// Starter favourites for the gallery.
#[wasm_bindgen]
pub fn preset_hashes() -> js_sys::Array {
    config::PRESET_HASHES.iter().map(|h| JsValue::from_str(h)).collect()
}

fn parse_space(space: &str) -> Result<ColorSpace, GradientError> {
    space.parse::<ColorSpace>().inspect_err(|e| log::warn!("{e}"))
}

fn location() -> Result<web_sys::Location, JsError> {
    web_sys::window()
        .map(|w| w.location())
        .ok_or_else(|| JsError::new("no window available"))
}
