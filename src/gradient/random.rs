/// Random gradient generator.
///
/// Two anchors at 0 and 1 with random HSV colors, smoothed by subdividing
/// in a perceptual colorspace (LCHuv by default). The random source is
/// injected so the browser can use `Math.random` and tests can be
/// deterministic.

use crate::color::{ColorSpace, ColorStop};
use crate::config::GeneratorConfig;
use crate::math::utils;

use super::Gradient;

const ADJECTIVES: [&str; 16] = [
    "amber", "arctic", "autumn", "blazing", "cosmic", "dusky", "electric", "faded",
    "golden", "hazy", "lush", "misty", "neon", "velvet", "vivid", "wild",
];

const NOUNS: [&str; 16] = [
    "aurora", "bloom", "canyon", "coral", "dawn", "dune", "ember", "fjord",
    "glacier", "horizon", "lagoon", "meadow", "nebula", "orchid", "reef", "sunset",
];

impl Gradient {
    /// Generate a random named gradient. `rng` must return values in [0, 1).
    pub fn random_with<R: FnMut() -> f64>(config: &GeneratorConfig, mut rng: R) -> Self {
        let mut uniform = |lo: f64, hi: f64| utils::lerp(lo, hi, utils::clamp(rng(), 0.0, 1.0));

        let h0 = uniform(0.0, 360.0);
        let spread = uniform(config.min_hue_spread, 180.0);
        let h1 = if uniform(0.0, 1.0) < 0.5 { h0 - spread } else { h0 + spread };
        let a = [
            h0,
            uniform(config.saturation.0, config.saturation.1),
            uniform(config.value.0, config.value.1),
        ];
        let b = [
            utils::wrap_degrees(h1),
            uniform(config.saturation.0, config.saturation.1),
            uniform(config.value.0, config.value.1),
        ];
        let adjective = ADJECTIVES[pick(uniform(0.0, 1.0), ADJECTIVES.len())];
        let noun = NOUNS[pick(uniform(0.0, 1.0), NOUNS.len())];
        let name = format!("{adjective}_{noun}");

        let mut gradient = Gradient::new().with_name(name);
        gradient.push(ColorStop::from_view(0.0, ColorSpace::Hsv, a));
        gradient.push(ColorStop::from_view(1.0, ColorSpace::Hsv, b));
        gradient.subdivide(config.subdivisions, config.colorspace, true);

        log::info!(
            "generated random gradient '{}' with {} stops",
            gradient.name().unwrap_or_default(),
            gradient.len()
        );
        gradient
    }
}

fn pick(t: f64, len: usize) -> usize {
    ((t * len as f64) as usize).min(len - 1)
}
