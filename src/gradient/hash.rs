/// Hash codec: the compact string form of a gradient used in URLs.
///
/// ```text
/// hash     := [name "="] stop ("-" stop)*
/// stop     := [position ":"] colorhex
/// position := decimal percentage ("33.5" means 0.335)
/// colorhex := 6 hex digits, case-insensitive
/// ```
///
/// Decoding is best-effort and never fails. Omitted (or unparsable)
/// positions are inferred: the first stop defaults to 0, the last to 1 and
/// interior runs are spread evenly between their resolved neighbours.
/// Evenly distributed gradients encode without positions.

use crate::color::ColorStop;
use crate::math::utils;

use super::Gradient;

impl Gradient {
    /// Decode a hash string. An empty hash yields an empty gradient.
    pub fn from_hash(hash: &str) -> Self {
        let hash = hash.trim();
        let hash = hash.strip_prefix('#').unwrap_or(hash).trim();

        let (name, list) = match hash.split_once('=') {
            Some((name, list)) => (Some(utils::percent_decode(name)), list.trim()),
            None => (None, hash),
        };

        let mut gradient = Gradient::new();
        if let Some(name) = name {
            gradient.set_name(name);
        }
        if list.is_empty() {
            return gradient;
        }

        let tokens: Vec<(f64, &str)> = list.split('-')
            .map(|token| match token.split_once(':') {
                Some((pos, color)) => (parse_percent(pos), color),
                None => (f64::NAN, token),
            })
            .collect();

        let tokens = sort_declared(tokens);
        let mut positions: Vec<f64> = tokens.iter().map(|t| t.0).collect();
        infer_positions(&mut positions);

        for (pos, (_, color)) in positions.into_iter().zip(tokens) {
            let color = utils::parse_hex_prefix(color).map_or(0, |c| (c & 0xFF_FFFF) as u32);
            gradient.push(ColorStop::new(pos, color));
        }

        log::debug!(
            "decoded hash into {} stops (name: {:?})",
            gradient.len(),
            gradient.name()
        );
        gradient
    }

    /// Encode to a hash string.
    ///
    /// Evenly distributed gradients emit colors only; otherwise every stop
    /// carries its position rounded to 0.1 %. The name is percent-escaped
    /// where it would break the `=` split.
    pub fn hash(&self) -> String {
        let mut out = String::new();
        if let Some(name) = self.name() {
            out.push_str(&utils::percent_encode_name(name));
            out.push('=');
        }

        let even = self.is_distributed_evenly();
        for (i, stop) in self.stops().iter().enumerate() {
            if i > 0 {
                out.push('-');
            }
            if !even {
                let percent = (stop.position() * 1000.0).round() / 10.0;
                out.push_str(&format!("{percent}:"));
            }
            out.push_str(&stop.color_hex());
        }
        out
    }
}

/// Parse a percentage prefix to a 0..1 fraction ("50abc" → 0.5); NaN when
/// no number leads the string.
fn parse_percent(s: &str) -> f64 {
    utils::parse_float_prefix(s) / 100.0
}

/// Order tokens by declared position. Tokens without a position keep both
/// their slot in the sequence and their relative order; only the declared
/// positions are sorted among the slots they occupy.
fn sort_declared(tokens: Vec<(f64, &str)>) -> Vec<(f64, &str)> {
    let mut declared: Vec<(f64, &str)> = tokens.iter()
        .filter(|t| !t.0.is_nan())
        .copied()
        .collect();
    declared.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut declared = declared.into_iter();
    tokens.into_iter()
        .map(|t| if t.0.is_nan() { t } else { declared.next().unwrap_or(t) })
        .collect()
}

/// Resolve NaN positions in place: first → 0, last → 1, interior runs are
/// linearly interpolated between their nearest resolved neighbours.
fn infer_positions(pos: &mut [f64]) {
    let n = pos.len();
    if n == 0 {
        return;
    }
    if pos[0].is_nan() {
        pos[0] = 0.0;
    }
    if pos[n - 1].is_nan() {
        pos[n - 1] = 1.0;
    }

    let mut i = 1;
    while i < n {
        if !pos[i].is_nan() {
            i += 1;
            continue;
        }
        // pos[n - 1] is resolved, so the run always ends inside the slice
        let run = pos[i..].iter().take_while(|p| p.is_nan()).count();
        let start = pos[i - 1];
        let end = pos[i + run];
        for j in 0..run {
            pos[i + j] = start + (j + 1) as f64 * (end - start) / (run + 1) as f64;
        }
        i += run;
    }
}
