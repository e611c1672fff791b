/// Export data contract.
///
/// Exporters turn a gradient into a third-party format. The core hands them
/// sorted per-stop values (`ExportStop`) so that no format has to touch the
/// color model directly.
///
/// - `grd`: Photoshop gradient (binary, version 3)

pub mod grd;

use crate::color::ColorStop;
use crate::gradient::Gradient;

/// Output of an exporter's download path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutput {
    Text(String),
    Binary(Vec<u8>),
}

impl ExportOutput {
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            ExportOutput::Text(s) => s.into_bytes(),
            ExportOutput::Binary(b) => b,
        }
    }
}

/// A gradient export format.
pub trait Exporter {
    /// Stable identifier (UI element id).
    fn id(&self) -> &str;

    /// Short human-readable title.
    fn title(&self) -> &str;

    /// File extension without the dot.
    fn extension(&self) -> &str;

    /// Text shown in the code view.
    fn generate(&self, gradient: &Gradient, name: &str, comment: Option<&str>) -> String;

    /// Contents of the downloadable file.
    fn file(&self, gradient: &Gradient, name: &str, comment: Option<&str>) -> ExportOutput;
}

/// Per-stop values every exporter may rely on.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportStop {
    /// Position in [0, 1]
    pub position: f64,
    /// Position scaled to 0..255, truncated
    pub pos255: u8,
    /// Position as "12.5%"
    pub pos_percent: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Six uppercase hex digits, no '#'
    pub color_hex: String,
}

impl ExportStop {
    /// Position scaled to 0..4096, truncated.
    pub fn pos4096(&self) -> u32 {
        (self.position * 4096.0) as u32
    }

    /// Channels widened to 16 bits (c * 0x101, so 0xFF → 0xFFFF).
    pub fn rgb16(&self) -> [u16; 3] {
        [self.r, self.g, self.b].map(|c| c as u16 * 0x101)
    }
}

impl From<&ColorStop> for ExportStop {
    fn from(stop: &ColorStop) -> Self {
        Self {
            position: stop.position(),
            pos255: stop.pos255(),
            pos_percent: stop.pos_percent(),
            r: stop.r(),
            g: stop.g(),
            b: stop.b(),
            color_hex: stop.color_hex(),
        }
    }
}

impl Gradient {
    /// Export view of the stops, in position order.
    pub fn export_stops(&self) -> Vec<ExportStop> {
        self.sorted_stops().iter().map(ExportStop::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_stops_are_sorted() {
        let g = Gradient::from_stops(&[(1.0, 0x0000FF), (0.125, 0xFF8000)]);
        let stops = g.export_stops();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].pos_percent, "12.5%");
        assert_eq!(stops[0].pos255, 31);
        assert_eq!((stops[0].r, stops[0].g, stops[0].b), (255, 128, 0));
        assert_eq!(stops[0].color_hex, "FF8000");
        assert_eq!(stops[1].pos255, 255);
    }

    #[test]
    fn test_scaled_values() {
        let s = ExportStop::from(&ColorStop::new(1.0, 0xFF8001));
        assert_eq!(s.pos4096(), 4096);
        assert_eq!(s.rgb16(), [0xFFFF, 0x8080, 0x0101]);
        let s = ExportStop::from(&ColorStop::new(0.5, 0));
        assert_eq!(s.pos4096(), 2048);
    }

    #[test]
    fn test_output_bytes() {
        assert_eq!(ExportOutput::Text("ab".into()).into_bytes(), b"ab".to_vec());
        assert_eq!(ExportOutput::Binary(vec![1, 2]).into_bytes(), vec![1, 2]);
    }
}
