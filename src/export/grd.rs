/// Photoshop gradient file (`.grd`, version 3).
///
/// Layout, all integers big-endian:
/// - "8BGR", version u16 = 3, gradient count u16 = 1
/// - name as a Pascal string (low byte of each UTF-16 unit, at most 255)
/// - stop count u16, then per stop:
///   location u32 (0..4096), midpoint u32 (50), color model u16 (0 = RGB),
///   4 × u16 channels (r, g, b scaled to 0..0xFFFF, then 0), color type u16 (0)
/// - transparency stop count u16 (0), 6 reserved bytes

use crate::gradient::Gradient;

use super::{ExportOutput, Exporter};

const MAGIC: &[u8; 4] = b"8BGR";
const VERSION: u16 = 3;
const MIDPOINT: u32 = 50;

#[derive(Clone, Copy, Debug, Default)]
pub struct GrdExporter;

impl GrdExporter {
    pub fn encode(&self, gradient: &Gradient, name: &str) -> Vec<u8> {
        let stops = gradient.export_stops();
        let name = pascal_name(name);
        let mut out = Vec::with_capacity(16 + name.len() + stops.len() * 20);

        out.extend_from_slice(MAGIC);
        out.extend_from_slice(&VERSION.to_be_bytes());
        out.extend_from_slice(&1u16.to_be_bytes());
        out.push(name.len() as u8);
        out.extend_from_slice(&name);

        let count = stops.len().min(u16::MAX as usize);
        out.extend_from_slice(&(count as u16).to_be_bytes());
        for stop in stops.iter().take(count) {
            out.extend_from_slice(&stop.pos4096().to_be_bytes());
            out.extend_from_slice(&MIDPOINT.to_be_bytes());
            out.extend_from_slice(&0u16.to_be_bytes());
            for c in stop.rgb16() {
                out.extend_from_slice(&c.to_be_bytes());
            }
            out.extend_from_slice(&0u16.to_be_bytes());
            out.extend_from_slice(&0u16.to_be_bytes());
        }

        out.extend_from_slice(&0u16.to_be_bytes());
        out.extend_from_slice(&[0; 6]);
        out
    }
}

impl Exporter for GrdExporter {
    fn id(&self) -> &str {
        "code-grd"
    }

    fn title(&self) -> &str {
        "Photoshop"
    }

    fn extension(&self) -> &str {
        "grd"
    }

    fn generate(&self, gradient: &Gradient, name: &str, _comment: Option<&str>) -> String {
        hexdump(&self.encode(gradient, name))
    }

    fn file(&self, gradient: &Gradient, name: &str, _comment: Option<&str>) -> ExportOutput {
        ExportOutput::Binary(self.encode(gradient, name))
    }
}

/// Low byte of every UTF-16 code unit of the name, at most 255 of them.
/// Latin-1 text survives unchanged; anything wider is truncated per unit.
fn pascal_name(name: &str) -> Vec<u8> {
    name.encode_utf16()
        .map(|unit| (unit & 0xFF) as u8)
        .take(u8::MAX as usize)
        .collect()
}

/// Uppercase hex dump, 16 bytes per line.
pub fn hexdump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        out.push_str(&format!("{:02X}", b));
        out.push(if i % 16 < 15 { ' ' } else { '\n' });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_gradient_layout() {
        let bytes = GrdExporter.encode(&Gradient::new(), "x");
        assert_eq!(
            bytes,
            vec![
                0x38, 0x42, 0x47, 0x52, 0x00, 0x03, 0x00, 0x01, // header, 1 gradient
                0x01, b'x', // name
                0x00, 0x00, // no stops
                0x00, 0x00, 0, 0, 0, 0, 0, 0, // no transparency, reserved
            ]
        );
    }

    #[test]
    fn test_stop_encoding() {
        let g = Gradient::from_stops(&[(1.0, 0x0080FF), (0.0, 0xFF0000)]);
        let bytes = GrdExporter.encode(&g, "ab");
        assert_eq!(&bytes[..11], &[0x38, 0x42, 0x47, 0x52, 0, 3, 0, 1, 2, b'a', b'b']);
        assert_eq!(&bytes[11..13], &[0, 2]);
        let first = &bytes[13..33];
        assert_eq!(
            first,
            &[0, 0, 0, 0, 0, 0, 0, 50, 0, 0, 0xFF, 0xFF, 0, 0, 0, 0, 0, 0, 0, 0]
        );
        let second = &bytes[33..53];
        assert_eq!(
            second,
            &[0, 0, 0x10, 0x00, 0, 0, 0, 50, 0, 0, 0, 0, 0x80, 0x80, 0xFF, 0xFF, 0, 0, 0, 0]
        );
        assert_eq!(bytes.len(), 53 + 8);
    }

    #[test]
    fn test_name_keeps_low_byte_of_utf16_units() {
        let bytes = GrdExporter.encode(&Gradient::new(), "é✓");
        assert_eq!(&bytes[8..11], &[2, 0xE9, 0x13]);
        // U+1F308 is the surrogate pair D83C DF08
        let bytes = GrdExporter.encode(&Gradient::new(), "\u{1F308}");
        assert_eq!(&bytes[8..11], &[2, 0x3C, 0x08]);
        let long = "n".repeat(300);
        let bytes = GrdExporter.encode(&Gradient::new(), &long);
        assert_eq!(bytes[8], 255);
    }

    #[test]
    fn test_hexdump() {
        let bytes: Vec<u8> = (0..18).collect();
        let dump = hexdump(&bytes);
        assert!(dump.starts_with("00 01 02"));
        assert!(dump.contains("0E 0F\n10 11 "));
        assert_eq!(hexdump(&[0xAB]), "AB ");
    }

    #[test]
    fn test_exporter_trait() {
        let g = Gradient::from_hash("FF0000-0000FF");
        let exporter: &dyn Exporter = &GrdExporter;
        assert_eq!(exporter.extension(), "grd");
        let text = exporter.generate(&g, "g", None);
        assert!(text.starts_with("38 42 47 52 00 03"));
        match exporter.file(&g, "g", Some("ignored")) {
            ExportOutput::Binary(b) => assert_eq!(b.len(), 8 + 2 + 2 + 2 * 20 + 8),
            ExportOutput::Text(_) => panic!("grd is binary"),
        }
    }
}
