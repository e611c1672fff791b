/// Scalar utility functions used throughout the color model.
///
/// Provides clamping, interpolation, hue wrapping, and the lenient string
/// parsers (hex colors, percent-escaped names) the hash codec relies on.

/// Clamp a value to [min, max] range.
///
/// NaN passes through unchanged; callers that need a number must coerce it.
#[inline(always)]
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    if v < min { min } else if v > max { max } else { v }
}

/// Linear interpolation between a and b.
#[inline(always)]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Wrap an angle in degrees into [0, 360).
#[inline]
pub fn wrap_degrees(h: f64) -> f64 {
    let w = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if w >= 360.0 { 0.0 } else { w }
}

/// Round a float channel to the nearest byte, clamping to [0, 255].
/// NaN maps to 0.
#[inline(always)]
pub fn channel_to_byte(v: f64) -> u8 {
    let v = clamp(v.round(), 0.0, 255.0);
    if v.is_nan() { 0 } else { v as u8 }
}

/// Parse a leading run of hex digits the way a lenient radix-16 parser does.
///
/// Stops at the first non-hex character. Returns `None` when there is no
/// leading digit at all. Digits beyond 64 bits wrap; callers mask anyway.
pub fn parse_hex_prefix(s: &str) -> Option<u64> {
    let mut value: u64 = 0;
    let mut any = false;
    for c in s.trim().chars() {
        match c.to_digit(16) {
            Some(d) => {
                value = value.wrapping_mul(16).wrapping_add(d as u64);
                any = true;
            }
            None => break,
        }
    }
    if any { Some(value) } else { None }
}

/// Parse the longest leading decimal number of `s` ("50abc" → 50, "12.5%" → 12.5).
///
/// Accepts leading whitespace, an optional sign, digits with at most one
/// '.', and an exponent only when digits follow it. Returns NaN when no
/// digit leads the string, so words like "inf" or "nan" are rejected.
pub fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut any = int_end > end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        any |= frac_end > end + 1;
        end = frac_end;
    }
    if !any {
        return f64::NAN;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse a user-typed hex color ("#FF8040", "ff8040", "F84") to a packed
/// 24-bit RGB value. 3-digit shorthand is expanded. Invalid input yields 0.
pub fn parse_hex_color(hex: &str) -> u32 {
    let hex = hex.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    let expanded: String = if hex.chars().count() <= 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_string()
    };
    parse_hex_prefix(&expanded).map_or(0, |v| (v & 0xFF_FFFF) as u32)
}

/// Decode `%XX` escapes. Malformed escapes are kept literally and invalid
/// UTF-8 is replaced rather than rejected.
pub fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hi = (bytes[i + 1] as char).to_digit(16);
            let lo = (bytes[i + 2] as char).to_digit(16);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                out.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Escape the characters that would break hash splitting: `%`, `=`, `#`,
/// and ASCII control characters.
pub fn percent_encode_name(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' | '=' | '#' => out.push_str(&format!("%{:02X}", c as u32)),
            c if c.is_ascii_control() => out.push_str(&format!("%{:02X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 10.0, 0.5) - 5.0).abs() < 1e-10);
        assert!((lerp(0.0, 10.0, 0.0) - 0.0).abs() < 1e-10);
        assert!((lerp(0.0, 10.0, 1.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-10.0), 350.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-1e-20), 0.0);
    }

    #[test]
    fn test_channel_to_byte() {
        assert_eq!(channel_to_byte(254.6), 255);
        assert_eq!(channel_to_byte(300.0), 255);
        assert_eq!(channel_to_byte(-4.0), 0);
        assert_eq!(channel_to_byte(f64::NAN), 0);
        assert_eq!(channel_to_byte(127.4), 127);
    }

    #[test]
    fn test_parse_hex_prefix() {
        assert_eq!(parse_hex_prefix("ff8040"), Some(0xFF8040));
        assert_eq!(parse_hex_prefix("12zz"), Some(0x12));
        assert_eq!(parse_hex_prefix("zz"), None);
        assert_eq!(parse_hex_prefix(""), None);
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("50"), 50.0);
        assert_eq!(parse_float_prefix("50abc"), 50.0);
        assert_eq!(parse_float_prefix("  12.5%"), 12.5);
        assert_eq!(parse_float_prefix("-3.25e1x"), -32.5);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("7."), 7.0);
        assert_eq!(parse_float_prefix("2e"), 2.0);
        assert_eq!(parse_float_prefix("2e+"), 2.0);
        assert_eq!(parse_float_prefix("1.2.3"), 1.2);
        for bad in ["", "inf", "infinity", "nan", "NaN", "abc", "-", ".", "+.e5"] {
            assert!(parse_float_prefix(bad).is_nan(), "{bad:?}");
        }
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff8040"), 0xFF8040);
        assert_eq!(parse_hex_color("F0A"), 0xFF00AA);
        assert_eq!(parse_hex_color("#abc"), 0xAABBCC);
        assert_eq!(parse_hex_color("nope"), 0);
        assert_eq!(parse_hex_color("1FF8040"), 0xFF8040);
    }

    #[test]
    fn test_percent_coding() {
        assert_eq!(percent_decode("My%20Gradient"), "My Gradient");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_encode_name("a=b%c#d"), "a%3Db%25c%23d");
        assert_eq!(percent_decode(&percent_encode_name("a=b%c#d")), "a=b%c#d");
        assert_eq!(percent_encode_name("sunset über"), "sunset über");
    }
}
