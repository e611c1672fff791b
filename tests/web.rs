//! Browser tests for the JS-facing handle. Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use gradient_designer_wasm::{color_to_view, preset_hashes, view_to_color, GradientDesigner};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_hash_roundtrip_through_handle() {
    let d = GradientDesigner::from_hash("#sunset=0:FF0000-30:00FF00-100:0000FF");
    assert_eq!(d.name().as_deref(), Some("sunset"));
    assert_eq!(d.len(), 3);
    assert_eq!(d.hash(), "sunset=0:FF0000-30:00FF00-100:0000FF");
}

#[wasm_bindgen_test]
fn test_unknown_colorspace_is_an_error() {
    let d = GradientDesigner::from_hash("FF0000-0000FF");
    assert!(d.color_at(0.5, "cmyk", false).is_err());
    assert!(d.view(0, "hsv").is_ok());
    assert!(d.view(5, "hsv").is_err());
}

#[wasm_bindgen_test]
fn test_mutators_resort() {
    let mut d = GradientDesigner::from_hash("000000-808080-FFFFFF");
    d.set_position(0, 0.9).unwrap();
    let stops = d.stops();
    assert_eq!(stops[0], 0.5);
    assert_eq!(stops[2], 0.9);
    assert_eq!(stops[3], 0.0);

    d.set_color_hex(0, "#F00").unwrap();
    assert_eq!(d.stops()[1], 0xFF0000 as f64);

    d.remove(0).unwrap();
    assert_eq!(d.len(), 2);
}

#[wasm_bindgen_test]
fn test_interpolation_entry_points() {
    let mut d = GradientDesigner::from_hash("000000-FFFFFF");
    assert_eq!(d.color_at(0.5, "rgb", false).unwrap(), 0x808080);
    d.subdivide(1, "luv", false).unwrap();
    assert_eq!(d.len(), 3);
    d.normalize("hsv", 2).unwrap();
    assert!(d.normalize("hsv", 7).is_err());
}

#[wasm_bindgen_test]
fn test_random_uses_config_buffer() {
    let d = GradientDesigner::random(&[0.4, 1.0, 0.5, 1.0, 1.0, 0.0]);
    assert_eq!(d.len(), 3);
    assert!(d.name().is_some());
    let d = GradientDesigner::random(&[]);
    assert_eq!(d.len(), 5);
}

#[wasm_bindgen_test]
fn test_grd_export() {
    let d = GradientDesigner::from_hash("FF0000-0000FF");
    let bytes = d.export_grd(Some("x".into()), None);
    assert_eq!(&bytes[..4], b"8BGR");
    assert_eq!(bytes[8], 1);
    assert!(d.export_grd_hexdump(None, None).contains("6D 79 5F"));
}

#[wasm_bindgen_test]
fn test_picker_conversions() {
    let hsv = color_to_view(0x00FF00, "hsv").unwrap();
    assert!((hsv[0] - 120.0).abs() < 1e-9);
    assert_eq!(view_to_color("hsv", 240.0, 1.0, 1.0).unwrap(), 0x0000FF);
    assert_eq!(preset_hashes().length(), 9);
}

#[wasm_bindgen_test]
fn test_location_roundtrip() {
    let d = GradientDesigner::from_hash("loc=FF0000-00FF00");
    d.store_to_location().unwrap();
    let back = GradientDesigner::from_location().unwrap();
    assert_eq!(back.hash(), "loc=FF0000-00FF00");
}
