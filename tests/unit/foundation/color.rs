use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgba(1.0, 0.0, 0.0, 1.0));

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);

    assert!(Color::hex("#12345").is_err());
    assert!(Color::hex("#zz0000").is_err());
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 1.0));

    let c: Color = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 0.9));

    assert!(serde_json::from_value::<Color>(json!([0.1, 0.2])).is_err());
}

#[test]
fn alpha_suffix_matches_css_hex() {
    let base = Color::hex("#3B82F6").unwrap();
    assert_eq!(base.with_alpha_byte(0x33), Color::hex("#3B82F633").unwrap());
    assert_eq!(base.to_hex(), "#3b82f6ff");
}

#[test]
fn premul_quantization() {
    let p = Color::rgba(1.0, 0.5, 0.0, 0.5).to_rgba8_premul();
    assert_eq!(p, Rgba8Premul { r: 128, g: 64, b: 0, a: 128 });
    assert_eq!(Color::TRANSPARENT.to_rgba8_premul(), Rgba8Premul::transparent());
}

#[test]
fn fade_scales_alpha() {
    let c = Color::WHITE.fade(0.25);
    assert!((c.a - 0.25).abs() < 1e-12);
    assert_eq!(c.r, 1.0);
}
