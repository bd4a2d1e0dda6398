use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgb(255, 0, 0));

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert_eq!(c, Color::rgba(0, 0, 255, 128));

    let c: Color = "#fa0".parse().unwrap();
    assert_eq!(c, Color::rgb(0xff, 0xaa, 0x00));
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 10, "g": 20, "b": 30})).unwrap();
    assert_eq!(c, Color::rgb(10, 20, 30));

    let c: Color = serde_json::from_value(json!([10, 20, 30, 40])).unwrap();
    assert_eq!(c, Color::rgba(10, 20, 30, 40));
}

#[test]
fn rejects_malformed_hex() {
    assert!("#12345".parse::<Color>().is_err());
    assert!("#gg0000".parse::<Color>().is_err());
}

#[test]
fn hex_display_roundtrips_through_serde() {
    let c = Color::rgba(1, 2, 3, 4);
    let v = serde_json::to_value(c).unwrap();
    assert_eq!(v, json!("#01020304"));
    assert_eq!(Color::BLACK.to_string(), "#000000");
}

#[test]
fn premul_conversion_matches_foundation() {
    let c = Color::rgba(255, 0, 0, 128);
    assert_eq!(c.to_rgba8_premul().to_array(), [128, 0, 0, 128]);
}
