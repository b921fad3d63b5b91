use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    assert_eq!(Rgba8::from_hex("#ff0000").unwrap(), Rgba8::rgb(255, 0, 0));
    assert_eq!(Rgba8::from_hex("1B0C41").unwrap(), Rgba8::rgb(0x1b, 0x0c, 0x41));

    let c = Rgba8::from_hex("#0000ff80").unwrap();
    assert_eq!(c.b, 255);
    assert_eq!(c.a, 128);
}

#[test]
fn rejects_malformed_hex() {
    assert!(Rgba8::from_hex("#fff").is_err());
    assert!(Rgba8::from_hex("#gg0000").is_err());
    assert!(Rgba8::from_hex("#ééé").is_err());
}

#[test]
fn hex_roundtrips_through_display() {
    let c = Rgba8::rgb(0xc6, 0x3d, 0x4d);
    assert_eq!(c.to_string(), "#c63d4d");
    assert_eq!(Rgba8::transparent().to_hex(), "#00000000");
}

#[test]
fn deserializes_hex_string_and_array() {
    let c: Rgba8 = serde_json::from_value(json!("#f8890c")).unwrap();
    assert_eq!(c, Rgba8::rgb(0xf8, 0x89, 0x0c));

    let c: Rgba8 = serde_json::from_value(json!([1, 2, 3, 4])).unwrap();
    assert_eq!(
        c,
        Rgba8 {
            r: 1,
            g: 2,
            b: 3,
            a: 4
        }
    );

    assert!(serde_json::from_value::<Rgba8>(json!([1, 2])).is_err());
}

#[test]
fn lerp_hits_endpoints_and_midpoint() {
    let a = Rgba8::BLACK;
    let b = Rgba8::WHITE;
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Rgba8::rgb(128, 128, 128));
    assert_eq!(a.lerp(b, 3.0), b);
}

#[test]
fn millis_arithmetic() {
    let t = Millis(200.0);
    assert_eq!(t.offset(50.0), Millis(250.0));
    assert_eq!(Millis(250.0).since(t), 50.0);
    assert_eq!(Millis::ZERO.since(t), -200.0);
}
