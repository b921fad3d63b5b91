use super::*;
use serde_json::json;

fn parse(v: serde_json::Value) -> ScaleConfig {
    serde_json::from_value(v).unwrap()
}

#[test]
fn band_config_with_padding_shorthand() {
    let cfg = parse(json!({
        "kind": "band",
        "domain": [1, 2, 3, 4],
        "range": [0.0, 400.0],
        "padding": 0.0
    }));
    let scale = make_scale(&cfg).unwrap();
    assert_eq!(scale.kind(), "band");
    assert_eq!(scale.bandwidth(), Some(100.0));
    assert_eq!(
        scale.map_key(&Key::Int(3)).unwrap(),
        AttrValue::Number(200.0)
    );
}

#[test]
fn empty_band_domain_is_reported() {
    let cfg = parse(json!({"kind": "band", "domain": [], "range": [0.0, 1.0]}));
    assert!(matches!(make_scale(&cfg), Err(VizjoinError::DomainEmpty(_))));
}

#[test]
fn linear_config_maps_numbers_and_int_keys() {
    let cfg = parse(json!({"kind": "linear", "domain": [0.0, 250.0], "range": [400.0, 0.0]}));
    let scale = make_scale(&cfg).unwrap();
    assert_eq!(scale.map_number(125.0).unwrap(), AttrValue::Number(200.0));
    assert_eq!(scale.map_key(&Key::Int(0)).unwrap(), AttrValue::Number(400.0));
    assert!(scale.map_key(&Key::from("x")).is_err());
}

#[test]
fn sequential_config_outputs_colors() {
    let cfg = parse(json!({
        "kind": "sequential",
        "domain": [10.0, 0.0],
        "interpolator": {"ramp": ["#000000", "#ffffff"]}
    }));
    let scale = make_scale(&cfg).unwrap();
    assert_eq!(scale.map_number(10.0).unwrap(), AttrValue::Color(Rgba8::BLACK));
    assert_eq!(scale.map_number(0.0).unwrap(), AttrValue::Color(Rgba8::WHITE));
}

#[test]
fn ordinal_config_is_positional() {
    let cfg = parse(json!({
        "kind": "ordinal",
        "domain": ["A", "B", "C"],
        "palette": ["#ff0000", "#00ff00", "#0000ff"]
    }));
    let scale = make_scale(&cfg).unwrap();
    assert_eq!(
        scale.map_key(&Key::from("B")).unwrap(),
        AttrValue::Color(Rgba8::rgb(0, 255, 0))
    );
    assert!(scale.map_number(1.0).is_err());
    assert!(matches!(
        scale.map_key(&Key::from("D")),
        Err(VizjoinError::UnknownCategory(_))
    ));
}

#[test]
fn quantize_config_steps() {
    let cfg = parse(json!({"kind": "quantize", "domain": [0.0, 10.0], "range": [1.0, 2.0]}));
    let scale = make_scale(&cfg).unwrap();
    assert_eq!(scale.map_number(7.0).unwrap(), AttrValue::Number(2.0));
    assert!(scale.map_number(f64::NAN).is_err());
}

#[test]
fn unknown_fields_are_rejected() {
    let res = serde_json::from_value::<ScaleConfig>(json!({
        "kind": "linear",
        "domain": [0.0, 1.0],
        "range": [0.0, 1.0],
        "nice": true
    }));
    assert!(res.is_err());
}

#[test]
fn rebuilding_from_same_config_is_identical() {
    let cfg = parse(json!({"kind": "band", "domain": ["a", "b"], "range": [0.0, 1.0], "padding": 0.1}));
    assert_eq!(make_scale(&cfg).unwrap(), make_scale(&cfg).unwrap());
}
