use super::*;
use crate::animation::ease::Ease;

#[test]
fn defaults_match_the_bar_chart() {
    let c = ChartConfig::default();
    assert_eq!(c.inner_width(), 760.0);
    assert_eq!(c.inner_height(), 360.0);
    assert_eq!(c.transition.duration_ms, 1000.0);
    assert_eq!(c.tooltip_offset(), Vec2::new(15.0, 15.0));
    assert!(c.validate().is_ok());
}

#[test]
fn partial_json_fills_defaults() {
    let c = ChartConfig::from_json_str(
        r##"{
            "width": 500,
            "transition": {"duration_ms": 1500, "ease": "easeQuadInOut"},
            "highlight": {"stroke": "#ff0000"}
        }"##,
    )
    .unwrap();
    assert_eq!(c.width, 500.0);
    assert_eq!(c.height, 400.0);
    assert_eq!(c.transition.ease, Ease::InOutQuad);
    assert_eq!(c.highlight.stroke, Rgba8::rgb(255, 0, 0));
    assert_eq!(c.highlight.idle_stroke, Rgba8::transparent());
}

#[test]
fn unknown_fields_are_rejected() {
    let err = ChartConfig::from_json_str(r#"{"widht": 10}"#).unwrap_err();
    assert!(matches!(err, VizjoinError::Serde(_)));
}

#[test]
fn invalid_values_fail_validation() {
    let cases = [
        r#"{"width": 0}"#,
        r#"{"margin": {"top": 0, "right": 0, "bottom": 0, "left": -1}}"#,
        r#"{"width": 30, "margin": {"top": 0, "right": 20, "bottom": 0, "left": 20}}"#,
        r#"{"transition": {"duration_ms": -5}}"#,
        r#"{"throttle_ms": -1}"#,
        r#"{"update_flash": {"from_width": -4}}"#,
    ];
    for case in cases {
        let err = ChartConfig::from_json_str(case).unwrap_err();
        assert!(matches!(err, VizjoinError::Validation(_)), "{case}: {err}");
    }
}

#[test]
fn flash_step_goes_white_to_black() {
    let step = FlashStyle::default().step();
    assert_eq!(step.from.color(&Attr::Stroke), Some(Rgba8::WHITE));
    assert_eq!(step.to.number(&Attr::StrokeWidth), Some(2.0));
}

#[test]
fn json_roundtrip_keeps_config() {
    let c = ChartConfig {
        update_flash: Some(FlashStyle::default()),
        ..ChartConfig::default()
    };
    let back = ChartConfig::from_json_str(&c.to_json_string().unwrap()).unwrap();
    assert_eq!(back, c);
}
