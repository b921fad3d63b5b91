use super::*;

#[test]
fn attributes_declare_kinds() {
    assert_eq!(Attr::Height.kind(), AttrKind::Number);
    assert_eq!(Attr::Fill.kind(), AttrKind::Color);
    assert_eq!(Attr::Translate.kind(), AttrKind::Point);
    assert_eq!(Attr::Custom("petal_scale".into()).kind(), AttrKind::Number);
}

#[test]
fn interpolates_each_kind() {
    let n = AttrValue::Number(0.0).interpolate(&AttrValue::Number(10.0), 0.3).unwrap();
    assert_eq!(n, AttrValue::Number(3.0));

    let c = AttrValue::Color(Rgba8::BLACK)
        .interpolate(&AttrValue::Color(Rgba8::WHITE), 1.0)
        .unwrap();
    assert_eq!(c, AttrValue::Color(Rgba8::WHITE));

    let p = AttrValue::Point(Point::new(0.0, 0.0))
        .interpolate(&AttrValue::Point(Point::new(10.0, 20.0)), 0.5)
        .unwrap();
    assert_eq!(p, AttrValue::Point(Point::new(5.0, 10.0)));
}

#[test]
fn mismatched_kinds_cannot_interpolate() {
    let err = AttrValue::Number(1.0)
        .interpolate(&AttrValue::Color(Rgba8::BLACK), 0.5)
        .unwrap_err();
    assert!(matches!(err, VizjoinError::InvalidAttribute(_)));
}

#[test]
fn set_rejects_wrong_kind_and_non_finite() {
    let mut m = AttrMap::new();
    assert!(m.set(Attr::X, 4.0).is_ok());
    assert!(matches!(
        m.set(Attr::Fill, 4.0),
        Err(VizjoinError::InvalidAttribute(_))
    ));
    assert!(m.set(Attr::Y, f64::NAN).is_err());
    assert_eq!(m.len(), 1);
    assert_eq!(m.number(&Attr::X), Some(4.0));
}

#[test]
fn builder_defers_validation() {
    let m = AttrMap::new()
        .with(Attr::Opacity, 1.0)
        .with(Attr::Stroke, Rgba8::BLACK);
    assert!(m.validate().is_ok());
    assert_eq!(m.color(&Attr::Stroke), Some(Rgba8::BLACK));

    let bad = AttrMap::new().with(Attr::Stroke, 2.0);
    assert!(bad.validate().is_err());
}

#[test]
fn display_names() {
    assert_eq!(Attr::StrokeWidth.to_string(), "StrokeWidth");
    assert_eq!(Attr::Custom("k".into()).to_string(), "custom:k");
}
