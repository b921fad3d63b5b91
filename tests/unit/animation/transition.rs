use super::*;
use serde_json::json;

fn linear(start: f64, end: f64, at: f64, duration: f64) -> Transition {
    Transition {
        element: ElementId(1),
        attribute: Attr::X,
        start_value: AttrValue::Number(start),
        end_value: AttrValue::Number(end),
        start_time: Millis(at),
        duration_ms: duration,
        easing: Easing::Named(Ease::Linear),
        group: TransitionGroupId(0),
        state: TransitionState::Running,
    }
}

#[test]
fn progress_is_clamped() {
    let t = linear(0.0, 100.0, 100.0, 1000.0);
    assert_eq!(t.progress(Millis(0.0)), 0.0);
    assert_eq!(t.progress(Millis(600.0)), 0.5);
    assert_eq!(t.progress(Millis(5000.0)), 1.0);
    assert_eq!(t.end_time(), Millis(1100.0));
}

#[test]
fn sample_interpolates_and_lands_exactly() {
    let mut t = linear(0.0, 100.0, 0.0, 1000.0);
    assert_eq!(t.sample(Millis(250.0)).unwrap(), AttrValue::Number(25.0));

    fn overshoot(_: f64) -> f64 {
        1.3
    }
    t.easing = Easing::Custom(overshoot);
    assert_eq!(t.sample(Millis(1000.0)).unwrap(), AttrValue::Number(100.0));
}

#[test]
fn zero_duration_completes_at_start() {
    let t = linear(0.0, 1.0, 10.0, 0.0);
    assert_eq!(t.progress(Millis(9.0)), 0.0);
    assert_eq!(t.progress(Millis(10.0)), 1.0);
}

#[test]
fn config_parses_with_defaults() {
    let cfg: TransitionConfig =
        serde_json::from_value(json!({"duration_ms": 1500.0, "ease": "easeQuadInOut"})).unwrap();
    assert_eq!(cfg.duration_ms, 1500.0);
    assert_eq!(cfg.delay_ms, 0.0);
    assert_eq!(cfg.ease, Ease::InOutQuad);

    let d: TransitionConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(d, TransitionConfig::default());
}

#[test]
fn config_validation() {
    assert!(TransitionConfig::millis(-1.0).validate().is_err());
    assert!(TransitionConfig::millis(f64::NAN).validate().is_err());
    assert!(TransitionConfig::millis(10.0).with_delay(-5.0).validate().is_err());
    assert!(TransitionConfig::millis(0.0).validate().is_ok());
}

#[test]
fn opts_debug_hides_callback() {
    let opts = TransitionOpts::millis(10.0).on_end(|_| {});
    assert!(format!("{opts:?}").contains("on_end: true"));
}
