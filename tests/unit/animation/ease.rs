use super::*;

const ALL: [Ease; 9] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InOutSin,
    Ease::OutBack,
];

#[test]
fn endpoints_are_exact() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease} at 1");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        if ease == Ease::OutBack {
            continue;
        }
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease}");
        assert!(b < c, "{ease}");
    }
}

#[test]
fn out_back_overshoots() {
    assert!(Ease::OutBack.apply(0.8) > 1.0);
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::InQuad.apply(-1.0), 0.0);
    assert_eq!(Ease::InQuad.apply(2.0), 1.0);
}

#[test]
fn parses_common_spellings() {
    assert_eq!("easeQuadInOut".parse::<Ease>().unwrap(), Ease::InOutQuad);
    assert_eq!("quad_in_out".parse::<Ease>().unwrap(), Ease::InOutQuad);
    assert_eq!("in_out_cubic".parse::<Ease>().unwrap(), Ease::InOutCubic);
    assert_eq!("easeCubic".parse::<Ease>().unwrap(), Ease::InOutCubic);
    assert_eq!(" Linear ".parse::<Ease>().unwrap(), Ease::Linear);
    assert!("bounce".parse::<Ease>().is_err());
}

#[test]
fn names_roundtrip() {
    for ease in ALL {
        assert_eq!(ease.name().parse::<Ease>().unwrap(), ease);
        let json = serde_json::to_string(&ease).unwrap();
        assert_eq!(serde_json::from_str::<Ease>(&json).unwrap(), ease);
    }
}

#[test]
fn custom_easing_sees_clamped_input() {
    fn square(t: f64) -> f64 {
        t * t
    }
    let e = Easing::Custom(square);
    assert_eq!(e.apply(0.5), 0.25);
    assert_eq!(e.apply(3.0), 1.0);
    assert_eq!(Easing::default().apply(0.5), 0.5);
}
