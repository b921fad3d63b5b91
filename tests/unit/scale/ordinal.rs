use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Color {
    Red,
    Green,
    Blue,
}

#[test]
fn assignment_is_positional() {
    let s = OrdinalScale::new(["A", "B", "C"], vec![Color::Red, Color::Green, Color::Blue]).unwrap();
    assert_eq!(*s.get(&"A").unwrap(), Color::Red);
    assert_eq!(*s.get(&"B").unwrap(), Color::Green);
    assert_eq!(*s.get(&"C").unwrap(), Color::Blue);
}

#[test]
fn assignment_ignores_lookup_order() {
    let s = OrdinalScale::new(["A", "B", "C"], vec![Color::Red, Color::Green, Color::Blue]).unwrap();
    let looked_up: Vec<_> = ["C", "A", "B"].iter().map(|k| *s.get(k).unwrap()).collect();
    assert_eq!(looked_up, vec![Color::Blue, Color::Red, Color::Green]);
}

#[test]
fn palette_cycles_when_domain_is_longer() {
    let s = OrdinalScale::new(1..=5, vec![Color::Red, Color::Green]).unwrap();
    assert_eq!(*s.get(&3).unwrap(), Color::Red);
    assert_eq!(*s.get(&4).unwrap(), Color::Green);
    assert_eq!(*s.get(&5).unwrap(), Color::Red);
}

#[test]
fn unknown_category_fails_loudly() {
    let s = OrdinalScale::new(["A"], vec![Color::Red]).unwrap();
    assert!(matches!(s.get(&"Z"), Err(VizjoinError::UnknownCategory(_))));
}

#[test]
fn degenerate_inputs() {
    assert!(matches!(
        OrdinalScale::<&str, Color>::new([], vec![Color::Red]),
        Err(VizjoinError::DomainEmpty(_))
    ));
    assert!(matches!(
        OrdinalScale::<&str, Color>::new(["A"], vec![]),
        Err(VizjoinError::Validation(_))
    ));
}

fn rebuilt_equal<K: Clone + Eq + Hash + Debug>(keys: &[K]) -> bool {
    let build = || OrdinalScale::new(keys.iter().cloned(), vec![Color::Red, Color::Blue]).unwrap();
    build() == build()
}

#[test]
fn rebuilds_compare_equal_for_any_key_type() {
    assert!(rebuilt_equal(&["A", "B", "C"]));
    assert!(rebuilt_equal(&[10i64, 20]));
    let a = OrdinalScale::new(["A", "B"], vec![Color::Red]).unwrap();
    let b = OrdinalScale::new(["B", "A"], vec![Color::Red]).unwrap();
    assert_ne!(a, b);
}
