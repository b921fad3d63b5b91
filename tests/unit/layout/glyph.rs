use super::*;

#[test]
fn petals_split_the_full_turn() {
    assert_eq!(petal_rotations(4), vec![0.0, 90.0, 180.0, 270.0]);
    assert_eq!(petal_rotations(5)[1], 72.0);
    assert!(petal_rotations(0).is_empty());
}

#[test]
fn satellites_sit_on_the_ring() {
    let offsets = satellite_offsets(SATELLITE_COUNT, SATELLITE_RADIUS);
    assert_eq!(offsets.len(), 5);
    assert!((offsets[0].x - 30.0).abs() < 1e-9);
    assert!(offsets[0].y.abs() < 1e-9);
    for o in &offsets {
        assert!((o.hypot() - 30.0).abs() < 1e-9);
    }
}

#[test]
fn petal_counts_cover_five_to_twelve() {
    let scale = petal_count_scale([0.0, 800.0]).unwrap();
    assert_eq!(scale.apply(0.0), Some(&5));
    assert_eq!(scale.apply(800.0), Some(&12));
    assert_eq!(scale.apply(399.0), Some(&8));
}
