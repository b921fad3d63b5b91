use super::*;

const E1: ElementId = ElementId(1);
const E2: ElementId = ElementId(2);

fn coordinator() -> Coordinator<&'static str> {
    Coordinator::default()
}

#[test]
fn enter_highlights_and_places_tooltip() {
    let mut c = coordinator();
    let fx = c.pointer_enter(E1, "r1", Point::new(10.0, 20.0), Millis(0.0));
    assert_eq!(
        fx.as_slice(),
        &[
            PointerEffect::Highlight(E1),
            PointerEffect::TooltipMoved {
                anchor: Point::new(25.0, 35.0)
            },
        ]
    );
    assert_eq!(c.hover().unwrap().record, "r1");
    assert_eq!(c.anchor(), Some(Point::new(25.0, 35.0)));
}

#[test]
fn entering_another_element_without_leave_switches_hover() {
    let mut c = coordinator();
    c.pointer_enter(E1, "r1", Point::new(0.0, 0.0), Millis(0.0));
    let fx = c.pointer_enter(E2, "r2", Point::new(5.0, 5.0), Millis(1.0));

    assert_eq!(fx[0], PointerEffect::Unhighlight(E1));
    assert_eq!(fx[1], PointerEffect::Highlight(E2));
    let hover = c.hover().unwrap();
    assert_eq!(hover.element, E2);
    assert_eq!(hover.record, "r2");
    assert_eq!(hover.point, Point::new(5.0, 5.0));
    assert_eq!(c.highlighted(), Some(E2));
}

#[test]
fn moving_onto_another_element_is_an_implicit_switch() {
    let mut c = coordinator();
    c.pointer_enter(E1, "r1", Point::new(0.0, 0.0), Millis(0.0));
    let fx = c.pointer_move(E2, "r2", Point::new(1.0, 1.0), Millis(2.0));
    assert!(fx.contains(&PointerEffect::Unhighlight(E1)));
    assert_eq!(c.hover().unwrap().record, "r2");
}

#[test]
fn move_keeps_the_entered_record() {
    let mut c = coordinator();
    c.pointer_enter(E1, "r1", Point::new(0.0, 0.0), Millis(0.0));
    c.pointer_move(E1, "changed", Point::new(3.0, 3.0), Millis(50.0));
    assert_eq!(c.hover().unwrap().record, "r1");
    assert_eq!(c.hover().unwrap().point, Point::new(3.0, 3.0));
}

#[test]
fn last_move_of_a_burst_always_lands() {
    let mut c = coordinator();
    c.pointer_enter(E1, "r1", Point::new(0.0, 0.0), Millis(0.0));
    assert!(c.pointer_move(E1, "r1", Point::new(1.0, 0.0), Millis(2.0)).is_empty());
    assert!(c.pointer_move(E1, "r1", Point::new(2.0, 0.0), Millis(4.0)).is_empty());
    assert!(c.pointer_move(E1, "r1", Point::new(3.0, 0.0), Millis(6.0)).is_empty());
    assert_eq!(c.hover().unwrap().point, Point::new(0.0, 0.0));

    assert_eq!(c.poll(Millis(8.0)), None);
    assert_eq!(
        c.poll(Millis(10.0)),
        Some(PointerEffect::TooltipMoved {
            anchor: Point::new(18.0, 15.0)
        })
    );
    assert_eq!(c.hover().unwrap().point, Point::new(3.0, 0.0));
}

#[test]
fn leave_clears_and_cancels_pending_move() {
    let mut c = coordinator();
    c.pointer_enter(E1, "r1", Point::new(0.0, 0.0), Millis(0.0));
    c.pointer_move(E1, "r1", Point::new(1.0, 1.0), Millis(1.0));

    assert!(c.pointer_leave(E2).is_empty());
    let fx = c.pointer_leave(E1);
    assert_eq!(
        fx.as_slice(),
        &[PointerEffect::Unhighlight(E1), PointerEffect::TooltipHidden]
    );
    assert!(c.hover().is_none());
    assert_eq!(c.poll(Millis(100.0)), None);
}

#[test]
fn removed_element_clears_hover() {
    let mut c = coordinator();
    c.pointer_enter(E1, "r1", Point::new(0.0, 0.0), Millis(0.0));
    assert!(c.element_removed(E2).is_empty());
    assert_eq!(c.element_removed(E1).len(), 2);
    assert_eq!(c.highlighted(), None);
}

#[test]
fn teardown_forgets_everything() {
    let mut c = Coordinator::new(10.0, Vec2::new(0.0, 0.0));
    c.pointer_enter(E1, "r1", Point::new(4.0, 4.0), Millis(0.0));
    c.pointer_move(E1, "r1", Point::new(5.0, 5.0), Millis(1.0));
    c.teardown();
    assert!(c.hover().is_none());
    assert_eq!(c.poll(Millis(50.0)), None);
}
