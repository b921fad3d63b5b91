use super::*;
use crate::foundation::error::VizjoinError;

#[derive(Clone, Debug, PartialEq)]
struct Book {
    id: Option<u32>,
    words: f64,
}

fn book(id: u32, words: f64) -> Book {
    Book {
        id: Some(id),
        words,
    }
}

fn key(b: &Book) -> Option<u32> {
    b.id
}

#[test]
fn first_pass_enters_every_record() {
    let mut b: Bindings<u32, Book> = Bindings::new();
    let plan = b.rebind(&[book(1, 100.0), book(2, 200.0)], key).unwrap();
    assert_eq!(plan.enter, vec![ElementId(0), ElementId(1)]);
    assert!(plan.update.is_empty() && plan.exit.is_empty());
    assert_eq!(b.len(), 2);
    assert_eq!(b.element_for(&2), Some(ElementId(1)));
}

#[test]
fn update_replaces_datum_and_keeps_element() {
    let mut b: Bindings<u32, Book> = Bindings::new();
    b.rebind(&[book(1, 100.0)], key).unwrap();
    b.write_attr(ElementId(0), &Attr::Height, AttrValue::Number(160.0));

    let plan = b.rebind(&[book(1, 150.0)], key).unwrap();
    assert_eq!(plan.update, vec![ElementId(0)]);
    let el = b.get(ElementId(0)).unwrap();
    assert_eq!(el.datum().words, 150.0);
    assert_eq!(el.attrs().number(&Attr::Height), Some(160.0));
}

#[test]
fn exit_marks_exiting_and_unindexes() {
    let mut b: Bindings<u32, Book> = Bindings::new();
    b.rebind(&[book(1, 1.0), book(2, 2.0)], key).unwrap();
    let plan = b.rebind(&[book(2, 2.0)], key).unwrap();

    assert_eq!(plan.exit, vec![ElementId(0)]);
    assert_eq!(b.get(ElementId(0)).unwrap().phase(), Phase::Exiting);
    assert_eq!(b.element_for(&1), None);
    assert_eq!(b.exiting().collect::<Vec<_>>(), vec![ElementId(0)]);
    assert_eq!(b.len(), 1);
    assert_eq!(b.iter().count(), 2);

    b.remove(ElementId(0));
    assert_eq!(b.iter().count(), 1);
}

#[test]
fn returning_key_gets_a_fresh_element_while_old_one_exits() {
    let mut b: Bindings<u32, Book> = Bindings::new();
    b.rebind(&[book(1, 1.0)], key).unwrap();
    b.rebind(&[], key).unwrap();
    let plan = b.rebind(&[book(1, 1.0)], key).unwrap();

    assert_eq!(plan.enter, vec![ElementId(1)]);
    assert_eq!(b.element_for(&1), Some(ElementId(1)));
    assert_eq!(b.get(ElementId(0)).unwrap().phase(), Phase::Exiting);
}

#[test]
fn live_order_follows_the_latest_dataset() {
    let mut b: Bindings<u32, Book> = Bindings::new();
    b.rebind(&[book(1, 1.0), book(2, 2.0)], key).unwrap();
    b.rebind(&[book(3, 3.0), book(2, 2.0), book(1, 1.0)], key)
        .unwrap();
    let keys: Vec<u32> = b.live().map(|el| *el.key()).collect();
    assert_eq!(keys, vec![3, 2, 1]);

    let plan = b.rebind(&[book(1, 1.0)], key).unwrap();
    assert_eq!(plan.exit, vec![ElementId(2), ElementId(1)]);
}

#[test]
fn shadows_get_their_own_element_without_stealing_the_key() {
    let mut b: Bindings<u32, Book> = Bindings::new();
    let plan = b.rebind(&[book(1, 1.0), book(1, 9.0)], key).unwrap();
    assert_eq!(plan.enter.len(), 2);
    assert_eq!(plan.duplicates, 1);
    assert_eq!(b.element_for(&1), Some(ElementId(0)));
    assert!(b.get(ElementId(1)).unwrap().is_shadow());

    let plan = b.rebind(&[book(1, 5.0)], key).unwrap();
    assert_eq!(plan.update, vec![ElementId(0)]);
    assert_eq!(plan.exit, vec![ElementId(1)]);
    assert_eq!(b.element_for(&1), Some(ElementId(0)));
}

#[test]
fn missing_key_leaves_bindings_untouched() {
    let mut b: Bindings<u32, Book> = Bindings::new();
    b.rebind(&[book(1, 1.0)], key).unwrap();
    let bad = [
        book(2, 2.0),
        Book {
            id: None,
            words: 0.0,
        },
    ];
    let err = b.rebind(&bad, key).unwrap_err();
    assert!(matches!(err, VizjoinError::MissingKey { index: 1 }));
    assert_eq!(b.len(), 1);
    assert_eq!(b.iter().count(), 1);
    assert_eq!(b.element_for(&1), Some(ElementId(0)));
}

#[test]
fn store_rejects_unknown_elements() {
    let mut b: Bindings<u32, Book> = Bindings::new();
    assert!(!b.write_attr(ElementId(4), &Attr::X, AttrValue::Number(1.0)));
    assert!(!b.contains(ElementId(4)));
    assert_eq!(b.read_attr(ElementId(4), &Attr::X), None);
}
