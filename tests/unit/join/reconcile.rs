use super::*;

#[derive(Clone, Debug)]
struct Rec {
    id: Option<i64>,
    words: f64,
}

fn rec(id: i64, words: f64) -> Rec {
    Rec {
        id: Some(id),
        words,
    }
}

fn key(r: &Rec) -> Option<i64> {
    r.id
}

#[test]
fn disjoint_datasets_enter_everything_and_exit_everything() {
    let previous = [1, 2, 3];
    let next = [rec(10, 1.0), rec(11, 2.0)];
    let join = reconcile(&previous, &next, key).unwrap();

    let entered: Vec<i64> = join.enter.iter().map(|e| e.key).collect();
    assert_eq!(entered, vec![10, 11]);
    assert!(join.update.is_empty());
    assert_eq!(join.exit_keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn mutated_field_is_an_update_only() {
    let previous = [1, 2];
    let next = [rec(1, 100.0), rec(2, 999.0)];
    let join = reconcile(&previous, &next, key).unwrap();
    assert!(join.enter.is_empty());
    assert!(join.exit.is_empty());
    assert_eq!(join.update.len(), 2);
    assert_eq!(
        join.update[1],
        Update {
            key: 2,
            prev_index: 1,
            next_index: 1
        }
    );
    assert_eq!(next[join.update[1].next_index].words, 999.0);
}

#[test]
fn identical_key_sets_are_idempotent() {
    let next = [rec(3, 1.0), rec(1, 1.0), rec(2, 1.0)];
    let previous = [1, 2, 3];
    let join = reconcile(&previous, &next, key).unwrap();
    assert!(join.enter.is_empty());
    assert!(join.exit.is_empty());
    let order: Vec<i64> = join.update.iter().map(|u| u.key).collect();
    assert_eq!(order, vec![3, 1, 2]);
}

#[test]
fn mixed_pass_preserves_orders() {
    let previous = [5, 1, 4, 2];
    let next = [rec(2, 0.0), rec(7, 0.0), rec(1, 0.0), rec(8, 0.0)];
    let join = reconcile(&previous, &next, key).unwrap();

    assert_eq!(
        join.enter.iter().map(|e| e.key).collect::<Vec<_>>(),
        vec![7, 8]
    );
    assert_eq!(
        join.update.iter().map(|u| u.key).collect::<Vec<_>>(),
        vec![2, 1]
    );
    assert_eq!(join.exit_keys().copied().collect::<Vec<_>>(), vec![5, 4]);
}

#[test]
fn duplicates_enter_as_shadows_and_warn() {
    let previous = [1];
    let next = [rec(1, 0.0), rec(2, 0.0), rec(1, 0.0), rec(1, 0.0)];
    let join = reconcile(&previous, &next, key).unwrap();

    assert_eq!(join.update.len(), 1);
    assert_eq!(join.update[0].next_index, 0);
    assert_eq!(
        join.enter,
        vec![
            Enter {
                key: 2,
                next_index: 1,
                shadow: false
            },
            Enter {
                key: 1,
                next_index: 2,
                shadow: true
            },
            Enter {
                key: 1,
                next_index: 3,
                shadow: true
            },
        ]
    );
    assert_eq!(
        join.duplicates,
        vec![DuplicateKeyWarning {
            key: 1,
            occurrences: 3
        }]
    );
}

#[test]
fn duplicate_previous_entries_exit() {
    let previous = [1, 1];
    let next = [rec(1, 0.0)];
    let join = reconcile(&previous, &next, key).unwrap();
    assert_eq!(join.update[0].prev_index, 0);
    assert_eq!(
        join.exit,
        vec![Exit {
            key: 1,
            prev_index: 1
        }]
    );
}

#[test]
fn missing_key_aborts() {
    let next = [
        rec(1, 0.0),
        Rec {
            id: None,
            words: 3.0,
        },
    ];
    let err = reconcile(&[1], &next, key).unwrap_err();
    assert!(matches!(err, VizjoinError::MissingKey { index: 1 }));
}

#[test]
fn empty_to_empty_is_empty() {
    let join = reconcile::<i64, Rec, _>(&[], &[], key).unwrap();
    assert!(join.is_empty());
}
