use proptest::prelude::*;

use crate::node::Node;

/// The maximum number of values in a generated input sequence.
pub(crate) const N_VALUES: usize = 200;

/// Generated values are drawn from [0..[`VALUE_MAX`]).
///
/// A small value domain makes duplicate values within a single input
/// sequence common.
pub(crate) const VALUE_MAX: u8 = 20;

/// Generate arbitrary (possibly empty) input sequences.
pub(crate) fn arbitrary_values() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0..VALUE_MAX, 0..N_VALUES)
}

/// Generate a non-empty input sequence and a valid, inclusive `(lo, hi)`
/// query range within it.
pub(crate) fn arbitrary_query() -> impl Strategy<Value = (Vec<u8>, usize, usize)> {
    prop::collection::vec(0..VALUE_MAX, 1..N_VALUES)
        .prop_flat_map(|values| {
            let n = values.len();
            (Just(values), 0..n, 0..n)
        })
        .prop_map(|(values, a, b)| (values, a.min(b), a.max(b)))
}

/// Link a new leaf as the left child of `n`, returning it.
pub(crate) fn add_left<T>(n: &mut Node<T>, position: usize, value: T) -> &mut Node<T> {
    assert!(n.left().is_none());
    n.set_left(Some(Box::new(Node::new(position, value))));
    n.left_mut().unwrap()
}

/// Link a new leaf as the right child of `n`, returning it.
pub(crate) fn add_right<T>(n: &mut Node<T>, position: usize, value: T) -> &mut Node<T> {
    assert!(n.right().is_none());
    n.set_right(Some(Box::new(Node::new(position, value))));
    n.right_mut().unwrap()
}
