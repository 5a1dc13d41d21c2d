// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The pull-based key-value sequence every operation consumes and produces.
//!
//! A [`Sequence`] is a boxed iterator of [`SequenceItem`]s carrying `(key, value)`
//! pairs. Nothing is computed until the sequence is pulled, and it can be
//! traversed once. Keys need not be unique.
//!
//! ```
//! use kvflow_core::{IntoSequence, SequenceItem};
//!
//! let mut letters = vec![(0, "a"), (1, "b")].into_sequence();
//!
//! assert_eq!(letters.next().map(SequenceItem::unwrap), Some((0, "a")));
//! assert_eq!(letters.next().map(SequenceItem::unwrap), Some((1, "b")));
//! assert!(letters.next().is_none());
//! ```

use crate::sequence_item::SequenceItem;

/// A type-erased, single-pass sequence of `(key, value)` pairs.
pub type Sequence<'a, K, V> = Box<dyn Iterator<Item = SequenceItem<(K, V)>> + 'a>;

/// Conversion of plain key-value collections and iterators into a [`Sequence`].
pub trait IntoSequence<'a, K, V> {
    /// Wraps every pair as a [`SequenceItem::Value`] and boxes the iterator.
    fn into_sequence(self) -> Sequence<'a, K, V>;
}

impl<'a, K, V, I> IntoSequence<'a, K, V> for I
where
    I: IntoIterator<Item = (K, V)>,
    I::IntoIter: 'a,
    K: 'a,
    V: 'a,
{
    fn into_sequence(self) -> Sequence<'a, K, V> {
        Box::new(self.into_iter().map(SequenceItem::Value))
    }
}

/// Boxes an iterator that already yields [`SequenceItem`]s, such as a source
/// that can fail.
pub fn from_items<'a, K, V, I>(items: I) -> Sequence<'a, K, V>
where
    I: IntoIterator<Item = SequenceItem<(K, V)>>,
    I::IntoIter: 'a,
    K: 'a,
    V: 'a,
{
    Box::new(items.into_iter())
}

/// Keys every value by its zero-based position, like a list.
pub fn from_values<'a, V, I>(values: I) -> Sequence<'a, usize, V>
where
    I: IntoIterator<Item = V>,
    I::IntoIter: 'a,
    V: 'a,
{
    values.into_iter().enumerate().into_sequence()
}

/// A sequence that yields nothing.
pub fn empty<'a, K: 'a, V: 'a>() -> Sequence<'a, K, V> {
    Box::new(core::iter::empty())
}
