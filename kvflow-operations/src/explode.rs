// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Explode operator that splits values into groups at delimiters.

use core::iter::Fuse;
use kvflow_core::{Operation, Sequence, SequenceItem};

/// Splits the values into groups at every delimiter.
///
/// Groups are emitted as `(group index, values)`. Delimiters themselves are
/// dropped and compared by strict equality. Two adjacent delimiters produce
/// an empty group; a non-empty group after the last delimiter is emitted
/// when the input ends.
///
/// `a, |, b, c, |, |, d` with delimiter `|` yields `[a]`, `[b, c]`, `[]`, `[d]`.
///
/// # Error Handling
///
/// An error discards the group being filled and is forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explode<V> {
    delimiters: Vec<V>,
}

impl<V> Explode<V> {
    /// Splits at any of `delimiters`.
    pub fn new(delimiters: impl IntoIterator<Item = V>) -> Self {
        Self {
            delimiters: delimiters.into_iter().collect(),
        }
    }
}

impl<K, V> Operation<K, V> for Explode<V>
where
    V: PartialEq + Clone,
{
    type Key = usize;
    type Value = Vec<V>;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, usize, Vec<V>>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        Box::new(ExplodeIter {
            input: input.fuse(),
            delimiters: self.delimiters.clone(),
            index: 0,
        })
    }
}

struct ExplodeIter<I, V> {
    input: Fuse<I>,
    delimiters: Vec<V>,
    index: usize,
}

impl<I, K, V> Iterator for ExplodeIter<I, V>
where
    I: Iterator<Item = SequenceItem<(K, V)>>,
    V: PartialEq,
{
    type Item = SequenceItem<(usize, Vec<V>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut group = Vec::new();

        loop {
            match self.input.next() {
                Some(SequenceItem::Value((_, value))) if self.delimiters.contains(&value) => break,
                Some(SequenceItem::Value((_, value))) => group.push(value),
                Some(SequenceItem::Error(e)) => return Some(SequenceItem::Error(e)),
                None if group.is_empty() => return None,
                None => break,
            }
        }

        let index = self.index;
        self.index += 1;
        Some(SequenceItem::Value((index, group)))
    }
}
