// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pair operator that rekeys a flat sequence by adjacency.

use crate::chunk::Chunk;
use kvflow_core::{run, Operation, Sequence, SequenceItem};

/// Turns a flat alternating sequence into an associative one.
///
/// Values are taken two at a time: the first of each couple becomes the key
/// and the second becomes the value. Original keys are discarded. A trailing
/// value without a partner is dropped, never padded.
///
/// `[(0, "a"), (1, "b"), (2, "c"), (3, "d")]` becomes `[("a", "b"), ("c", "d")]`,
/// and `[(0, "a"), (1, "b"), (2, "c")]` becomes `[("a", "b")]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pair;

impl<K, V> Operation<K, V> for Pair {
    type Key = V;
    type Value = V;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, V, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        Box::new(
            run(&Chunk::pairs(), input).filter_map(|item| match item {
                SequenceItem::Value((_, chunk)) => {
                    let mut couple = chunk.into_iter();
                    match (couple.next(), couple.next()) {
                        (Some(key), Some(value)) => Some(SequenceItem::Value((key, value))),
                        // Incomplete trailing chunk
                        _ => None,
                    }
                }
                SequenceItem::Error(e) => Some(SequenceItem::Error(e)),
            }),
        )
    }
}
