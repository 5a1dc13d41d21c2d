// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cycle operator repeating a finite input forever.

use crate::materialize::{materialize, CapacityLimit};
use kvflow_core::{Operation, Sequence, SequenceItem};

const NAME: &str = "cycle";

/// Repeats the input endlessly.
///
/// The input is buffered once on the first pull and replayed from the buffer
/// afterwards. An empty input produces an empty sequence. The produced
/// sequence reports itself as endless through `size_hint`, so a following
/// length-dependent operation fails fast instead of hanging; bound it with
/// [`Limit`](crate::Limit) first.
///
/// # Errors
///
/// An endless or failing input yields one error, after which the sequence
/// ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cycle;

impl<K, V> Operation<K, V> for Cycle
where
    K: Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        Box::new(CycleIter::Pending(input))
    }
}

enum CycleIter<'a, K, V> {
    Pending(Sequence<'a, K, V>),
    Replaying { buffer: Vec<(K, V)>, position: usize },
    Done,
}

impl<K: Clone, V: Clone> Iterator for CycleIter<'_, K, V> {
    type Item = SequenceItem<(K, V)>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Self::Pending(_) = self {
            let Self::Pending(input) = core::mem::replace(self, Self::Done) else {
                return None;
            };
            match materialize(input, NAME, CapacityLimit::unlimited()) {
                Ok(buffer) if buffer.is_empty() => return None,
                Ok(buffer) => {
                    *self = Self::Replaying {
                        buffer,
                        position: 0,
                    };
                }
                Err(e) => return Some(SequenceItem::Error(e)),
            }
        }

        match self {
            Self::Replaying { buffer, position } => {
                let pair = buffer[*position].clone();
                *position = (*position + 1) % buffer.len();
                Some(SequenceItem::Value(pair))
            }
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Pending(input) if input.size_hint().1 == Some(0) => (0, Some(0)),
            Self::Pending(_) | Self::Replaying { .. } => (usize::MAX, None),
            Self::Done => (0, Some(0)),
        }
    }
}

