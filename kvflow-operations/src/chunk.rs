// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Chunk operator that groups consecutive values into fixed-size batches.

use crate::materialize::{initial_capacity, CapacityLimit};
use core::iter::Fuse;
use kvflow_core::{KvFlowError, Operation, Result, Sequence, SequenceItem};

/// Groups consecutive values into chunks of `size`.
///
/// Each chunk is emitted as `(chunk index, values)`; input keys are dropped.
/// The final chunk may be shorter than `size` if the input length is not a
/// multiple of it.
///
/// # Error Handling
///
/// When an error arrives, the chunk being filled is discarded and the error
/// is forwarded. Chunking resumes with the next value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    size: usize,
}

impl Chunk {
    /// Creates a chunking operation.
    ///
    /// # Errors
    /// Returns [`KvFlowError::InvalidConfiguration`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            debug!("chunk: rejected size of zero");
            return Err(KvFlowError::invalid_configuration(
                "chunk",
                "size must be at least 1",
            ));
        }
        Ok(Self { size })
    }

    pub(crate) const fn pairs() -> Self {
        Self { size: 2 }
    }

    /// The configured chunk size.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl<K, V> Operation<K, V> for Chunk {
    type Key = usize;
    type Value = Vec<V>;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, usize, Vec<V>>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        Box::new(ChunkIter {
            input: input.fuse(),
            size: self.size,
            index: 0,
        })
    }
}

struct ChunkIter<I> {
    input: Fuse<I>,
    size: usize,
    index: usize,
}

impl<I, K, V> Iterator for ChunkIter<I>
where
    I: Iterator<Item = SequenceItem<(K, V)>>,
{
    type Item = SequenceItem<(usize, Vec<V>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chunk = Vec::with_capacity(initial_capacity(self.size, CapacityLimit::unlimited()));

        while chunk.len() < self.size {
            match self.input.next() {
                Some(SequenceItem::Value((_, value))) => chunk.push(value),
                Some(SequenceItem::Error(e)) => return Some(SequenceItem::Error(e)),
                None => break,
            }
        }

        if chunk.is_empty() {
            return None;
        }

        let index = self.index;
        self.index += 1;
        Some(SequenceItem::Value((index, chunk)))
    }
}
