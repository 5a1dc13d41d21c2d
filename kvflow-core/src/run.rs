// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The run harness that threads a sequence through operations.
//!
//! [`run`] adapts any iterator of [`SequenceItem`]s into a [`Sequence`] and
//! hands it to one operation. [`Pipeline`] folds `run` over an ordered list of
//! operations that keep the key and value types, left to right. Neither adds
//! buffering of its own, so the laziness of a pipeline is exactly the laziness
//! of its operations.
//!
//! ```
//! use kvflow_core::{run, IntoSequence, Operation, Pipeline, Sequence, SequenceItem};
//!
//! struct Double;
//!
//! impl Operation<usize, i32> for Double {
//!     type Key = usize;
//!     type Value = i32;
//!
//!     fn apply<'a>(&self, input: Sequence<'a, usize, i32>) -> Sequence<'a, usize, i32>
//!     where
//!         Self: 'a,
//!     {
//!         Box::new(input.map(|item| item.map(|(k, v)| (k, v * 2))))
//!     }
//! }
//!
//! let pipeline = Pipeline::new().with(Double).with(Double);
//! let values: Vec<i32> = pipeline
//!     .run(vec![(0, 1), (1, 2)].into_sequence())
//!     .map(|item| item.unwrap().1)
//!     .collect();
//!
//! assert_eq!(values, vec![4, 8]);
//! assert_eq!(run(&Double, vec![SequenceItem::Value((0_usize, 5))]).count(), 1);
//! ```

use crate::{
    operation::Operation, sequence::Sequence, sequence_item::SequenceItem,
    transformation::Transformation,
};

/// Applies a single operation to an input and returns the uniform boxed output.
pub fn run<'a, K, V, O, I>(operation: &O, input: I) -> Sequence<'a, O::Key, O::Value>
where
    O: Operation<K, V> + 'a,
    I: IntoIterator<Item = SequenceItem<(K, V)>>,
    I::IntoIter: 'a,
    K: 'a,
    V: 'a,
{
    operation.apply(Box::new(input.into_iter()))
}

type BoxedOperation<'p, K, V> = Box<dyn Operation<K, V, Key = K, Value = V> + 'p>;

/// An ordered list of type-preserving operations.
///
/// Operations are applied in insertion order. Since operations hold no
/// execution state, a pipeline can be run any number of times.
pub struct Pipeline<'p, K, V> {
    operations: Vec<BoxedOperation<'p, K, V>>,
}

impl<'p, K, V> Pipeline<'p, K, V> {
    /// Creates an empty pipeline, which passes its input through unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    /// Appends an operation.
    #[must_use]
    pub fn with<O>(mut self, operation: O) -> Self
    where
        O: Operation<K, V, Key = K, Value = V> + 'p,
    {
        self.operations.push(Box::new(operation));
        self
    }

    /// Appends an operation in place.
    pub fn push<O>(&mut self, operation: O)
    where
        O: Operation<K, V, Key = K, Value = V> + 'p,
    {
        self.operations.push(Box::new(operation));
    }

    /// Number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the pipeline has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Threads `input` through every stage, left to right.
    pub fn run<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, K, V>
    where
        'p: 'a,
        K: 'a,
        V: 'a,
    {
        self.operations
            .iter()
            .fold(input, |sequence, operation| operation.apply(sequence))
    }

    /// Runs the pipeline and hands the result to a terminal transformation.
    ///
    /// # Errors
    /// Returns whatever error the transformation reports.
    pub fn run_into<'a, T>(
        &self,
        input: Sequence<'a, K, V>,
        transformation: &T,
    ) -> crate::Result<T::Output>
    where
        T: Transformation<K, V>,
        'p: 'a,
        K: 'a,
        V: 'a,
    {
        transformation.apply(self.run(input))
    }
}

impl<K, V> Default for Pipeline<'_, K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> core::fmt::Debug for Pipeline<'_, K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.operations.len())
            .finish()
    }
}
