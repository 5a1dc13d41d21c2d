// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{error::Result, sequence::Sequence};

/// A terminal consumer that pulls a [`Sequence`] and produces a concrete value.
///
/// A transformation stops pulling as soon as its result is known. Reaching the
/// end of the sequence is not an error; each transformation defines what it
/// returns for empty input.
///
/// # Errors
///
/// The first [`SequenceItem::Error`](crate::SequenceItem::Error) pulled before
/// the result is known is returned as `Err`.
pub trait Transformation<K, V> {
    /// The produced value
    type Output;

    /// Consumes `input` and produces the output value.
    fn apply(&self, input: Sequence<'_, K, V>) -> Result<Self::Output>;
}

impl<K, V, T> Transformation<K, V> for &T
where
    T: Transformation<K, V> + ?Sized,
{
    type Output = T::Output;

    fn apply(&self, input: Sequence<'_, K, V>) -> Result<Self::Output> {
        (**self).apply(input)
    }
}
