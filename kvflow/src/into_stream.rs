// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::Stream;
use kvflow_core::{Sequence, SequenceItem};

/// Exposes a sequence as a `futures::Stream`.
///
/// Each poll pulls one item from the sequence synchronously and is always
/// ready. The stream ends when the sequence does; errors are yielded in-band
/// like any other item.
pub fn into_stream<'a, K, V>(
    sequence: Sequence<'a, K, V>,
) -> impl Stream<Item = SequenceItem<(K, V)>> + 'a
where
    K: 'a,
    V: 'a,
{
    futures::stream::iter(sequence)
}
