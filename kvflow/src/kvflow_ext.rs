// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Entry point turning plain key-value iterables into a [`KvFlow`].

use crate::KvFlow;

/// Extension trait giving every iterable of `(K, V)` pairs a `.sequence()`.
///
/// # Examples
///
/// ```rust
/// use kvflow::prelude::*;
///
/// let tail = vec![(1, "x"), (2, "y"), (3, "z")]
///     .sequence()
///     .tail(2)
///     .collect_values()
///     .unwrap();
///
/// assert_eq!(tail, vec![(2, "y"), (3, "z")]);
/// ```
pub trait KvFlowExt<'a, K, V> {
    /// Wraps the pairs in a lazy [`KvFlow`]; nothing is pulled yet.
    fn sequence(self) -> KvFlow<'a, K, V>;
}

impl<'a, K, V, I> KvFlowExt<'a, K, V> for I
where
    I: IntoIterator<Item = (K, V)>,
    I::IntoIter: 'a,
    K: 'a,
    V: 'a,
{
    fn sequence(self) -> KvFlow<'a, K, V> {
        KvFlow::from_pairs(self)
    }
}
