// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Has transformation: short-circuiting membership test.

use kvflow_core::{Equivalence, Result, Sequence, StrictEq, Transformation};

/// Returns `true` as soon as a pair's value matches what `f` computes for it.
///
/// For each pair `(k, v)`, `f(&k, &v)` produces a candidate that is compared
/// with `v` under the equivalence ([`StrictEq`] by default). The first match
/// returns `true` and nothing further is pulled. Exhausting the input returns
/// `false`; an empty input therefore returns `false`.
///
/// # Errors
///
/// The first source error met before a match is returned.
///
/// # Examples
///
/// ```rust
/// use kvflow_core::{IntoSequence, Transformation};
/// use kvflow_operations::Has;
///
/// let has_b = Has::new(|_: &usize, _: &char| 'b');
///
/// assert!(has_b.apply(vec![(0, 'a'), (1, 'b')].into_sequence()).unwrap());
/// assert!(!has_b.apply(vec![(0, 'a')].into_sequence()).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Has<F, C = StrictEq> {
    f: F,
    equivalence: C,
}

impl<F> Has<F> {
    /// Tests with strict equality.
    pub const fn new(f: F) -> Self {
        Self {
            f,
            equivalence: StrictEq,
        }
    }
}

impl<F, C> Has<F, C> {
    /// Tests with a custom notion of sameness.
    pub const fn with_equivalence(f: F, equivalence: C) -> Self {
        Self { f, equivalence }
    }
}

impl<K, V, F, C> Transformation<K, V> for Has<F, C>
where
    F: Fn(&K, &V) -> V,
    C: Equivalence<V>,
{
    type Output = bool;

    fn apply(&self, input: Sequence<'_, K, V>) -> Result<bool> {
        for item in input {
            let (key, value) = item.into_result()?;
            if self.equivalence.equivalent(&(self.f)(&key, &value), &value) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
