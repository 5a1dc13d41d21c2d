// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pluggable value comparison used by deduplication and matching.
//!
//! Operations that decide whether two values are "the same" take an
//! [`Equivalence`] instead of hard-coding `==`. The default, [`StrictEq`],
//! delegates to `PartialEq`: for a dynamically typed value enum this compares
//! the variant as well as the payload, so `Int(1)` and `Str("1")` stay distinct.
//! Looser notions of sameness are opt-in through [`by_fn`].
//!
//! ```
//! use kvflow_core::equivalence::{by_fn, Equivalence, StrictEq};
//!
//! assert!(StrictEq.equivalent(&1, &1));
//! assert!(!StrictEq.equivalent(&1, &2));
//!
//! let case_insensitive = by_fn(|a: &String, b: &String| a.eq_ignore_ascii_case(b));
//! assert!(case_insensitive.equivalent(&"Rose".to_string(), &"ROSE".to_string()));
//! ```

/// Decides whether two values count as equal.
pub trait Equivalence<V: ?Sized> {
    /// Returns `true` if `left` and `right` are the same value.
    fn equivalent(&self, left: &V, right: &V) -> bool;
}

/// Structural equality through `PartialEq`, with no coercion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictEq;

impl<V: PartialEq + ?Sized> Equivalence<V> for StrictEq {
    fn equivalent(&self, left: &V, right: &V) -> bool {
        left == right
    }
}

/// An [`Equivalence`] backed by a closure.
#[derive(Debug, Clone, Copy)]
pub struct FnEquivalence<F>(F);

impl<V: ?Sized, F> Equivalence<V> for FnEquivalence<F>
where
    F: Fn(&V, &V) -> bool,
{
    fn equivalent(&self, left: &V, right: &V) -> bool {
        (self.0)(left, right)
    }
}

/// Wraps a comparison closure as an [`Equivalence`].
pub const fn by_fn<F>(compare: F) -> FnEquivalence<F> {
    FnEquivalence(compare)
}
