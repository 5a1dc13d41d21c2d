// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The contract every lazy sequence operation implements.

use crate::sequence::Sequence;

/// A lazy transformation from one key-value [`Sequence`] into another.
///
/// An operation is pure configuration: `apply` takes `&self`, never mutates
/// the configuration, and the returned sequence does not borrow it. The same
/// operation value can therefore be applied to any number of inputs.
///
/// # Laziness
///
/// `apply` must not pull from `input`. Work happens only when the returned
/// sequence is pulled, and only as much input is observed as the operation's
/// semantics require. Operations that must see the whole input before they
/// can emit (length-dependent operations) document it and accept finite
/// input only.
///
/// # Errors
///
/// Invalid configuration is rejected by the operation's constructor. Errors
/// produced by the source arrive as [`SequenceItem::Error`](crate::SequenceItem::Error)
/// and are forwarded, never swallowed.
pub trait Operation<K, V> {
    /// Key type of the produced sequence
    type Key;
    /// Value type of the produced sequence
    type Value;

    /// Wraps `input` in this operation's transformation.
    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, Self::Key, Self::Value>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
}

/// Sequential composition of operations.
///
/// Composition is associative: `a.then(b).then(c)` and `a.then(b.then(c))`
/// produce the same sequence. Whether `next` accepts what `self` produces is
/// checked where the composition is applied.
pub trait OperationExt: Sized {
    /// Chains `next` after this operation.
    fn then<Next>(self, next: Next) -> Compose<Self, Next> {
        Compose::new(self, next)
    }
}

impl<O> OperationExt for O {}

/// Two operations applied one after the other.
#[derive(Debug, Clone)]
pub struct Compose<First, Second> {
    first: First,
    second: Second,
}

impl<First, Second> Compose<First, Second> {
    /// Creates the composition `second ∘ first`.
    pub const fn new(first: First, second: Second) -> Self {
        Self { first, second }
    }
}

impl<K, V, First, Second> Operation<K, V> for Compose<First, Second>
where
    First: Operation<K, V>,
    Second: Operation<First::Key, First::Value>,
{
    type Key = Second::Key;
    type Value = Second::Value;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, Self::Key, Self::Value>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        self.second.apply(self.first.apply(input))
    }
}

impl<K, V, O> Operation<K, V> for &O
where
    O: Operation<K, V> + ?Sized,
{
    type Key = O::Key;
    type Value = O::Value;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, Self::Key, Self::Value>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        (**self).apply(input)
    }
}

impl<K, V, O> Operation<K, V> for Box<O>
where
    O: Operation<K, V> + ?Sized,
{
    type Key = O::Key;
    type Value = O::Value;

    fn apply<'a>(&self, input: Sequence<'a, K, V>) -> Sequence<'a, Self::Key, Self::Value>
    where
        Self: 'a,
        K: 'a,
        V: 'a,
    {
        (**self).apply(input)
    }
}
