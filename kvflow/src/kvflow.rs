// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use kvflow_core::{
    Equivalence, IntoSequence, Operation, Result, Sequence, SequenceItem, Transformation,
};
use kvflow_operations::{
    All, Chunk, Cycle, DiffKeys, Distinct, Explode, Filter, Frequency, Has, Keys, Last, Limit,
    Map, Pair, Predicate, Prepend, RSample, Shuffle, Since, Skip, Slice, Tail, Window, Zip,
    Zipped,
};
use std::hash::Hash;

/// A concrete wrapper that provides every kvflow operation as a method.
///
/// `KvFlow` wraps a boxed [`Sequence`] and offers the operations and
/// transformations directly, so a pipeline reads left to right. Operation
/// methods consume the wrapper and return a new one without pulling
/// anything; transformation methods (`has`, `last`, `all`,
/// `collect_values`) drive the pipeline and return a [`Result`].
///
/// `KvFlow` is itself an iterator of [`SequenceItem`]s. Its methods shadow
/// the `Iterator` methods of the same name (`skip`, `map`, `filter`, `zip`,
/// `cycle`, `last`); those keep kvflow's key-value and error semantics.
pub struct KvFlow<'a, K, V> {
    inner: Sequence<'a, K, V>,
}

impl<'a, K: 'a, V: 'a> KvFlow<'a, K, V> {
    /// Wraps a sequence.
    pub fn new(sequence: Sequence<'a, K, V>) -> Self {
        Self { inner: sequence }
    }

    /// Wraps plain pairs, each becoming a value item.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        I::IntoIter: 'a,
    {
        Self::new(pairs.into_sequence())
    }

    /// Wraps items that may already carry errors.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = SequenceItem<(K, V)>>,
        I::IntoIter: 'a,
    {
        Self::new(kvflow_core::from_items(items))
    }

    /// Unwraps the inner sequence.
    pub fn into_sequence(self) -> Sequence<'a, K, V> {
        self.inner
    }

    /// Applies any operation.
    pub fn apply<O>(self, operation: O) -> KvFlow<'a, O::Key, O::Value>
    where
        O: Operation<K, V> + 'a,
        O::Key: 'a,
        O::Value: 'a,
    {
        KvFlow::new(operation.apply(self.inner))
    }

    /// Runs any transformation.
    ///
    /// # Errors
    /// Returns whatever the transformation returns.
    pub fn transform<T>(self, transformation: T) -> Result<T::Output>
    where
        T: Transformation<K, V>,
    {
        transformation.apply(self.inner)
    }

    /// See [`Distinct`].
    pub fn distinct(self) -> Self
    where
        V: Clone + PartialEq,
    {
        self.apply(Distinct::new())
    }

    /// See [`Distinct::with_equivalence`].
    pub fn distinct_by<C>(self, equivalence: C) -> Self
    where
        V: Clone,
        C: Equivalence<V> + Clone + 'a,
    {
        self.apply(Distinct::with_equivalence(equivalence))
    }

    /// See [`Pair`].
    pub fn pair(self) -> KvFlow<'a, V, V> {
        self.apply(Pair)
    }

    /// See [`Chunk`].
    ///
    /// # Errors
    /// Fails if `size` is zero.
    pub fn chunk(self, size: usize) -> Result<KvFlow<'a, usize, Vec<V>>> {
        Ok(self.apply(Chunk::new(size)?))
    }

    /// See [`Skip`].
    pub fn skip(self, count: usize) -> Self {
        self.apply(Skip::new(count))
    }

    /// See [`Limit`].
    pub fn limit(self, count: usize) -> Self {
        self.apply(Limit::new(count))
    }

    /// See [`Slice`].
    pub fn slice(self, offset: usize, length: Option<usize>) -> Self {
        match length {
            Some(length) => self.apply(Slice::new(offset, length)),
            None => self.apply(Slice::starting_at(offset)),
        }
    }

    /// See [`Tail`].
    pub fn tail(self, count: usize) -> Self {
        self.apply(Tail::new(count))
    }

    /// See [`Window`].
    ///
    /// # Errors
    /// Fails if `lengths` is empty or contains a zero.
    pub fn window(
        self,
        lengths: impl IntoIterator<Item = usize>,
    ) -> Result<KvFlow<'a, usize, Vec<V>>>
    where
        V: Clone,
    {
        Ok(self.apply(Window::new(lengths)?))
    }

    /// See [`Zip`].
    ///
    /// # Errors
    /// Fails if `others` is empty.
    pub fn zip_with<I, S, OK>(self, others: I) -> Result<KvFlow<'a, usize, Zipped<V>>>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = (OK, V)> + Clone + 'a,
        S::IntoIter: 'a,
    {
        Ok(self.apply(Zip::new(others)?))
    }

    /// See [`Cycle`].
    pub fn cycle(self) -> Self
    where
        K: Clone,
        V: Clone,
    {
        self.apply(Cycle)
    }

    /// See [`Keys`].
    pub fn keys(self) -> KvFlow<'a, usize, K> {
        self.apply(Keys)
    }

    /// See [`Map`].
    pub fn map<W: 'a>(self, f: impl Fn(&K, V) -> W + 'a) -> KvFlow<'a, K, W> {
        self.apply(Map::new(f))
    }

    /// See [`Filter`].
    pub fn filter(self, predicate: impl Fn(&K, &V) -> bool + 'a) -> Self {
        self.apply(Filter::new(predicate))
    }

    /// See [`Prepend`].
    pub fn prepend(self, items: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Clone,
        V: Clone,
    {
        self.apply(Prepend::new(items))
    }

    /// See [`Since`].
    pub fn since(self, predicate: impl Fn(&K, &V) -> bool + 'static) -> Self {
        self.apply(Since::when(predicate))
    }

    /// See [`Since::new`].
    ///
    /// # Errors
    /// Fails if `predicates` is empty.
    pub fn since_any(self, predicates: impl IntoIterator<Item = Predicate<K, V>>) -> Result<Self> {
        Ok(self.apply(Since::new(predicates)?))
    }

    /// See [`Explode`].
    pub fn explode(self, delimiters: impl IntoIterator<Item = V>) -> KvFlow<'a, usize, Vec<V>>
    where
        V: PartialEq + Clone,
    {
        self.apply(Explode::new(delimiters))
    }

    /// See [`DiffKeys`].
    pub fn diff_keys(self, keys: impl IntoIterator<Item = K>) -> Self
    where
        K: PartialEq + Clone,
    {
        self.apply(DiffKeys::new(keys))
    }

    /// See [`Frequency`].
    pub fn frequency(self) -> KvFlow<'a, usize, V>
    where
        V: PartialEq,
    {
        self.apply(Frequency::new())
    }

    /// See [`RSample`].
    ///
    /// # Errors
    /// Fails unless `0.0 < probability <= 1.0`.
    pub fn rsample(self, probability: f64, seed: u64) -> Result<Self> {
        Ok(self.apply(RSample::new(probability, seed)?))
    }

    /// See [`Shuffle`].
    pub fn shuffle(self, seed: u64) -> Self {
        self.apply(Shuffle::new(seed))
    }

    /// See [`Has`].
    ///
    /// # Errors
    /// Returns the first source error met before a match.
    pub fn has(self, f: impl Fn(&K, &V) -> V) -> Result<bool>
    where
        V: PartialEq,
    {
        self.transform(Has::new(f))
    }

    /// See [`Last`].
    ///
    /// # Errors
    /// Fails on an endless input or the first source error.
    pub fn last(self) -> Result<Option<V>> {
        self.transform(Last)
    }

    /// See [`All`].
    ///
    /// # Errors
    /// Fails on an endless input or the first source error.
    pub fn all(self) -> Result<Vec<(K, V)>>
    where
        K: Eq + Hash + Clone,
    {
        self.transform(All)
    }

    /// Pulls every pair, keeping duplicate keys.
    ///
    /// # Errors
    /// Returns the first source error.
    pub fn collect_values(self) -> Result<Vec<(K, V)>> {
        self.inner.map(SequenceItem::into_result).collect()
    }

    /// Exposes the flow as a `futures::Stream`.
    #[cfg(feature = "async")]
    pub fn into_stream(self) -> impl futures::Stream<Item = SequenceItem<(K, V)>> + 'a {
        crate::into_stream(self.inner)
    }
}

impl<'a, K, V> From<Sequence<'a, K, V>> for KvFlow<'a, K, V> {
    fn from(sequence: Sequence<'a, K, V>) -> Self {
        Self { inner: sequence }
    }
}

impl<K, V> Iterator for KvFlow<'_, K, V> {
    type Item = SequenceItem<(K, V)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
