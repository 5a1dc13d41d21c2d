// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::KvFlowError;

/// A sequence element that is either a value or an in-band error.
///
/// Sources report failures by yielding `Error`; operations forward such items
/// unchanged and transformations surface the first one as `Err`.
#[derive(Debug, Clone)]
pub enum SequenceItem<T> {
    /// A successful value
    Value(T),
    /// A failure of the underlying source
    Error(KvFlowError),
}

impl<T: PartialEq> PartialEq for SequenceItem<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SequenceItem::Value(a), SequenceItem::Value(b)) => a == b,
            _ => false, // Errors are never equal
        }
    }
}

impl<T> SequenceItem<T> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, SequenceItem::Value(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, SequenceItem::Error(_))
    }

    /// Converts from `SequenceItem<T>` to `Option<T>`, discarding errors.
    pub fn ok(self) -> Option<T> {
        match self {
            SequenceItem::Value(v) => Some(v),
            SequenceItem::Error(_) => None,
        }
    }

    /// Converts from `SequenceItem<T>` to `Option<KvFlowError>`, discarding values.
    pub fn err(self) -> Option<KvFlowError> {
        match self {
            SequenceItem::Value(_) => None,
            SequenceItem::Error(e) => Some(e),
        }
    }

    /// Maps the contained value, propagating errors unchanged.
    pub fn map<U, F>(self, f: F) -> SequenceItem<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            SequenceItem::Value(v) => SequenceItem::Value(f(v)),
            SequenceItem::Error(e) => SequenceItem::Error(e),
        }
    }

    /// Chains a function that may itself produce an error item.
    pub fn and_then<U, F>(self, f: F) -> SequenceItem<U>
    where
        F: FnOnce(T) -> SequenceItem<U>,
    {
        match self {
            SequenceItem::Value(v) => f(v),
            SequenceItem::Error(e) => SequenceItem::Error(e),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    /// Returns the carried `KvFlowError` for an `Error` item.
    pub fn into_result(self) -> crate::Result<T> {
        self.into()
    }

    /// Returns the contained value, panicking if it's an error.
    ///
    /// # Panics
    ///
    /// Panics if the item is an `Error`.
    pub fn unwrap(self) -> T {
        match self {
            SequenceItem::Value(v) => v,
            SequenceItem::Error(e) => {
                panic!("called `SequenceItem::unwrap()` on an `Error` value: {e}")
            }
        }
    }
}

impl<T> From<crate::Result<T>> for SequenceItem<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(v) => SequenceItem::Value(v),
            Err(e) => SequenceItem::Error(e),
        }
    }
}

impl<T> From<SequenceItem<T>> for crate::Result<T> {
    fn from(item: SequenceItem<T>) -> Self {
        match item {
            SequenceItem::Value(v) => Ok(v),
            SequenceItem::Error(e) => Err(e),
        }
    }
}
