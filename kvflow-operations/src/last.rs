// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::materialize::is_unbounded;
use kvflow_core::{KvFlowError, Result, Sequence, Transformation};

/// Returns the value of the final pair, or `None` for an empty input.
///
/// The input is pulled to the end without buffering.
///
/// # Errors
///
/// - [`KvFlowError::UnboundedSource`] if the input declares itself endless
/// - the first source error met
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Last;

impl<K, V> Transformation<K, V> for Last {
    type Output = Option<V>;

    fn apply(&self, input: Sequence<'_, K, V>) -> Result<Option<V>> {
        if is_unbounded(&input) {
            warn!("last: refusing to consume an unbounded source");
            return Err(KvFlowError::unbounded_source("last"));
        }

        let mut last = None;
        for item in input {
            let (_, value) = item.into_result()?;
            last = Some(value);
        }
        Ok(last)
    }
}
