// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core traits and types for lazy key-value sequence pipelines.
//!
//! - [`Sequence`]: a boxed, pull-based iterator of `(key, value)` pairs
//! - [`SequenceItem`]: each element is a value or an in-band [`KvFlowError`]
//! - [`Operation`]: lazy `Sequence -> Sequence` transformation, composable with
//!   [`OperationExt::then`]
//! - [`Transformation`]: terminal `Sequence -> Result<Output>` consumer
//! - [`run`] and [`Pipeline`]: the harness threading a sequence through operations
//! - [`Equivalence`]: pluggable value comparison, strict by default

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod equivalence;
pub mod error;
pub mod operation;
pub mod run;
pub mod sequence;
pub mod sequence_item;
pub mod transformation;

pub use self::equivalence::{by_fn, Equivalence, FnEquivalence, StrictEq};
pub use self::error::{IntoKvFlowError, KvFlowError, Result, ResultExt};
pub use self::operation::{Compose, Operation, OperationExt};
pub use self::run::{run, Pipeline};
pub use self::sequence::{empty, from_items, from_values, IntoSequence, Sequence};
pub use self::sequence_item::SequenceItem;
pub use self::transformation::Transformation;
