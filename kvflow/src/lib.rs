// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy, composable operations over key-value sequences.
//!
//! A pipeline is built from operations that each wrap a sequence of `(K, V)`
//! pairs into another one without pulling anything; a terminal
//! transformation then drives the pipeline and produces a value. Nothing runs
//! until it is pulled, and only as much input is read as the result needs.
//!
//! # Quick start
//!
//! ```rust
//! use kvflow::prelude::*;
//!
//! # fn main() -> kvflow::Result<()> {
//! let frames = vec!['a', 'b', 'c', 'b']
//!     .into_iter()
//!     .enumerate()
//!     .sequence()
//!     .distinct()
//!     .window([2])?
//!     .collect_values()?;
//!
//! assert_eq!(frames, vec![(0, vec!['a', 'b']), (1, vec!['b', 'c']), (2, vec!['c'])]);
//! # Ok(())
//! # }
//! ```
//!
//! # Crates
//!
//! - `kvflow-core`: the sequence model, [`Operation`], [`Transformation`],
//!   the [`run`] harness and [`Pipeline`]
//! - `kvflow-operations`: every operation and transformation
//! - this crate: the fluent [`KvFlow`] wrapper, the [`KvFlowExt`] entry point
//!   and, with the `async` feature, a `futures::Stream` bridge
//!
//! # Features
//!
//! - `async` (default): [`into_stream`] and [`KvFlow::into_stream`]
//! - `tracing`: structured logging of guard failures and buffering through
//!   `tracing`; without it warnings go to stderr

pub mod kvflow;
pub mod kvflow_ext;

#[cfg(feature = "async")]
pub mod into_stream;

// Re-export core types
pub use kvflow_core::{
    by_fn, empty, from_items, from_values, run, Compose, Equivalence, FnEquivalence,
    IntoKvFlowError, IntoSequence, KvFlowError, Operation, OperationExt, Pipeline, Result,
    ResultExt, Sequence, SequenceItem, StrictEq, Transformation,
};

// Re-export the operations
pub use kvflow_operations::{
    All, Chunk, Cycle, DiffKeys, Distinct, Explode, Filter, Frequency, Has, Keys, Last,
    LengthSchedule, Limit, LockstepWalker, Map, Pair, Predicate, Prepend, RSample,
    ScheduleCursor, Shuffle, Since, Skip, Slice, SyncPolicy, Tail, Window, Zip, Zipped,
};

#[cfg(feature = "async")]
pub use into_stream::into_stream;
pub use kvflow::KvFlow;
pub use kvflow_ext::KvFlowExt;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{KvFlow, KvFlowExt};
    pub use kvflow_core::{
        IntoSequence, KvFlowError, Operation, OperationExt, Result, Sequence, SequenceItem,
        Transformation,
    };
    pub use kvflow_operations::Zipped;
}
