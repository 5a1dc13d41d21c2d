// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy key-value sequence operations and terminal transformations.
//!
//! Every operation implements [`Operation`](kvflow_core::Operation): it wraps
//! an input [`Sequence`](kvflow_core::Sequence) and returns a new one without
//! pulling anything. Transformations implement
//! [`Transformation`](kvflow_core::Transformation) and consume a sequence into
//! a value.
//!
//! ## Operator Categories
//!
//! ### Single pass
//!
//! - **[`Distinct`]**: first occurrence of each value
//! - **[`Pair`]**: rekeys a flat sequence by adjacency
//! - **[`Chunk`]**, **[`Explode`]**: group values by count or by delimiter
//! - **[`Skip`]**, **[`Limit`]**, **[`Slice`]**: positional selection
//! - **[`Keys`]**, **[`Map`]**, **[`Filter`]**, **[`Prepend`]**, **[`Since`]**,
//!   **[`DiffKeys`]**, **[`RSample`]**
//!
//! ### Length-dependent
//!
//! These buffer their input once on the first pull. An input whose
//! `size_hint` marks it as endless is rejected with
//! [`KvFlowError::UnboundedSource`](kvflow_core::KvFlowError::UnboundedSource)
//! instead of hanging, and an optional capacity limit bounds the buffer.
//!
//! - **[`Tail`]**, **[`Window`]**, **[`Frequency`]**, **[`Shuffle`]**
//! - **[`Cycle`]** buffers once and then replays forever
//!
//! ### Multi-source
//!
//! - **[`Zip`]**: walks the input and N other sources in lock-step with a
//!   [`LockstepWalker`]
//!
//! ### Transformations
//!
//! - **[`Has`]**: short-circuiting membership test
//! - **[`Last`]**: final value
//! - **[`All`]**: associative vector with unique keys
//!
//! # Error Handling
//!
//! Source errors travel in-band as
//! [`SequenceItem::Error`](kvflow_core::SequenceItem::Error). Single-pass
//! operations forward them and continue; length-dependent operations forward
//! the first one and end; transformations return it.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
mod materialize;

pub mod all;
pub mod chunk;
pub mod cycle;
pub mod diff_keys;
pub mod distinct;
pub mod explode;
pub mod filter;
pub mod frequency;
pub mod has;
pub mod keys;
pub mod last;
pub mod length_schedule;
pub mod limit;
pub mod lockstep;
pub mod map;
pub mod pair;
pub mod prepend;
pub mod rsample;
pub mod shuffle;
pub mod since;
pub mod skip;
pub mod slice;
pub mod tail;
pub mod window;
pub mod zip;

pub use all::All;
pub use chunk::Chunk;
pub use cycle::Cycle;
pub use diff_keys::DiffKeys;
pub use distinct::Distinct;
pub use explode::Explode;
pub use filter::Filter;
pub use frequency::Frequency;
pub use has::Has;
pub use keys::Keys;
pub use last::Last;
pub use length_schedule::{LengthSchedule, ScheduleCursor};
pub use limit::Limit;
pub use lockstep::{LockstepWalker, SyncPolicy, Zipped};
pub use map::Map;
pub use pair::Pair;
pub use prepend::Prepend;
pub use rsample::RSample;
pub use shuffle::Shuffle;
pub use since::{Predicate, Since};
pub use skip::Skip;
pub use slice::Slice;
pub use tail::Tail;
pub use window::Window;
pub use zip::Zip;
