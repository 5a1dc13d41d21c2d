// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the kvflow sequence library.
//!
//! This crate provides fixture values, instrumented sources and assertion
//! helpers for testing operations and transformations. It is meant for
//! development and testing only.
//!
//! # Key Types
//!
//! ## `Scalar`
//!
//! A small dynamically-typed value, for tests where values of different types
//! share one sequence:
//!
//! ```rust
//! use kvflow_test_utils::Scalar;
//!
//! // Same text, different type: never equal
//! assert_ne!(Scalar::Int(1), Scalar::from("1"));
//! ```
//!
//! ## Sources
//!
//! - [`CountingSource`] counts how many items downstream pulled
//! - [`ErrorInjectingSource`] inserts an error at a given position
//! - [`unbounded`] is an endless source that says so through `size_hint`
//!
//! # Examples
//!
//! ```rust
//! use kvflow_core::IntoSequence;
//! use kvflow_test_utils::{fixtures::letters, CountingSource};
//!
//! let (source, pulls) = CountingSource::new(letters(5));
//! let mut sequence = source.into_sequence();
//! sequence.next();
//!
//! assert_eq!(pulls.get(), 1);
//! ```

pub mod error_injection;
pub mod fixtures;
pub mod helpers;
pub mod scalar;
pub mod sources;

pub use error_injection::ErrorInjectingSource;
pub use helpers::{assert_sequence_ended, collect_items, collect_values, unwrap_sequence};
pub use scalar::Scalar;
pub use sources::{unbounded, CountingSource, PullCounter};
