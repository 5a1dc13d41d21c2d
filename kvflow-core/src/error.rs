// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for kvflow sequence pipelines
//!
//! A single root [`KvFlowError`] covers the three ways a pipeline can fail:
//! rejected configuration (raised by constructors, before any element is
//! pulled), violated preconditions of length-dependent operations, and
//! failures of the underlying source, which travel in-band as
//! [`SequenceItem::Error`](crate::SequenceItem::Error).
//!
//! # Examples
//!
//! ```
//! use kvflow_core::{KvFlowError, Result};
//!
//! fn window_length(length: usize) -> Result<usize> {
//!     if length == 0 {
//!         return Err(KvFlowError::invalid_configuration("window", "length must be positive"));
//!     }
//!     Ok(length)
//! }
//!
//! assert!(window_length(0).is_err());
//! ```

/// Root error type for all kvflow operations and transformations
#[derive(Debug, thiserror::Error)]
pub enum KvFlowError {
    /// An operation was constructed with arguments it cannot work with
    ///
    /// Always raised at construction time, never while a sequence is pulled.
    #[error("Invalid configuration for {operation}: {reason}")]
    InvalidConfiguration {
        /// Name of the rejecting operation
        operation: &'static str,
        /// What was wrong with the arguments
        reason: String,
    },

    /// A length-dependent operation was handed a source that never ends
    ///
    /// Detected from the source's `size_hint` before anything is buffered.
    #[error("{operation} requires a finite sequence, but the source reports itself as unbounded")]
    UnboundedSource {
        /// Name of the length-dependent operation
        operation: &'static str,
    },

    /// A materializing operation buffered more elements than it was allowed to
    #[error("Resource limit exceeded: {resource} (limit: {limit})")]
    ResourceLimitExceeded {
        /// Name of the buffer that hit its limit
        resource: String,
        /// The configured limit
        limit: usize,
    },

    /// The underlying source failed while producing an element
    #[error("Source error: {context}")]
    SourceError {
        /// Description of the failure
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user-provided sources and callbacks so they
    /// can be propagated through a pipeline unchanged.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl KvFlowError {
    /// Create a configuration error for the named operation
    pub fn invalid_configuration(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            operation,
            reason: reason.into(),
        }
    }

    /// Create an unbounded-source error for the named operation
    #[must_use]
    pub const fn unbounded_source(operation: &'static str) -> Self {
        Self::UnboundedSource { operation }
    }

    /// Create a resource-limit error
    pub fn resource_limit_exceeded(resource: impl Into<String>, limit: usize) -> Self {
        Self::ResourceLimitExceeded {
            resource: resource.into(),
            limit,
        }
    }

    /// Create a source error with the given context
    pub fn source_error(context: impl Into<String>) -> Self {
        Self::SourceError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this error was raised while constructing an operation
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// Check if this error reports a violated finiteness precondition
    ///
    /// Both an unbounded source and an exceeded materialization limit count.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::UnboundedSource { .. } | Self::ResourceLimitExceeded { .. }
        )
    }
}

/// Specialized Result type for kvflow operations
pub type Result<T> = std::result::Result<T, KvFlowError>;

/// Extension trait for converting foreign errors into `KvFlowError`
pub trait IntoKvFlowError {
    /// Convert this error into a `KvFlowError`
    fn into_kvflow(self) -> KvFlowError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoKvFlowError for E {
    fn into_kvflow(self) -> KvFlowError {
        KvFlowError::user_error(self)
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(KvFlowError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(KvFlowError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<KvFlowError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| match e.into() {
            KvFlowError::UserError(inner) => KvFlowError::SourceError {
                context: format!("{}: {inner}", f()),
            },
            KvFlowError::SourceError { context } => KvFlowError::SourceError {
                context: format!("{}: {context}", f()),
            },
            other => other,
        })
    }
}

impl Clone for KvFlowError {
    fn clone(&self) -> Self {
        match self {
            Self::InvalidConfiguration { operation, reason } => Self::InvalidConfiguration {
                operation,
                reason: reason.clone(),
            },
            Self::UnboundedSource { operation } => Self::UnboundedSource { operation },
            Self::ResourceLimitExceeded { resource, limit } => Self::ResourceLimitExceeded {
                resource: resource.clone(),
                limit: *limit,
            },
            Self::SourceError { context } => Self::SourceError {
                context: context.clone(),
            },
            // The boxed error cannot be cloned, keep its message
            Self::UserError(e) => Self::SourceError {
                context: format!("User error: {e}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_configuration_error_display() {
        let err = KvFlowError::invalid_configuration("window", "length must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for window: length must be positive"
        );
        assert!(err.is_configuration());
        assert!(!err.is_precondition());
    }

    #[test]
    fn test_precondition_errors() {
        assert!(KvFlowError::unbounded_source("tail").is_precondition());
        assert!(KvFlowError::resource_limit_exceeded("window buffer", 8).is_precondition());
        assert!(!KvFlowError::source_error("boom").is_precondition());
    }

    #[test]
    fn test_context_wraps_user_error() {
        let result: std::result::Result<(), io::Error> = Err(io::Error::other("disk"));

        let err = result.map_err(IntoKvFlowError::into_kvflow).context("reading source");

        assert_eq!(
            err.unwrap_err().to_string(),
            "Source error: reading source: disk"
        );
    }

    #[test]
    fn test_context_keeps_configuration_error() {
        let result: Result<()> = Err(KvFlowError::invalid_configuration("chunk", "size is zero"));

        let err = result.context("building pipeline").unwrap_err();

        assert!(err.is_configuration());
    }

    #[test]
    fn test_clone_user_error_keeps_message() {
        let err = KvFlowError::user_error(io::Error::other("broken pipe"));

        let cloned = err.clone();

        assert!(matches!(cloned, KvFlowError::SourceError { .. }));
        assert!(cloned.to_string().contains("broken pipe"));
    }
}
