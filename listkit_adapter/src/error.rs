// Copyright 2025 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the adapter crate.

/// Result type alias for adapter operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported for caller contract violations.
///
/// Misconfiguring the empty-state span so that it differs from the grid's
/// column count is also a caller error, but the adapter cannot observe the
/// grid and so never reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A negative index was passed to the position classifier.
    #[error("index {index} is out of range for a collection of {len} items")]
    OutOfRange {
        /// The rejected index.
        index: isize,
        /// Size of the collection the index was checked against.
        len: usize,
    },

    /// A span size or span count of zero was supplied.
    #[error("span sizes and span counts must be at least 1")]
    ZeroSpan,
}
