//! # BBSE — Backward Binary Search Encoding
//!
//! Encodes integers from a known sorted range `[start, end)` as the
//! sequence of left/right decisions a binary search would make while
//! locating the value. The resulting path is prefix-free and carries no
//! length header, so each value can be stored and decoded independently
//! given the same range.
//!
//! ## Core Operations
//!
//! 1. **Encode**: narrow `[start, end)` around the target, recording one
//!    bit per comparison, stopping early on an exact midpoint hit
//! 2. **Encode from a custom midpoint**: bias the first split for skewed
//!    value distributions
//! 3. **Decode**: replay the recorded decisions over the same range and
//!    read the value off the final interval
//!
//! Path length never exceeds `ceil(log2(end - start))` bits, and the
//! early-stop rule typically shortens it further.
//!
//! ## Usage Example
//!
//! ```
//! use bbse::{decode, encode};
//!
//! let path = encode(0, 256, 128)?;
//! assert_eq!(decode(0, 256, &path), 128);
//!
//! let biased = bbse::encode_from(0, 16, 3, 4)?;
//! assert_eq!(bbse::decode_from(0, 16, &biased, 4), 3);
//! # Ok::<(), bbse::CodecError>(())
//! ```
//!
//! Encoding validates its arguments strictly; [`decode`] is total and
//! returns a best-effort value for any bit sequence. Use
//! [`decode_checked`] when paths come from an untrusted source.

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - each implements one half of the codec
pub mod codec; // Interval-narrowing encode/decode
pub mod path; // Bit-packed decision sequences

// Re-exports for convenience
pub use codec::{
    decode, decode_checked, decode_from, default_midpoint, encode, encode_from, max_path_len,
};
pub use path::DecisionPath;

use thiserror::Error;

/// Errors reported by the strict halves of the codec
///
/// Encoding validates every precondition before touching its output
/// buffer; [`decode_checked`] adds path validation on top. No operation
/// mutates anything before failing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Empty or inverted range
    #[error("invalid range: start {start} >= end {end}")]
    InvalidRange {
        /// Inclusive lower bound that was supplied
        start: i64,
        /// Exclusive upper bound that was supplied
        end: i64,
    },

    /// Target lies outside `[start, end)`
    #[error("target {target} out of range [{start}, {end})")]
    TargetOutOfRange {
        /// Value that was to be encoded
        target: i64,
        /// Inclusive lower bound of the range
        start: i64,
        /// Exclusive upper bound of the range
        end: i64,
    },

    /// First midpoint does not lie strictly inside `(start, end)`
    #[error("midpoint {midpoint} must lie strictly inside ({start}, {end})")]
    MidpointOutOfRange {
        /// Midpoint that was supplied
        midpoint: i64,
        /// Inclusive lower bound of the range
        start: i64,
        /// Exclusive upper bound of the range
        end: i64,
    },

    /// Path is not one the encoder could have produced for this range
    #[error("malformed path for range [{start}, {end})")]
    MalformedPath {
        /// Inclusive lower bound of the range
        start: i64,
        /// Exclusive upper bound of the range
        end: i64,
    },
}
