//! Interval-narrowing encode/decode
//!
//! Both directions run the same state machine: the state is the working
//! interval `[lo, hi)`, a transition narrows one bound to the current
//! midpoint. Encoding emits the bit that drives each transition; decoding
//! consumes the bits and replays them.

use tracing::trace;

use crate::path::DecisionPath;
use crate::CodecError;

/// Encode `target` from the range `[start, end)` using the default
/// first midpoint, `floor((start + end) / 2)`.
///
/// A single-element range needs no decisions and yields an empty path.
///
/// # Errors
/// [`CodecError::InvalidRange`] if `start >= end`;
/// [`CodecError::TargetOutOfRange`] if `target` lies outside `[start, end)`.
pub fn encode(start: i64, end: i64, target: i64) -> Result<DecisionPath, CodecError> {
    if start >= end {
        return Err(CodecError::InvalidRange { start, end });
    }
    if target < start || target >= end {
        return Err(CodecError::TargetOutOfRange { target, start, end });
    }

    if start + 1 == end {
        return Ok(DecisionPath::new());
    }

    encode_from(start, end, target, floor_midpoint(start, end))
}

/// Encode `target` using a caller-chosen midpoint for the first decision.
///
/// Biasing the first split shortens paths for values clustered away from
/// the range's center; every later split uses the floor midpoint of the
/// narrowed interval. The decoder must replay the same bias: pair this
/// with [`decode_from`] and the identical `midpoint`. With the default
/// midpoint this is exactly [`encode`], and plain [`decode`] applies.
///
/// # Errors
/// As [`encode`], plus [`CodecError::MidpointOutOfRange`] if `midpoint`
/// does not lie strictly inside `(start, end)`.
pub fn encode_from(
    start: i64,
    end: i64,
    target: i64,
    midpoint: i64,
) -> Result<DecisionPath, CodecError> {
    if start >= end {
        return Err(CodecError::InvalidRange { start, end });
    }
    if target < start || target >= end {
        return Err(CodecError::TargetOutOfRange { target, start, end });
    }
    if midpoint <= start || midpoint >= end {
        return Err(CodecError::MidpointOutOfRange {
            midpoint,
            start,
            end,
        });
    }

    let mut path = DecisionPath::with_capacity(max_path_len(start, end) as usize);
    let mut lo = start;
    let mut hi = end;
    let mut mid = midpoint;

    loop {
        // Exact hit: the remaining interval identifies the value.
        if target == mid {
            break;
        }

        if target < mid {
            path.push(false);
            hi = mid;
        } else {
            path.push(true);
            lo = mid;
        }

        if lo + 1 == hi {
            break;
        }

        mid = floor_midpoint(lo, hi);
    }

    trace!(start, end, target, bits = path.len(), "encoded value");
    Ok(path)
}

/// Decode a path over the same `[start, end)` range it was encoded with.
///
/// Replays each decision, narrowing the interval, then returns the floor
/// midpoint of whatever interval remains. Total over any bit sequence: no
/// validation is performed, and a path not produced for this range yields
/// a best-effort value. Use [`decode_checked`] to reject such paths.
pub fn decode(start: i64, end: i64, path: &DecisionPath) -> i64 {
    decode_from(start, end, path, floor_midpoint(start, end))
}

/// Decode a path whose first split was biased to `midpoint`.
///
/// Counterpart of [`encode_from`]: the supplied midpoint drives the first
/// replayed decision, every later one uses the floor midpoint of the
/// narrowed interval. Like [`decode`] this is total and performs no
/// validation; a midpoint or path that does not match the encoding call
/// yields a best-effort value.
pub fn decode_from(start: i64, end: i64, path: &DecisionPath, midpoint: i64) -> i64 {
    let mut lo = start;
    let mut hi = end;
    let mut mid = midpoint;

    for decision in path {
        if decision {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = floor_midpoint(lo, hi);
    }

    trace!(start, end, bits = path.len(), value = mid, "decoded path");
    mid
}

/// Decode a path, rejecting any sequence the encoder could not have
/// produced for `[start, end)`.
///
/// Valid paths are exactly the encoder's fixed points, so the check
/// decodes permissively and compares the path against a re-encode of the
/// result. This catches paths with trailing bits past the point where the
/// interval collapsed and paths that narrow past an early-exit midpoint.
///
/// # Errors
/// [`CodecError::InvalidRange`] if `start >= end`;
/// [`CodecError::MalformedPath`] if the path is not canonical for this
/// range.
pub fn decode_checked(start: i64, end: i64, path: &DecisionPath) -> Result<i64, CodecError> {
    if start >= end {
        return Err(CodecError::InvalidRange { start, end });
    }

    // The permissive decode always lands inside [start, end), so the
    // re-encode cannot fail.
    let value = decode(start, end, path);
    let canonical = encode(start, end, value)?;

    if canonical == *path {
        Ok(value)
    } else {
        Err(CodecError::MalformedPath { start, end })
    }
}

/// The default first-split policy: the floor midpoint of `[start, end)`.
#[inline]
pub fn default_midpoint(start: i64, end: i64) -> i64 {
    floor_midpoint(start, end)
}

/// Worst-case path length for `[start, end)`: `ceil(log2(end - start))`.
///
/// Returns 0 when the range is empty, inverted, or holds one element.
pub fn max_path_len(start: i64, end: i64) -> u32 {
    let size = end as i128 - start as i128;
    if size <= 1 {
        return 0;
    }
    u128::BITS - ((size - 1) as u128).leading_zeros()
}

// Floor midpoint, widened so neither `lo + hi` nor the span can
// overflow, even for ranges wider than i64::MAX. For `hi > lo` the
// truncating division acts on a positive difference, so this is exact
// floor division regardless of sign, and the result lies in [lo, hi).
#[inline]
fn floor_midpoint(lo: i64, hi: i64) -> i64 {
    (lo as i128 + (hi as i128 - lo as i128) / 2) as i64
}
