//! Bit-packed decision sequences
//!
//! One bit per binary-search comparison: `false` sends the search left of
//! the midpoint, `true` right of (or onto) it. A path carries no length
//! header; it only decodes against the range it was encoded over.

use std::fmt;

use bitvec::prelude::*;

/// Ordered sequence of binary-search decisions produced by encoding.
///
/// Stored one bit per decision. A path is meaningful only together with
/// the `[start, end)` range it was encoded over; the range itself is never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionPath {
    bits: BitVec,
}

impl DecisionPath {
    /// Create an empty path.
    pub fn new() -> Self {
        Self { bits: BitVec::new() }
    }

    /// Create an empty path with room for `capacity` decisions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(capacity),
        }
    }

    /// Append a decision (`false` = left, `true` = right).
    pub fn push(&mut self, decision: bool) {
        self.bits.push(decision);
    }

    /// Number of decisions in the path.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` when the path holds no decisions.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Retrieve the decision at `idx`, if present.
    pub fn get(&self, idx: usize) -> Option<bool> {
        self.bits.get(idx).map(|bit| *bit)
    }

    /// Access the underlying bits (useful for framing and serialization).
    pub fn as_bits(&self) -> &BitSlice {
        &self.bits
    }

    /// Iterate over decisions in encoding order.
    pub fn iter(&self) -> DecisionPathIter<'_> {
        DecisionPathIter {
            path: self,
            index: 0,
        }
    }
}

impl fmt::Display for DecisionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for decision in self.iter() {
            f.write_str(if decision { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromIterator<bool> for DecisionPath {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<bool> for DecisionPath {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.bits.extend(iter);
    }
}

impl<'a> IntoIterator for &'a DecisionPath {
    type Item = bool;
    type IntoIter = DecisionPathIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the decisions in a [`DecisionPath`].
#[derive(Debug)]
pub struct DecisionPathIter<'a> {
    path: &'a DecisionPath,
    index: usize,
}

impl Iterator for DecisionPathIter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let decision = self.path.get(self.index);
        if decision.is_some() {
            self.index += 1;
        }
        decision
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.path.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DecisionPathIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_get() {
        let mut path = DecisionPath::new();
        assert!(path.is_empty());

        path.push(true);
        path.push(false);
        path.push(true);

        assert_eq!(path.len(), 3);
        assert_eq!(path.get(0), Some(true));
        assert_eq!(path.get(1), Some(false));
        assert_eq!(path.get(2), Some(true));
        assert_eq!(path.get(3), None);
    }

    #[test]
    fn iterator_yields_decisions_in_order() {
        let path: DecisionPath = [true, false, false, true].into_iter().collect();
        let collected: Vec<bool> = path.iter().collect();
        assert_eq!(collected, vec![true, false, false, true]);
        assert_eq!(path.iter().len(), 4);
    }

    #[test]
    fn display_renders_bits() {
        let path: DecisionPath = [true, false, true, true].into_iter().collect();
        assert_eq!(path.to_string(), "1011");
        assert_eq!(DecisionPath::new().to_string(), "");
    }

    #[test]
    fn extend_appends() {
        let mut path: DecisionPath = [false].into_iter().collect();
        path.extend([true, true]);
        assert_eq!(path.to_string(), "011");
    }
}
