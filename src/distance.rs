// src/distance.rs
//! The combined distance model: a Jaccard gate over feature sets plus a
//! normalized metric-vector term.
//!
//! A diff coefficient of zero means the pair shares no structural
//! context at all; such pairs are incomparable and never receive a
//! numeric distance.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::features::FeatureSet;

/// Acceptance bound: a method is assignable to a cluster only when its
/// distance falls strictly below this value.
pub const INF: f64 = 1.0;

/// Wire value standing in for "no structural relation" in the matrix.
const UNRELATED_SENTINEL: f64 = -1.0;

/// Jaccard similarity of two feature sets, in `[0, 1]`. Always defined:
/// every feature set contains at least its own entity identifier.
#[must_use]
pub fn diff_coefficient(a: &FeatureSet, b: &FeatureSet) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Combined distance for a comparable pair (`diff > 0`): the structural
/// penalty `1 − diff` plus the squared component differences, averaged
/// over the shared component count and square-rooted.
#[must_use]
pub fn vector_distance(a: &[f64], b: &[f64], diff: f64) -> f64 {
    let penalty = INF - diff;
    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    let n = a.len().min(b.len()).max(1) as f64;
    ((penalty + sum) / n).sqrt()
}

/// A distance-matrix cell: a finite distance or the unrelated sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Finite(f64),
    Unrelated,
}

impl Distance {
    /// Applies the gate, then the combined distance.
    #[must_use]
    pub fn between(
        features_a: &FeatureSet,
        features_b: &FeatureSet,
        vector_a: &[f64],
        vector_b: &[f64],
    ) -> Self {
        let diff = diff_coefficient(features_a, features_b);
        if diff == 0.0 {
            Distance::Unrelated
        } else {
            Distance::Finite(vector_distance(vector_a, vector_b, diff))
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_f64(*d),
            Distance::Unrelated => serializer.serialize_f64(UNRELATED_SENTINEL),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d:.4}"),
            Distance::Unrelated => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> FeatureSet {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_diff_coefficient_bounds_and_symmetry() {
        let a = set(&["x", "y", "z"]);
        let b = set(&["y", "z", "w"]);
        let d = diff_coefficient(&a, &b);
        assert!((d - 0.5).abs() < 1e-12, "2 shared of 4 total");
        assert_eq!(d, diff_coefficient(&b, &a));
        assert_eq!(diff_coefficient(&a, &a), 1.0);
    }

    #[test]
    fn test_disjoint_sets_are_unrelated() {
        let a = set(&["x"]);
        let b = set(&["y"]);
        assert_eq!(diff_coefficient(&a, &b), 0.0);
        assert_eq!(
            Distance::between(&a, &b, &[0.0], &[0.0]),
            Distance::Unrelated
        );
    }

    #[test]
    fn test_half_overlap_two_metric_example() {
        // diff 0.5, squared differences summing to 0.1, n = 2:
        // sqrt((0.5 + 0.1) / 2) = sqrt(0.3).
        let d = vector_distance(&[0.3, 0.0], &[0.0, 0.1], 0.5);
        assert!((d - 0.3_f64.sqrt()).abs() < 1e-12);
        assert!(d < INF, "assignable");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = set(&["x", "y"]);
        let b = set(&["y", "z"]);
        let va = [0.2, 0.1];
        let vb = [0.0, 0.4];
        assert_eq!(
            Distance::between(&a, &b, &va, &vb),
            Distance::between(&b, &a, &vb, &va)
        );
    }

    #[test]
    fn test_empty_vectors_fall_back_to_structural_term() {
        let d = vector_distance(&[], &[], 0.5);
        assert!((d - 0.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_sentinel_serializes_as_negative_one() {
        let json = serde_json::to_string(&Distance::Unrelated).unwrap();
        assert_eq!(json, "-1.0");
    }
}
