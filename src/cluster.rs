// src/cluster.rs
//! Greedy nearest-cluster assignment of methods over classes.
//!
//! Single pass in the given method order. A method first competes
//! against every comparable class; only when no class accepts it does
//! the search continue over clusters proposed by earlier unmatched
//! methods, carrying the running minimum. The proposed-cluster list only
//! grows, so processing order is an observable part of the result.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::distance::{diff_coefficient, vector_distance, INF};
use crate::features::FeatureSet;
use crate::vectors::VectorModel;

static EMPTY_FEATURES: FeatureSet = FeatureSet::new();

/// What a cluster is keyed by: an existing class, or the first unmatched
/// method that seeded a proposed class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Anchor {
    Class(String),
    Proposed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct Cluster {
    pub anchor: Anchor,
    pub members: Vec<String>,
}

impl Cluster {
    fn class(name: &str) -> Self {
        Self {
            anchor: Anchor::Class(name.to_string()),
            members: Vec::new(),
        }
    }

    fn proposed(seed: &str) -> Self {
        Self {
            anchor: Anchor::Proposed(seed.to_string()),
            members: vec![seed.to_string()],
        }
    }

    /// The entity whose features and vector represent this cluster.
    #[must_use]
    pub fn anchor_name(&self) -> &str {
        match &self.anchor {
            Anchor::Class(name) | Anchor::Proposed(name) => name,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The final partition: class-anchored clusters in class order, then
/// proposed clusters in creation order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Partition {
    pub clusters: Vec<Cluster>,
}

impl Partition {
    #[must_use]
    pub fn cluster_of(&self, method: &str) -> Option<&Cluster> {
        self.clusters
            .iter()
            .find(|c| c.members.iter().any(|m| m == method))
    }

    pub fn class_clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters
            .iter()
            .filter(|c| matches!(c.anchor, Anchor::Class(_)))
    }

    pub fn proposed_clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters
            .iter()
            .filter(|c| matches!(c.anchor, Anchor::Proposed(_)))
    }
}

/// Assigns every method to exactly one cluster.
#[must_use]
pub fn cluster_methods(
    classes: &[String],
    methods: &[String],
    features: &BTreeMap<String, FeatureSet>,
    vectors: &VectorModel,
) -> Partition {
    let mut clusters: Vec<Cluster> = classes.iter().map(|c| Cluster::class(c)).collect();
    let class_count = clusters.len();

    for method in methods {
        let method_features = features.get(method).unwrap_or(&EMPTY_FEATURES);
        let method_vector = vectors.vector_of(method);

        let mut closest_distance = INF * 2.0;
        let mut closest: Option<usize> = None;

        for (i, cluster) in clusters.iter().enumerate().take(class_count) {
            if let Some(d) = candidate_distance(cluster, method_features, method_vector, features, vectors) {
                if d < closest_distance {
                    closest_distance = d;
                    closest = Some(i);
                }
            }
        }

        if let Some(i) = accepted(closest, closest_distance) {
            clusters[i].members.push(method.clone());
            continue;
        }

        // The running minimum carries over: a proposed cluster must beat
        // the best rejected class distance too.
        for (i, cluster) in clusters.iter().enumerate().skip(class_count) {
            if let Some(d) = candidate_distance(cluster, method_features, method_vector, features, vectors) {
                if d < closest_distance {
                    closest_distance = d;
                    closest = Some(i);
                }
            }
        }

        if let Some(i) = accepted(closest, closest_distance) {
            clusters[i].members.push(method.clone());
            continue;
        }

        clusters.push(Cluster::proposed(method));
    }

    Partition { clusters }
}

fn candidate_distance(
    cluster: &Cluster,
    method_features: &FeatureSet,
    method_vector: &[f64],
    features: &BTreeMap<String, FeatureSet>,
    vectors: &VectorModel,
) -> Option<f64> {
    let anchor = cluster.anchor_name();
    let anchor_features = features.get(anchor).unwrap_or(&EMPTY_FEATURES);
    let diff = diff_coefficient(anchor_features, method_features);
    if diff == 0.0 {
        return None;
    }
    Some(vector_distance(
        vectors.vector_of(anchor),
        method_vector,
        diff,
    ))
}

fn accepted(closest: Option<usize>, distance: f64) -> Option<usize> {
    if distance < INF {
        closest
    } else {
        None
    }
}
