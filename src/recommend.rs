// src/recommend.rs
//! Recommendation Builder: turns the final partition into text-level
//! refactoring operations, aggregate statistics, and the diagnostic
//! all-pairs distance matrix.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::cluster::Partition;
use crate::distance::Distance;
use crate::features::FeatureSet;
use crate::vectors::VectorModel;

static EMPTY_FEATURES: FeatureSet = FeatureSet::new();

/// The five aggregate counts of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RefactoringCounts {
    pub move_method: usize,
    pub create_class: usize,
    pub remove_class: usize,
    pub methods: usize,
    pub classes: usize,
}

/// Everything a presentation layer needs: named text blocks plus the
/// name-indexed distance table.
#[derive(Debug, Clone, Serialize)]
pub struct RefactoringReport {
    pub clusterization: String,
    pub move_methods: String,
    pub create_class: String,
    pub remove_class: String,
    pub statistics: String,
    pub counts: RefactoringCounts,
    /// Row and column order of the distance table.
    pub names: Vec<String>,
    /// Per-name distance row, in `names` order.
    pub distances: BTreeMap<String, Vec<Distance>>,
}

/// Walks the partition and the input class set.
#[must_use]
pub fn build_report(
    classes: &[String],
    methods: &[String],
    owners: &BTreeMap<String, String>,
    partition: &Partition,
    features: &BTreeMap<String, FeatureSet>,
    vectors: &VectorModel,
) -> RefactoringReport {
    let clusterization = render_clusterization(partition);
    let (move_methods, create_class, remove_class, mut counts) =
        render_operations(classes, owners, partition);
    counts.methods = methods.len();
    counts.classes = classes.len();
    let statistics = render_statistics(counts);
    let (names, distances) = build_matrix(classes, methods, features, vectors);

    RefactoringReport {
        clusterization,
        move_methods,
        create_class,
        remove_class,
        statistics,
        counts,
        names,
        distances,
    }
}

fn render_clusterization(partition: &Partition) -> String {
    let mut out = String::new();
    for cluster in &partition.clusters {
        let _ = writeln!(
            out,
            "Cluster \"{}\" should contain {} methods:",
            cluster.anchor_name(),
            cluster.members.len()
        );
        for member in &cluster.members {
            let _ = writeln!(out, "---> {member}");
        }
        out.push('\n');
    }
    out
}

fn render_operations(
    classes: &[String],
    owners: &BTreeMap<String, String>,
    partition: &Partition,
) -> (String, String, String, RefactoringCounts) {
    let mut move_methods = String::new();
    let mut create_class = String::new();
    let mut remove_class = String::new();
    let mut counts = RefactoringCounts::default();

    for cluster in partition.class_clusters() {
        let destination = cluster.anchor_name();
        debug_assert!(classes.iter().any(|c| c == destination));
        if cluster.is_empty() {
            let _ = writeln!(remove_class, "Remove class: {destination}");
            counts.remove_class += 1;
        }
        for member in &cluster.members {
            if owners.get(member).map(String::as_str) != Some(destination) {
                let _ = writeln!(move_methods, "Move method {member} to class {destination}");
                counts.move_method += 1;
            }
        }
    }

    for cluster in partition.proposed_clusters() {
        let seed = cluster.anchor_name();
        let _ = writeln!(create_class, "Create new class for {seed}");
        counts.create_class += 1;
        // The seed itself is not moved; it defines the new class.
        for member in cluster.members.iter().filter(|m| m.as_str() != seed) {
            let _ = writeln!(move_methods, "Move method {member} to class {seed}");
            counts.move_method += 1;
        }
    }

    (move_methods, create_class, remove_class, counts)
}

fn render_statistics(counts: RefactoringCounts) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Move method count: {}", counts.move_method);
    let _ = writeln!(out, "Create class count: {}", counts.create_class);
    let _ = writeln!(out, "Remove class count: {}", counts.remove_class);
    let _ = writeln!(out, "Method count: {}", counts.methods);
    let _ = writeln!(out, "Class count: {}", counts.classes);
    out
}

fn build_matrix(
    classes: &[String],
    methods: &[String],
    features: &BTreeMap<String, FeatureSet>,
    vectors: &VectorModel,
) -> (Vec<String>, BTreeMap<String, Vec<Distance>>) {
    let names: Vec<String> = classes.iter().chain(methods.iter()).cloned().collect();
    let mut distances = BTreeMap::new();

    for row in &names {
        let row_features = features.get(row).unwrap_or(&EMPTY_FEATURES);
        let row_vector = vectors.vector_of(row);
        let cells: Vec<Distance> = names
            .iter()
            .map(|col| {
                Distance::between(
                    row_features,
                    features.get(col).unwrap_or(&EMPTY_FEATURES),
                    row_vector,
                    vectors.vector_of(col),
                )
            })
            .collect();
        distances.insert(row.clone(), cells);
    }
    (names, distances)
}
