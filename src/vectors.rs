// src/vectors.rs
//! Entity Vector Model: the metrics table and the normalized per-entity
//! metric vectors built from it.
//!
//! Component order is the sorted metric-name order of the entity's
//! category; every raw value is divided by the grand total over all
//! entities in the run, so all components are commensurate fractions.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::error::{RegroupError, Result};
use crate::model::EntityKind;

/// Per category: metric name → entity name → raw value. `BTreeMap` keys
/// fix the metric registration order for the whole run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsTable {
    #[serde(default)]
    pub class_metrics: BTreeMap<String, BTreeMap<String, f64>>,
    #[serde(default)]
    pub method_metrics: BTreeMap<String, BTreeMap<String, f64>>,
}

impl MetricsTable {
    /// Parses a table from its JSON representation.
    ///
    /// # Errors
    /// Returns an error when the document is malformed.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads a table document from disk.
    ///
    /// # Errors
    /// Returns an error on I/O failure or a malformed document.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| RegroupError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::from_json(&content)
    }

    #[must_use]
    pub fn metrics_for(&self, kind: EntityKind) -> &BTreeMap<String, BTreeMap<String, f64>> {
        match kind {
            EntityKind::Class => &self.class_metrics,
            EntityKind::Method => &self.method_metrics,
        }
    }

    /// Registers a metric column, creating it empty when absent.
    pub fn register(&mut self, kind: EntityKind, metric: &str) {
        let metrics = match kind {
            EntityKind::Class => &mut self.class_metrics,
            EntityKind::Method => &mut self.method_metrics,
        };
        metrics.entry(metric.to_string()).or_default();
    }

    /// Records a raw value for one entity under one metric.
    pub fn post(&mut self, kind: EntityKind, metric: &str, entity: &str, value: f64) {
        let metrics = match kind {
            EntityKind::Class => &mut self.class_metrics,
            EntityKind::Method => &mut self.method_metrics,
        };
        metrics
            .entry(metric.to_string())
            .or_default()
            .insert(entity.to_string(), value);
    }
}

/// Normalized metric vectors for every entity in the run.
#[derive(Debug, Clone, Default)]
pub struct VectorModel {
    vectors: HashMap<String, Vec<f64>>,
}

impl VectorModel {
    /// Builds the vectors for the given class and method universes.
    /// Missing values contribute zero to both the vector slot and the
    /// normalization sum. A grand total of zero leaves all components at
    /// zero rather than dividing by it.
    #[must_use]
    pub fn build(table: &MetricsTable, classes: &[String], methods: &[String]) -> Self {
        let mut sum = 0.0;
        for class in classes {
            for values in table.class_metrics.values() {
                sum += values.get(class).copied().unwrap_or(0.0);
            }
        }
        for method in methods {
            for values in table.method_metrics.values() {
                sum += values.get(method).copied().unwrap_or(0.0);
            }
        }

        let mut vectors = HashMap::new();
        for class in classes {
            vectors.insert(
                class.clone(),
                normalized_vector(&table.class_metrics, class, sum),
            );
        }
        for method in methods {
            vectors.insert(
                method.clone(),
                normalized_vector(&table.method_metrics, method, sum),
            );
        }
        Self { vectors }
    }

    /// The entity's vector; empty for names outside the run.
    #[must_use]
    pub fn vector_of(&self, name: &str) -> &[f64] {
        self.vectors.get(name).map_or(&[], Vec::as_slice)
    }
}

fn normalized_vector(
    metrics: &BTreeMap<String, BTreeMap<String, f64>>,
    entity: &str,
    sum: f64,
) -> Vec<f64> {
    metrics
        .values()
        .map(|values| {
            let raw = values.get(entity).copied().unwrap_or(0.0);
            if sum == 0.0 {
                0.0
            } else {
                raw / sum
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MetricsTable {
        MetricsTable::from_json(
            r#"{
                "class_metrics": {
                    "noc": {"A": 1.0},
                    "dit": {"A": 2.0, "B": 1.0}
                },
                "method_metrics": {
                    "fan_in": {"A.m()": 4.0}
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_grand_sum_normalization() {
        let classes = vec!["A".to_string(), "B".to_string()];
        let methods = vec!["A.m()".to_string()];
        let model = VectorModel::build(&table(), &classes, &methods);

        // Grand total: 1 + 2 + 1 + 4 = 8. Component order is sorted
        // metric names: dit, noc.
        assert_eq!(model.vector_of("A"), &[2.0 / 8.0, 1.0 / 8.0]);
        assert_eq!(model.vector_of("B"), &[1.0 / 8.0, 0.0]);
        assert_eq!(model.vector_of("A.m()"), &[0.5]);
    }

    #[test]
    fn test_zero_total_stays_zero() {
        let table = MetricsTable::default();
        let classes = vec!["A".to_string()];
        let model = VectorModel::build(&table, &classes, &[]);
        assert!(model.vector_of("A").is_empty());
        assert!(model.vector_of("unknown").is_empty());
    }
}
