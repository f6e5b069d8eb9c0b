// src/engine.rs
//! One analysis run: binds the index, extracts features, normalizes
//! vectors, clusters, and builds the report. The run owns all per-run
//! state; there is no ambient/global context.

use std::collections::BTreeMap;

use crate::cluster::cluster_methods;
use crate::features::{class_features, method_features, FeatureSet};
use crate::index::ProjectIndex;
use crate::model::ProjectModel;
use crate::recommend::{build_report, RefactoringReport};
use crate::vectors::{MetricsTable, VectorModel};

pub struct AnalysisRun<'m> {
    model: &'m ProjectModel,
    index: ProjectIndex<'m>,
}

impl<'m> AnalysisRun<'m> {
    #[must_use]
    pub fn bind(model: &'m ProjectModel) -> Self {
        Self {
            model,
            index: ProjectIndex::bind(model),
        }
    }

    #[must_use]
    pub fn index(&self) -> &ProjectIndex<'m> {
        &self.index
    }

    /// Runs the full pipeline against an externally supplied (or
    /// stock-computed) metrics table.
    #[must_use]
    pub fn run(&self, table: &MetricsTable) -> RefactoringReport {
        let classes: Vec<String> = self.index.classes().iter().cloned().collect();
        let methods: Vec<String> = self.index.methods().iter().cloned().collect();

        let mut features: BTreeMap<String, FeatureSet> = BTreeMap::new();
        for class in &classes {
            features.insert(class.clone(), class_features(&self.index, class));
        }
        for method in &methods {
            features.insert(method.clone(), method_features(&self.index, method));
        }

        let vectors = VectorModel::build(table, &classes, &methods);

        let owners: BTreeMap<String, String> = methods
            .iter()
            .filter_map(|m| {
                self.model
                    .owner_of(m)
                    .map(|owner| (m.clone(), owner.to_string()))
            })
            .collect();

        let partition = cluster_methods(&classes, &methods, &features, &vectors);
        build_report(&classes, &methods, &owners, &partition, &features, &vectors)
    }
}
