// src/metrics/mod.rs
//! Stock metric calculators.
//!
//! Each calculator visits the structural graph and emits raw values per
//! entity under a named metric. The clustering core only consumes the
//! assembled table; an externally computed table can replace this module
//! entirely.

pub mod class;
pub mod method;

use crate::index::ProjectIndex;
use crate::model::{EntityKind, ProjectModel};
use crate::vectors::MetricsTable;

/// Shared state handed to every calculator.
pub struct MetricContext<'a> {
    pub model: &'a ProjectModel,
    pub index: &'a ProjectIndex<'a>,
}

pub trait Calculator {
    /// Metric name; also the vector-component key.
    fn metric(&self) -> &'static str;
    fn category(&self) -> EntityKind;
    /// Raw value for one entity, or `None` when the entity is not
    /// measurable (e.g. anonymous owner).
    fn measure(&self, ctx: &MetricContext, entity: &str) -> Option<f64>;
}

/// The built-in calculator set.
#[must_use]
pub fn stock_calculators() -> Vec<Box<dyn Calculator>> {
    vec![
        Box::new(class::DepthOfInheritance),
        Box::new(class::NumberOfChildren),
        Box::new(class::FanOut),
        Box::new(class::LooseClassCoupling),
        Box::new(method::DepthOfInheritance),
        Box::new(method::NumberOfChildren),
        Box::new(method::FanIn),
    ]
}

/// Runs every enabled calculator over the universe and assembles the
/// table. Disabled metrics are skipped entirely, column included.
#[must_use]
pub fn compute_table(ctx: &MetricContext, disabled: &[String]) -> MetricsTable {
    let mut table = MetricsTable::default();
    for calculator in stock_calculators() {
        if disabled.iter().any(|d| d == calculator.metric()) {
            continue;
        }
        table.register(calculator.category(), calculator.metric());
        let entities: Vec<&String> = match calculator.category() {
            EntityKind::Class => ctx.index.classes().iter().collect(),
            EntityKind::Method => ctx.index.methods().iter().collect(),
        };
        for entity in entities {
            if let Some(value) = calculator.measure(ctx, entity) {
                table.post(calculator.category(), calculator.metric(), entity, value);
            }
        }
    }
    table
}
