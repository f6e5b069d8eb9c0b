// src/metrics/class.rs
//! Class-category calculators: inheritance depth, children, fan-out and
//! loose class coupling.

use std::collections::{BTreeMap, BTreeSet};

use super::{Calculator, MetricContext};
use crate::model::EntityKind;

/// Steps up the concrete, in-project superclass chain.
pub struct DepthOfInheritance;

impl Calculator for DepthOfInheritance {
    fn metric(&self) -> &'static str {
        "dit"
    }

    fn category(&self) -> EntityKind {
        EntityKind::Class
    }

    fn measure(&self, ctx: &MetricContext, entity: &str) -> Option<f64> {
        inheritance_depth(ctx, entity)
    }
}

/// Counts direct in-project inheritors.
pub struct NumberOfChildren;

impl Calculator for NumberOfChildren {
    fn metric(&self) -> &'static str {
        "noc"
    }

    fn category(&self) -> EntityKind {
        EntityKind::Class
    }

    fn measure(&self, ctx: &MetricContext, entity: &str) -> Option<f64> {
        children_count(ctx, entity)
    }
}

/// Distinct in-project classes a class depends on, via field types and
/// the owners of every method its methods call.
pub struct FanOut;

impl Calculator for FanOut {
    fn metric(&self) -> &'static str {
        "fan_out"
    }

    fn category(&self) -> EntityKind {
        EntityKind::Class
    }

    fn measure(&self, ctx: &MetricContext, entity: &str) -> Option<f64> {
        let class = ctx.model.class(entity)?;
        if class.anonymous {
            return None;
        }

        let mut referenced: BTreeSet<&str> = BTreeSet::new();
        for field in ctx.index.all_fields(entity) {
            if let Some(type_class) = field.type_class.as_deref() {
                referenced.insert(type_class);
            }
        }
        for method in ctx.index.all_methods_of(entity) {
            let Some(node) = ctx.model.method(&method) else {
                continue;
            };
            for call in &node.calls {
                if let Some(owner) = ctx.model.owner_of(call) {
                    referenced.insert(owner);
                }
            }
        }

        let count = referenced
            .iter()
            .filter(|&c| *c != entity && ctx.index.classes().contains(*c))
            .count();
        Some(count as f64)
    }
}

/// Fraction of method pairs that share field usage, where a method's
/// touched fields include everything reached transitively through its
/// calls. Zero for classes with fewer than two methods.
pub struct LooseClassCoupling;

impl Calculator for LooseClassCoupling {
    fn metric(&self) -> &'static str {
        "lcc"
    }

    fn category(&self) -> EntityKind {
        EntityKind::Class
    }

    fn measure(&self, ctx: &MetricContext, entity: &str) -> Option<f64> {
        let class = ctx.model.class(entity)?;
        if class.anonymous || !class.concrete {
            return None;
        }

        let methods: Vec<&str> = ctx
            .model
            .methods_of(entity)
            .map(|m| m.name.as_str())
            .collect();
        let n = methods.len();
        if n < 2 {
            return Some(0.0);
        }

        let touched: BTreeMap<&str, BTreeSet<String>> = methods
            .iter()
            .map(|m| (*m, transitive_field_usage(ctx, m)))
            .collect();

        let mut sharing_pairs = 0usize;
        for i in 0..n {
            for j in (i + 1)..n {
                let (Some(a), Some(b)) = (touched.get(methods[i]), touched.get(methods[j]))
                else {
                    continue;
                };
                if a.intersection(b).next().is_some() {
                    sharing_pairs += 1;
                }
            }
        }

        let total_pairs = n * (n - 1) / 2;
        Some(sharing_pairs as f64 / total_pairs as f64)
    }
}

/// Fields reached from a method through the call graph. Explicit
/// worklist; the visited set bounds call cycles.
fn transitive_field_usage(ctx: &MetricContext, method: &str) -> BTreeSet<String> {
    let mut fields = BTreeSet::new();
    let mut visited: BTreeSet<&str> = BTreeSet::new();
    let mut worklist: Vec<&str> = vec![method];

    while let Some(current) = worklist.pop() {
        if !visited.insert(current) {
            continue;
        }
        let Some(node) = ctx.model.method(current) else {
            continue;
        };
        fields.extend(node.reads.iter().cloned());
        worklist.extend(node.calls.iter().map(String::as_str));
    }
    fields
}

pub(super) fn inheritance_depth(ctx: &MetricContext, entity: &str) -> Option<f64> {
    let mut current = ctx.model.class(entity)?;
    if current.anonymous {
        return None;
    }

    let mut depth = 0u32;
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    while current.concrete && seen.insert(current.name.as_str()) {
        depth += 1;
        let Some(parent) = current.super_class.as_deref() else {
            break;
        };
        if !ctx.index.classes().contains(parent) {
            break;
        }
        let Some(parent_node) = ctx.model.class(parent) else {
            break;
        };
        current = parent_node;
    }
    Some(f64::from(depth))
}

pub(super) fn children_count(ctx: &MetricContext, entity: &str) -> Option<f64> {
    let class = ctx.model.class(entity)?;
    if class.anonymous {
        return None;
    }
    let count = ctx
        .model
        .direct_subclasses(entity)
        .iter()
        .filter(|c| ctx.index.classes().contains(&c.name))
        .count();
    Some(count as f64)
}
