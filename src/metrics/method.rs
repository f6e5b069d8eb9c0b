// src/metrics/method.rs
//! Method-category calculators. Inheritance depth and children are
//! measured on the owning class; fan-in counts callers outside it.

use super::{class, Calculator, MetricContext};
use crate::model::EntityKind;

pub struct DepthOfInheritance;

impl Calculator for DepthOfInheritance {
    fn metric(&self) -> &'static str {
        "dit"
    }

    fn category(&self) -> EntityKind {
        EntityKind::Method
    }

    fn measure(&self, ctx: &MetricContext, entity: &str) -> Option<f64> {
        let owner = ctx.model.owner_of(entity)?;
        class::inheritance_depth(ctx, owner)
    }
}

pub struct NumberOfChildren;

impl Calculator for NumberOfChildren {
    fn metric(&self) -> &'static str {
        "noc"
    }

    fn category(&self) -> EntityKind {
        EntityKind::Method
    }

    fn measure(&self, ctx: &MetricContext, entity: &str) -> Option<f64> {
        let owner = ctx.model.owner_of(entity)?;
        class::children_count(ctx, owner)
    }
}

/// In-project methods that call this one, excluding methods of the
/// owning class (declared or inherited).
pub struct FanIn;

impl Calculator for FanIn {
    fn metric(&self) -> &'static str {
        "fan_in"
    }

    fn category(&self) -> EntityKind {
        EntityKind::Method
    }

    fn measure(&self, ctx: &MetricContext, entity: &str) -> Option<f64> {
        let owner = ctx.model.owner_of(entity)?;
        let owner_node = ctx.model.class(owner)?;
        if owner_node.anonymous {
            return None;
        }

        let own_methods = ctx.index.all_methods_of(owner);
        let count = ctx
            .index
            .users_of(entity)
            .iter()
            .filter(|user| ctx.index.methods().contains(*user) && !own_methods.contains(*user))
            .count();
        Some(count as f64)
    }
}
