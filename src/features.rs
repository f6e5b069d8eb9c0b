// src/features.rs
//! Feature extraction: each entity's structural neighborhood, expressed
//! as a set of project-entity identifiers.
//!
//! A feature set always contains the entity's own identifier, so the
//! Jaccard union downstream is never empty.

use std::collections::BTreeSet;

use crate::index::ProjectIndex;

pub type FeatureSet = BTreeSet<String>;

/// Features of a class: itself, its declared methods and fields, and the
/// direct supertypes and interfaces that lie inside the universe.
#[must_use]
pub fn class_features(index: &ProjectIndex, name: &str) -> FeatureSet {
    let mut features = FeatureSet::new();
    features.insert(name.to_string());

    let Some(class) = index.model().class(name) else {
        return features;
    };

    for method in index.model().methods_of(name) {
        features.insert(method.name.clone());
    }
    for field in &class.fields {
        features.insert(field.name.clone());
    }

    let supertypes = class
        .super_class
        .iter()
        .chain(class.supers.iter())
        .chain(class.interfaces.iter());
    for supertype in supertypes {
        if index.classes().contains(supertype) {
            features.insert(supertype.clone());
        }
    }
    features
}

/// Features of a method: itself, the transitive override closure in both
/// directions (restricted to the universe), its containing class, the
/// methods it calls (restricted to the universe), and every field it
/// touches (unrestricted — fields are always features).
#[must_use]
pub fn method_features(index: &ProjectIndex, name: &str) -> FeatureSet {
    let mut features = FeatureSet::new();
    features.insert(name.to_string());

    let Some(method) = index.model().method(name) else {
        return features;
    };
    features.insert(method.class.clone());

    for related in override_closure(index, name) {
        features.insert(related);
    }
    for call in &method.calls {
        if index.methods().contains(call) {
            features.insert(call.clone());
        }
    }
    for field in &method.reads {
        features.insert(field.clone());
    }
    features
}

/// Transitive closure over `overrides` edges, upward (super methods) and
/// downward (overriding methods), restricted to the universe. Explicit
/// worklist; the visited set bounds irregular override graphs.
fn override_closure(index: &ProjectIndex, name: &str) -> BTreeSet<String> {
    let mut closure = BTreeSet::new();
    let mut worklist: Vec<String> = vec![name.to_string()];

    while let Some(current) = worklist.pop() {
        let Some(node) = index.model().method(&current) else {
            continue;
        };
        // Upward: methods this one overrides.
        for parent in &node.overrides {
            if index.methods().contains(parent) && closure.insert(parent.clone()) {
                worklist.push(parent.clone());
            }
        }
        // Downward: methods overriding this one.
        for child in &index.model().methods {
            if child.overrides.iter().any(|o| o == &current)
                && index.methods().contains(&child.name)
                && closure.insert(child.name.clone())
            {
                worklist.push(child.name.clone());
            }
        }
    }
    closure.remove(name);
    closure
}
