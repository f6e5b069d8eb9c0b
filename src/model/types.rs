// src/model/types.rs
//! Serde node types for the project model document.

use serde::{Deserialize, Serialize};

/// Kind of a clustering participant. Fields appear only inside feature
/// sets, never as participants, so they carry no kind of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Class,
    Method,
}

/// A field declaration on a class.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldNode {
    pub name: String,
    /// Resolved class behind the field's declared type, when it names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_class: Option<String>,
}

/// A class (or interface) node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassNode {
    pub name: String,
    #[serde(default)]
    pub package: String,
    /// Direct superclass, when resolvable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_class: Option<String>,
    /// All direct supertypes.
    #[serde(default)]
    pub supers: Vec<String>,
    /// Directly implemented interfaces.
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Classes declared inside this one.
    #[serde(default)]
    pub nested: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldNode>,
    #[serde(default)]
    pub anonymous: bool,
    #[serde(default)]
    pub interface: bool,
    #[serde(default = "default_true")]
    pub concrete: bool,
}

impl Default for ClassNode {
    fn default() -> Self {
        Self {
            name: String::new(),
            package: String::new(),
            super_class: None,
            supers: Vec::new(),
            interfaces: Vec::new(),
            nested: Vec::new(),
            fields: Vec::new(),
            anonymous: false,
            interface: false,
            concrete: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// A method node with its resolved body references.
///
/// Reference resolution happens in the upstream extractor; anything it
/// could not resolve is simply absent from these lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodNode {
    pub name: String,
    /// Owning class.
    pub class: String,
    /// Direct super methods this one overrides.
    #[serde(default)]
    pub overrides: Vec<String>,
    /// Methods called anywhere in the body.
    #[serde(default)]
    pub calls: Vec<String>,
    /// Fields read or written anywhere in the body.
    #[serde(default)]
    pub reads: Vec<String>,
    /// Classes mentioned in the body (construction, casts, statics).
    #[serde(default)]
    pub mentions: Vec<String>,
}

/// The project model document: a closed graph of entity nodes with typed
/// edges, produced by an upstream extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectModel {
    /// Project package names; the roots of the entity universe.
    #[serde(default)]
    pub packages: Vec<String>,
    #[serde(default)]
    pub classes: Vec<ClassNode>,
    #[serde(default)]
    pub methods: Vec<MethodNode>,
}
