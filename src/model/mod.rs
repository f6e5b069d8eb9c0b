// src/model/mod.rs
//! The source model consumed by every analysis component.
//!
//! Parsing and symbol resolution happen upstream; this module loads the
//! resulting graph and answers structural queries over it. Names that
//! point outside the document are legal and resolve to `None`.

pub mod types;

pub use types::{ClassNode, EntityKind, FieldNode, MethodNode, ProjectModel};

use crate::error::{RegroupError, Result};
use std::fs;
use std::path::Path;

impl ProjectModel {
    /// Parses a model from its JSON representation.
    ///
    /// # Errors
    /// Returns an error when the document is malformed.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads a model document from disk.
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
    pub fn class(&self, name: &str) -> Option<&ClassNode> {
        self.classes.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn method(&self, name: &str) -> Option<&MethodNode> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Methods declared directly on `class`.
    pub fn methods_of<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a MethodNode> {
        self.methods.iter().filter(move |m| m.class == class)
    }

    /// Owning class of a method, when the method is known.
    #[must_use]
    pub fn owner_of(&self, method: &str) -> Option<&str> {
        self.method(method).map(|m| m.class.as_str())
    }

    /// Classes naming `class` among their direct supertypes or interfaces.
    #[must_use]
    pub fn direct_subclasses(&self, class: &str) -> Vec<&ClassNode> {
        self.classes
            .iter()
            .filter(|c| {
                c.super_class.as_deref() == Some(class)
                    || c.supers.iter().any(|s| s == class)
                    || c.interfaces.iter().any(|i| i == class)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_edges() {
        let model = ProjectModel::from_json(
            r#"{
                "packages": ["app"],
                "classes": [{"name": "app.A", "package": "app"}],
                "methods": [{"name": "app.A.run()", "class": "app.A"}]
            }"#,
        )
        .unwrap();

        let class = model.class("app.A").unwrap();
        assert!(class.concrete, "concrete defaults to true");
        assert!(class.fields.is_empty());

        let method = model.method("app.A.run()").unwrap();
        assert!(method.calls.is_empty());
        assert_eq!(model.owner_of("app.A.run()"), Some("app.A"));
    }

    #[test]
    fn test_unknown_names_resolve_to_none() {
        let model = ProjectModel::default();
        assert!(model.class("ghost").is_none());
        assert!(model.owner_of("ghost").is_none());
    }
}
