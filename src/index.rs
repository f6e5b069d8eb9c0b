// src/index.rs
//! Structural Index: the closed universe of project packages, classes and
//! methods, plus the reverse-usage graph.
//!
//! All sets are memoized on first access and ordered (`BTreeSet`), so
//! every enumeration over the universe is deterministic. Rebinding to a
//! new model means constructing a new index; nothing is shared globally.

use std::cell::OnceCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::model::{ClassNode, FieldNode, ProjectModel};

static EMPTY_USERS: BTreeSet<String> = BTreeSet::new();

pub struct ProjectIndex<'m> {
    model: &'m ProjectModel,
    packages: OnceCell<BTreeSet<String>>,
    classes: OnceCell<BTreeSet<String>>,
    methods: OnceCell<BTreeSet<String>>,
    users: OnceCell<BTreeMap<String, BTreeSet<String>>>,
}

impl<'m> ProjectIndex<'m> {
    /// Binds a fresh index to a model. All sets start empty and are
    /// recomputed lazily on next access.
    #[must_use]
    pub fn bind(model: &'m ProjectModel) -> Self {
        Self {
            model,
            packages: OnceCell::new(),
            classes: OnceCell::new(),
            methods: OnceCell::new(),
            users: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn model(&self) -> &'m ProjectModel {
        self.model
    }

    /// Project package names.
    pub fn packages(&self) -> &BTreeSet<String> {
        self.packages
            .get_or_init(|| self.model.packages.iter().cloned().collect())
    }

    /// All in-project classes: recursive descent of project packages plus
    /// nested classes. Anonymous classes are excluded.
    pub fn classes(&self) -> &BTreeSet<String> {
        self.classes.get_or_init(|| self.collect_classes())
    }

    /// All in-project methods: declared plus inherited (within-universe
    /// supertype chain) methods across `classes()`.
    pub fn methods(&self) -> &BTreeSet<String> {
        self.methods.get_or_init(|| {
            let mut out = BTreeSet::new();
            for class in self.classes() {
                out.extend(self.all_methods_of(class));
            }
            out
        })
    }

    /// Classes/methods that reference `name`: class users via field types
    /// and in-body class mentions, method users via call sites.
    pub fn users_of(&self, name: &str) -> &BTreeSet<String> {
        self.users
            .get_or_init(|| self.collect_users())
            .get(name)
            .unwrap_or(&EMPTY_USERS)
    }

    /// Declared plus inherited fields of a class, following the
    /// within-universe supertype closure.
    #[must_use]
    pub fn all_fields(&self, class: &str) -> Vec<&'m FieldNode> {
        let mut fields = Vec::new();
        for owner in self.supertype_closure(class) {
            fields.extend(owner.fields.iter());
        }
        fields
    }

    /// Declared plus inherited method names of a class, following the
    /// within-universe supertype closure.
    #[must_use]
    pub fn all_methods_of(&self, class: &str) -> BTreeSet<String> {
        let mut methods = BTreeSet::new();
        for owner in self.supertype_closure(class) {
            for method in self.model.methods_of(&owner.name) {
                methods.insert(method.name.clone());
            }
        }
        methods
    }

    /// The class itself plus every transitive supertype that resolves
    /// inside the model. Explicit worklist; the visited set bounds
    /// irregular supertype graphs.
    fn supertype_closure(&self, class: &str) -> Vec<&'m ClassNode> {
        let mut closure = Vec::new();
        let mut visited: BTreeSet<&str> = BTreeSet::new();
        let mut worklist: Vec<&str> = vec![class];

        while let Some(name) = worklist.pop() {
            if !visited.insert(name) {
                continue;
            }
            let Some(node) = self.model.class(name) else {
                continue;
            };
            closure.push(node);
            if let Some(parent) = node.super_class.as_deref() {
                worklist.push(parent);
            }
            worklist.extend(node.supers.iter().map(String::as_str));
            worklist.extend(node.interfaces.iter().map(String::as_str));
        }
        closure
    }

    fn collect_classes(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        let mut worklist: Vec<&ClassNode> = self
            .model
            .classes
            .iter()
            .filter(|c| self.packages().contains(&c.package))
            .collect();

        while let Some(class) = worklist.pop() {
            if class.anonymous || !out.insert(class.name.clone()) {
                continue;
            }
            for nested in &class.nested {
                if let Some(node) = self.model.class(nested) {
                    worklist.push(node);
                }
            }
        }
        out
    }

    fn collect_users(&self) -> BTreeMap<String, BTreeSet<String>> {
        let mut users: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for class in self.classes() {
            users.entry(class.clone()).or_default();
        }
        for method in self.methods() {
            users.entry(method.clone()).or_default();
        }

        for class in self.classes() {
            for field in self.all_fields(class) {
                let Some(type_class) = field.type_class.as_deref() else {
                    continue;
                };
                if self.classes().contains(type_class) {
                    if let Some(set) = users.get_mut(type_class) {
                        set.insert(class.clone());
                    }
                }
            }
            for method in self.model.methods_of(class) {
                for target in &method.calls {
                    if self.methods().contains(target) {
                        if let Some(set) = users.get_mut(target) {
                            set.insert(method.name.clone());
                        }
                    }
                }
                for mention in &method.mentions {
                    if self.classes().contains(mention) {
                        if let Some(set) = users.get_mut(mention) {
                            set.insert(class.clone());
                        }
                    }
                }
            }
        }
        users
    }
}
