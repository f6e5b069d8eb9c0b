// tests/unit_index.rs
//! Tests for the structural index: universe construction and the
//! reverse-usage graph.

use regroup_core::index::ProjectIndex;
use regroup_core::model::ProjectModel;

fn fixture() -> ProjectModel {
    ProjectModel::from_json(
        r#"{
            "packages": ["app"],
            "classes": [
                {"name": "app.Outer", "package": "app", "nested": ["app.Outer.Inner"]},
                {"name": "app.Outer.Inner", "package": ""},
                {"name": "app.Anon$1", "package": "app", "anonymous": true},
                {"name": "app.Base", "package": "app"},
                {
                    "name": "app.Derived",
                    "package": "app",
                    "super_class": "app.Base",
                    "supers": ["app.Base"],
                    "fields": [{"name": "app.Derived.other", "type_class": "app.Outer"}]
                }
            ],
            "methods": [
                {"name": "app.Base.m()", "class": "app.Base"},
                {
                    "name": "app.Derived.f()",
                    "class": "app.Derived",
                    "calls": ["app.Base.m()"],
                    "mentions": ["app.Outer"]
                }
            ]
        }"#,
    )
    .unwrap()
}

#[test]
fn test_class_universe_descends_packages_and_nesting() {
    let model = fixture();
    let index = ProjectIndex::bind(&model);

    let classes = index.classes();
    assert!(classes.contains("app.Outer"));
    assert!(
        classes.contains("app.Outer.Inner"),
        "nested class reached through its outer class"
    );
    assert!(classes.contains("app.Base"));
    assert!(classes.contains("app.Derived"));
    assert!(!classes.contains("app.Anon$1"), "anonymous excluded");
}

#[test]
fn test_method_universe_includes_inherited() {
    let model = fixture();
    let index = ProjectIndex::bind(&model);

    assert!(index.methods().contains("app.Base.m()"));
    assert!(index.methods().contains("app.Derived.f()"));

    let derived_methods = index.all_methods_of("app.Derived");
    assert!(derived_methods.contains("app.Derived.f()"));
    assert!(
        derived_methods.contains("app.Base.m()"),
        "inherited through the superclass chain"
    );
}

#[test]
fn test_users_via_field_types_calls_and_mentions() {
    let model = fixture();
    let index = ProjectIndex::bind(&model);

    let outer_users = index.users_of("app.Outer");
    assert!(
        outer_users.contains("app.Derived"),
        "field type and body mention both register the class"
    );

    let m_users = index.users_of("app.Base.m()");
    assert!(m_users.contains("app.Derived.f()"));

    assert!(index.users_of("app.Base").is_empty());
    assert!(index.users_of("not.in.model").is_empty());
}

#[test]
fn test_empty_model_yields_empty_universe() {
    let model = ProjectModel::default();
    let index = ProjectIndex::bind(&model);
    assert!(index.classes().is_empty());
    assert!(index.methods().is_empty());
}
