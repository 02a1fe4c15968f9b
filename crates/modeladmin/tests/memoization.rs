mod fixtures;

use std::sync::Arc;
use std::thread;

use fixtures::{CountingSchema, post_schema};
use modeladmin::prelude::*;

#[test]
fn accessors_compute_once() {
    let schema = CountingSchema::new(post_schema());
    let decorator = ModelDecorator::new(&schema);

    let first = (
        decorator.fields().unwrap().clone(),
        decorator.index_field_names().unwrap().clone(),
        decorator.show_field_names().unwrap().clone(),
        decorator.form_field_names().unwrap().clone(),
        decorator.primary_key().to_string(),
        decorator.title_field().unwrap().map(str::to_string),
    );
    let second = (
        decorator.fields().unwrap().clone(),
        decorator.index_field_names().unwrap().clone(),
        decorator.show_field_names().unwrap().clone(),
        decorator.form_field_names().unwrap().clone(),
        decorator.primary_key().to_string(),
        decorator.title_field().unwrap().map(str::to_string),
    );

    assert_eq!(first, second);
    assert!(first.0.ptr_eq(&second.0));
    assert_eq!(schema.columns_calls(), 1);
    assert_eq!(schema.associations_calls(), 1);
    assert_eq!(schema.primary_key_calls(), 1);
}

#[test]
fn title_guessing_reuses_general_fields() {
    let schema = CountingSchema::new(post_schema());
    let decorator = ModelDecorator::new(&schema);
    let record = DynamicRecord::new().with("title", "Alpha");

    for _ in 0..3 {
        assert_eq!(decorator.guess_title(&record), Some(Value::from("Alpha")));
    }
    decorator.fields().unwrap();

    assert_eq!(schema.columns_calls(), 1);
}

#[test]
fn view_copies_are_independent() {
    let mut decorator = ModelDecorator::new(post_schema());

    decorator.index_fields_mut().unwrap().remove("title");
    decorator
        .show_fields_mut()
        .unwrap()
        .get_mut("created_at")
        .unwrap()
        .label = "Published".to_string();
    decorator
        .form_fields_mut()
        .unwrap()
        .insert(FieldMetadata::column("notes", ColumnType::Text, "Notes"));

    let canonical = decorator.fields().unwrap();
    assert!(canonical.contains_key("title"));
    assert_eq!(canonical.get("created_at").unwrap().label, "Created at");
    assert!(!canonical.contains_key("notes"));

    assert!(!decorator.index_fields().unwrap().contains_key("title"));
    assert!(decorator.show_fields().unwrap().contains_key("title"));
    assert!(decorator.form_fields().unwrap().contains_key("title"));
    assert_eq!(
        decorator.index_fields().unwrap().get("created_at").unwrap().label,
        "Created at"
    );
    assert!(!decorator.show_fields().unwrap().contains_key("notes"));

    assert!(decorator.form_field_names().unwrap().contains("notes"));
    assert!(!decorator.index_field_names().unwrap().contains("title"));
}

#[test]
fn canonical_copy_is_a_deep_clone() {
    let decorator = ModelDecorator::new(post_schema());
    let mut copy = decorator.fields().unwrap().to_mutable();
    copy.retain(|f| f.is_association());

    assert_eq!(copy.len(), 1);
    assert_eq!(decorator.fields().unwrap().len(), 4);
}

#[test]
fn shared_decorator_across_threads() {
    let schema = Arc::new(CountingSchema::new(post_schema()));
    let decorator = Arc::new(ModelDecorator::new(Arc::clone(&schema)));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let decorator = Arc::clone(&decorator);
            thread::spawn(move || decorator.form_field_names().unwrap().clone())
        })
        .collect();

    for handle in handles {
        let names = handle.join().unwrap();
        assert_eq!(
            names.into_iter().collect::<Vec<_>>(),
            vec!["category".to_string(), "title".to_string()]
        );
    }

    let fields = decorator.fields().unwrap();
    assert!(fields.ptr_eq(decorator.fields().unwrap()));
    assert!(schema.columns_calls() >= 1);
}
