mod fixtures;

use fixtures::{CountingSchema, FlakyColumns, post_schema};
use modeladmin::prelude::*;

#[test]
fn unprovisioned_table_yields_default_empty_map() {
    let decorator = ModelDecorator::new(post_schema().provisioned(false));

    for _ in 0..2 {
        let fields = decorator.fields().unwrap();
        assert!(fields.is_empty());
        assert!(fields.is_default_empty());
        assert!(fields.get("title").unwrap().is_empty());
        assert!(fields.get("no_such_field").unwrap().is_empty());
    }
    assert!(!decorator.is_provisioned());
}

#[test]
fn unprovisioned_table_skips_descriptor_lookups() {
    let schema = CountingSchema::new(post_schema().provisioned(false));
    let decorator = ModelDecorator::new(&schema);

    decorator.fields().unwrap();
    decorator.form_field_names().unwrap();

    assert_eq!(schema.columns_calls(), 0);
    assert_eq!(schema.associations_calls(), 0);
}

#[test]
fn unavailable_database_degrades_instead_of_failing() {
    let decorator = ModelDecorator::new(post_schema().unavailable("connection refused"));

    let fields = decorator.fields().unwrap();
    assert!(fields.is_default_empty());
    assert!(fields.get("anything").unwrap().is_empty());

    assert!(decorator.index_field_names().unwrap().is_empty());
    assert!(decorator.show_field_names().unwrap().is_empty());
    assert!(decorator.form_field_names().unwrap().is_empty());
    assert!(decorator.index_fields().unwrap().get("anything").is_some());
    assert_eq!(decorator.title_field().unwrap(), None);

    let record = DynamicRecord::new().with("title", "Alpha");
    assert_eq!(decorator.guess_title(&record), None);

    let listing = decorator.listing().unwrap();
    assert!(!listing.provisioned);
    assert!(listing.form.is_empty());
}

#[test]
fn column_listing_failure_degrades_whole_map() {
    let decorator = ModelDecorator::new(FlakyColumns::new(post_schema()));

    let fields = decorator.fields().unwrap();
    assert!(fields.is_default_empty());
    assert!(!fields.contains_key("category"));
    assert!(fields.get("category").unwrap().is_empty());
    assert!(!decorator.is_provisioned());

    assert!(decorator.form_field_names().unwrap().is_empty());
    assert!(decorator.index_field_names().unwrap().is_empty());
    assert!(decorator.show_field_names().unwrap().is_empty());
    assert!(decorator.general_fields().unwrap().is_empty());
    assert_eq!(decorator.title_field().unwrap(), None);
}

#[test]
fn malformed_descriptor_propagates() {
    let schema = post_schema()
        .association(AssociationDescriptor::new("owner", AssociationKind::HasOne));
    let decorator = ModelDecorator::new(schema);

    let err = decorator.fields().unwrap_err();
    assert!(matches!(err, Error::MalformedDescriptor { .. }));
    assert!(decorator.form_field_names().is_err());
    assert!(decorator.listing().is_err());

    // General fields are still usable for title guessing.
    let record = DynamicRecord::new().with("title", "Alpha");
    assert_eq!(decorator.guess_title(&record), Some(Value::from("Alpha")));
}
