//! Builds field maps from raw schema descriptors.

use modeladmin_core::{
    AssociationDescriptor, AssociationKind, ColumnDescriptor, Error, FieldMap, FieldMetadata,
    ModelSchema, Result, humanize,
};

/// Metadata for every storage column of the model.
///
/// Returns an empty map when the backing table does not exist yet. An
/// unreachable database is reported as `Error::SchemaUnavailable`.
#[tracing::instrument(level = "debug", skip(schema), fields(model = schema.model_name()))]
pub fn general_fields<S: ModelSchema + ?Sized>(schema: &S) -> Result<FieldMap> {
    if !schema.table_exists()? {
        tracing::debug!("Table does not exist yet; no general fields");
        return Ok(FieldMap::new());
    }

    let columns = schema.columns()?;
    let mut map = FieldMap::new();
    for column in &columns {
        map.insert(column_field(schema.model_name(), column)?);
    }

    tracing::debug!(count = map.len(), "Built general fields");
    Ok(map)
}

/// Metadata for every declared association of the model.
#[tracing::instrument(level = "debug", skip(schema), fields(model = schema.model_name()))]
pub fn association_fields<S: ModelSchema + ?Sized>(schema: &S) -> Result<FieldMap> {
    let associations = schema.associations()?;
    let mut map = FieldMap::new();
    for association in &associations {
        map.insert(association_field(schema.model_name(), association)?);
    }

    tracing::debug!(count = map.len(), "Built association fields");
    Ok(map)
}

fn column_field(model: &str, column: &ColumnDescriptor) -> Result<FieldMetadata> {
    if column.name.is_empty() {
        return Err(Error::malformed(model, "column with empty name"));
    }
    Ok(FieldMetadata::column(
        column.name.clone(),
        column.column_type.clone(),
        humanize(&column.name),
    ))
}

fn association_field(model: &str, association: &AssociationDescriptor) -> Result<FieldMetadata> {
    if association.name.is_empty() {
        return Err(Error::malformed(model, "association with empty name"));
    }
    if association.polymorphic && association.kind != AssociationKind::BelongsTo {
        return Err(Error::malformed(
            model,
            format!(
                "association `{}` is polymorphic but is a {}",
                association.name, association.kind
            ),
        ));
    }
    if !association.polymorphic && association.class_name.is_none() {
        return Err(Error::malformed(
            model,
            format!("association `{}` has no class", association.name),
        ));
    }

    let class = if association.polymorphic {
        None
    } else {
        association.class_name.clone()
    };

    Ok(FieldMetadata::association(
        association.name.clone(),
        association.kind,
        humanize(&association.name),
    )
    .through(association.through.is_some())
    .scoped(association.scope.is_some())
    .foreign_key(association.effective_foreign_key())
    .polymorphic_type(association.polymorphic_type_column())
    .class(class))
}
