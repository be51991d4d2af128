//! Integration test: load the species and category schemas from a data
//! layout on disk and validate documents against them.

use std::path::Path;

use serde_json::json;
use taxa_core::{DataError, DataLayout};
use taxa_schema::{SchemaError, SchemaSet};

const SPECIES_SCHEMA: &str = r##"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "$id": "https://taxa.example.org/schemas/species.schema.json",
  "type": "object",
  "required": ["id", "name"],
  "additionalProperties": false,
  "properties": {
    "id": { "$ref": "common.schema.json#/definitions/slug" },
    "name": { "type": "string" },
    "firstRecorded": { "type": "string", "format": "date" }
  }
}"##;

const CATEGORY_SCHEMA: &str = r##"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "$id": "https://taxa.example.org/schemas/category.schema.json",
  "type": "object",
  "required": ["title", "speciesIds"],
  "properties": {
    "title": { "type": "string" },
    "speciesIds": {
      "type": "array",
      "items": { "$ref": "common.schema.json#/definitions/slug" }
    }
  }
}"##;

const COMMON_SCHEMA: &str = r##"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "$id": "https://taxa.example.org/schemas/common.schema.json",
  "definitions": {
    "slug": { "type": "string", "pattern": "^[a-z][a-z0-9-]*$" }
  }
}"##;

fn write_schemas(root: &Path, species: &str, category: &str) {
    let dir = root.join("schemas");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("species.schema.json"), species).unwrap();
    std::fs::write(dir.join("category.schema.json"), category).unwrap();
    std::fs::write(dir.join("common.schema.json"), COMMON_SCHEMA).unwrap();
}

#[test]
fn loads_both_schemas_with_shared_definitions() {
    let root = tempfile::tempdir().unwrap();
    write_schemas(root.path(), SPECIES_SCHEMA, CATEGORY_SCHEMA);

    let schemas = SchemaSet::load(&DataLayout::with_defaults(root.path())).unwrap();
    assert_eq!(schemas.species.name(), "species.schema.json");
    assert_eq!(schemas.category.name(), "category.schema.json");

    assert!(schemas
        .species
        .check(&json!({"id": "arctic-fox", "name": "Arctic fox", "firstRecorded": "1758-01-01"}))
        .is_valid());
    assert!(schemas
        .category
        .check(&json!({"title": "Canids", "speciesIds": ["arctic-fox"]}))
        .is_valid());
}

#[test]
fn shared_definition_is_enforced_through_ref() {
    let root = tempfile::tempdir().unwrap();
    write_schemas(root.path(), SPECIES_SCHEMA, CATEGORY_SCHEMA);
    let schemas = SchemaSet::load(&DataLayout::with_defaults(root.path())).unwrap();

    let verdict = schemas
        .category
        .check(&json!({"title": "Canids", "speciesIds": ["arctic-fox", "Grey Wolf"]}));
    assert_eq!(verdict.violations.len(), 1, "got: {:?}", verdict.violations);
    assert_eq!(verdict.violations[0].instance_path, "/speciesIds/1");
}

#[test]
fn schemas_are_reusable_across_documents() {
    let root = tempfile::tempdir().unwrap();
    write_schemas(root.path(), SPECIES_SCHEMA, CATEGORY_SCHEMA);
    let schemas = SchemaSet::load(&DataLayout::with_defaults(root.path())).unwrap();

    let docs = [
        json!({"id": "fox", "name": "Fox"}),
        json!({"id": "owl"}),
        json!({"id": "elk", "name": "Elk", "antlers": true}),
        json!({"id": "lynx", "name": "Lynx"}),
    ];
    let valid: Vec<bool> = docs
        .iter()
        .map(|d| schemas.species.check(d).is_valid())
        .collect();
    assert_eq!(valid, vec![true, false, false, true]);
}

#[test]
fn missing_schema_file_is_load_error() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("schemas");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("species.schema.json"), SPECIES_SCHEMA).unwrap();
    std::fs::write(dir.join("common.schema.json"), COMMON_SCHEMA).unwrap();

    let err = SchemaSet::load(&DataLayout::with_defaults(root.path())).unwrap_err();
    assert!(
        matches!(err, SchemaError::Load(DataError::Read { .. })),
        "got: {err}"
    );
}

#[test]
fn meta_schema_violation_is_compile_error() {
    let root = tempfile::tempdir().unwrap();
    write_schemas(
        root.path(),
        r#"{"type": "object", "required": "id"}"#,
        CATEGORY_SCHEMA,
    );

    let err = SchemaSet::load(&DataLayout::with_defaults(root.path())).unwrap_err();
    assert!(
        matches!(err, SchemaError::Compile { ref schema, .. } if schema == "species.schema.json"),
        "got: {err}"
    );
}
