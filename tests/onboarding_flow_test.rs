//! End-to-end onboarding "tables" step: introspected JSON in, backend JSON out

mod common;

use schema_organizer::{
    OrganizedTables, OrganizerConfig, OrganizerError, SchemaOrganizer, TableSchema,
};
use serde_json::{json, Value};

#[test]
fn test_users_example_flattened_shape() {
    common::init_test_logging();
    let organizer = SchemaOrganizer::default();
    let organized = organizer.flatten(&common::users_table()).unwrap();

    assert_eq!(
        serde_json::to_value(&organized).unwrap(),
        json!({
            "tableName": "users",
            "selected": true,
            "columns": [
                {"column": "id", "type": "int", "selected": true}
            ],
            "subTables": [
                {
                    "path": "users/profile",
                    "columns": [],
                    "selected": true,
                    "type": "object",
                    "position": 1
                },
                {
                    "path": "users/profile/address",
                    "columns": [
                        {"column": "city", "type": "string", "selected": false}
                    ],
                    "selected": true,
                    "type": "object",
                    "position": 0
                }
            ]
        })
    );
}

#[test]
fn test_users_example_rebuilds_to_backend_shape() {
    let organizer = SchemaOrganizer::default();
    let organized = organizer.flatten(&common::users_table()).unwrap();
    let table = organizer.submit(&organized).unwrap();

    let value = serde_json::to_value(&table).unwrap();
    assert_eq!(value, common::users_table_json());
    assert_eq!(
        value["columns"][1]["jsonColumns"][0]["jsonColumns"][0]["selected"],
        Value::Bool(false)
    );
    // Leaves carry no jsonColumns key at all
    assert!(value["columns"][0].get("jsonColumns").is_none());
}

#[test]
fn test_ui_edits_flow_through() {
    let organizer = SchemaOrganizer::default();
    let mut organized = organizer.flatten(&common::users_table()).unwrap();

    organized
        .set_sub_table_selected("users/profile/address", false)
        .unwrap();
    organized
        .set_sub_table_description("users/profile", Some("Public profile".to_string()))
        .unwrap();
    organized
        .set_column_selected(Some("users/profile/address"), "city", true)
        .unwrap();

    // The UI round-trips its state through JSON between steps
    let wire = serde_json::to_string(&organized).unwrap();
    let organized: OrganizedTables = serde_json::from_str(&wire).unwrap();

    let table = organizer.submit(&organized).unwrap();
    let profile = &table.columns[1];
    assert_eq!(profile.description.as_deref(), Some("Public profile"));
    assert!(profile.selected);
    let address = &profile.nested()[0];
    assert!(!address.selected);
    assert!(address.nested()[0].selected);
    assert_eq!(table.columns[0].name, "id");
}

#[test]
fn test_hand_written_organized_tables_without_positions() {
    let organizer = SchemaOrganizer::default();
    let organized: OrganizedTables = serde_json::from_value(json!({
        "tableName": "events",
        "selected": true,
        "columns": [{"column": "ts", "type": "timestamp", "selected": true}],
        "subTables": [
            {"path": "events/payload/meta", "columns": [
                {"column": "source", "type": "string", "selected": true}
            ], "selected": false, "type": "object"},
            {"path": "events/payload", "columns": [
                {"column": "kind", "type": "string", "selected": true}
            ], "selected": true, "type": "object"}
        ]
    }))
    .unwrap();

    let table = organizer.rebuild(&organized).unwrap();
    assert_eq!(
        serde_json::to_value(&table).unwrap(),
        json!({
            "table": "events",
            "selected": true,
            "columns": [
                {"column": "ts", "type": "timestamp", "selected": true},
                {"column": "payload", "type": "object", "selected": true, "jsonColumns": [
                    {"column": "kind", "type": "string", "selected": true},
                    {"column": "meta", "type": "object", "selected": false, "jsonColumns": [
                        {"column": "source", "type": "string", "selected": true}
                    ]}
                ]}
            ]
        })
    );
}

#[test]
fn test_integrity_errors() {
    let organizer = SchemaOrganizer::default();
    let base = || -> OrganizedTables {
        serde_json::from_value(json!({
            "tableName": "events",
            "selected": true,
            "columns": [],
            "subTables": []
        }))
        .unwrap()
    };

    let mut mismatch = base();
    mismatch.sub_tables = organizer
        .flatten(&common::users_table())
        .unwrap()
        .sub_tables;
    let err = organizer.rebuild(&mismatch).unwrap_err();
    assert!(matches!(err, OrganizerError::TableNameMismatch { .. }));
    assert!(err.is_integrity_error());

    let mut orphan: OrganizedTables = base();
    orphan.sub_tables = serde_json::from_value(json!([
        {"path": "events/a/b", "columns": [], "selected": true, "type": "object"}
    ]))
    .unwrap();
    assert!(matches!(
        organizer.rebuild(&orphan),
        Err(OrganizerError::MissingAncestor { .. })
    ));

    let lenient = SchemaOrganizer::new(OrganizerConfig {
        require_ancestor_levels: false,
        ..Default::default()
    })
    .unwrap();
    let table = lenient.rebuild(&orphan).unwrap();
    assert_eq!(table.columns[0].name, "a");
    assert_eq!(table.columns[0].nested()[0].name, "b");

    let mut malformed = base();
    malformed.sub_tables = serde_json::from_value(json!([
        {"path": "events", "columns": [], "selected": true, "type": "object"}
    ]))
    .unwrap();
    assert!(matches!(
        organizer.rebuild(&malformed),
        Err(OrganizerError::InvalidPath(_))
    ));
}

#[test]
fn test_batch_of_tables_from_introspection() {
    let organizer = SchemaOrganizer::default();
    let tables: Vec<TableSchema> = serde_json::from_value(json!([
        common::users_table_json(),
        {
            "table": "audit",
            "selected": false,
            "description": "Audit trail",
            "columns": [{"column": "entry", "type": "string", "selected": false}]
        }
    ]))
    .unwrap();

    let organized = organizer.flatten_all(&tables).unwrap();
    assert_eq!(organized[1].description.as_deref(), Some("Audit trail"));
    assert!(organized[1].sub_tables.is_empty());
    assert_eq!(organizer.rebuild_all(&organized).unwrap(), tables);
}
