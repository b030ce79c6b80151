//! Common fixtures for schema organizer integration tests

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::Rng;
use schema_organizer::{Column, TableSchema};
use serde_json::json;

const LEAF_TYPES: [&str; 5] = ["int", "string", "bool", "decimal", "timestamp"];
const NESTED_TYPES: [&str; 3] = ["object", "array", "struct"];

/// Initialize test logging once; later calls are no-ops
pub fn init_test_logging() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

/// The `users` example table from the onboarding flow
pub fn users_table_json() -> serde_json::Value {
    json!({
        "table": "users",
        "selected": true,
        "columns": [
            {"column": "id", "type": "int", "selected": true},
            {"column": "profile", "type": "object", "selected": true, "jsonColumns": [
                {"column": "address", "type": "object", "selected": true, "jsonColumns": [
                    {"column": "city", "type": "string", "selected": false}
                ]}
            ]}
        ]
    })
}

pub fn users_table() -> TableSchema {
    serde_json::from_value(users_table_json()).expect("fixture is valid")
}

/// Generate a random nested table.
///
/// Leaves inside nested levels are never pure containers, so the table
/// survives a flatten/rebuild round trip unchanged.
pub fn random_table(rng: &mut StdRng, name: &str, max_depth: usize) -> TableSchema {
    let mut table = TableSchema::new(name, rng.gen_bool(0.8));
    if rng.gen_bool(0.5) {
        table.description = Some(format!("{} table", name));
    }
    table.columns = random_columns(rng, "c", max_depth, true);
    table
}

fn random_columns(rng: &mut StdRng, prefix: &str, depth_left: usize, top_level: bool) -> Vec<Column> {
    let count = rng.gen_range(1..=5);
    (0..count)
        .map(|i| {
            let name = format!("{}{}", prefix, i);
            if depth_left > 0 && rng.gen_bool(0.35) {
                let column_type = NESTED_TYPES[rng.gen_range(0..NESTED_TYPES.len())];
                let mut column = Column::new(name.as_str(), column_type, rng.gen_bool(0.7))
                    .with_children(random_columns(rng, &format!("{}_", name), depth_left - 1, false));
                if rng.gen_bool(0.3) {
                    column.description = Some(format!("nested {}", name));
                }
                column
            } else {
                let column_type = if top_level && rng.gen_bool(0.1) {
                    "object"
                } else {
                    LEAF_TYPES[rng.gen_range(0..LEAF_TYPES.len())]
                };
                let mut column = Column::new(name.as_str(), column_type, rng.gen_bool(0.6));
                if rng.gen_bool(0.2) {
                    column.description = Some(format!("leaf {}", name));
                }
                column
            }
        })
        .collect()
}
