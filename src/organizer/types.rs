//! Flattened form of a table schema, as rendered by the onboarding "tables" step

use crate::schema::Column;
use serde::{Deserialize, Serialize};

/// One nesting level of a table, addressable by its path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTable {
    /// Slash-delimited, table-name-prefixed path (`users/profile/address`)
    pub path: String,
    /// Leaf columns of this level; never contains nested or container columns
    #[serde(default)]
    pub columns: Vec<Column>,
    pub selected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub column_type: String,
    /// Index of the column within its parent level's column list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

/// A table split into its direct columns and one [`SubTable`] per nesting level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizedTables {
    #[serde(alias = "table")]
    pub table_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub selected: bool,
    /// Direct, non-nested columns in source order
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub sub_tables: Vec<SubTable>,
}

impl OrganizedTables {
    /// Number of leaf columns across the direct columns and all sub-tables
    pub fn leaf_count(&self) -> usize {
        self.columns.len()
            + self
                .sub_tables
                .iter()
                .map(|sub| sub.columns.len())
                .sum::<usize>()
    }
}
