use super::column::Column;
use serde::{Deserialize, Serialize};

/// The nested form of a table schema, as persisted and validated by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    #[serde(rename = "table", alias = "tableName")]
    pub table_name: String,
    pub selected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl TableSchema {
    pub fn new(table_name: impl Into<String>, selected: bool) -> Self {
        Self {
            table_name: table_name.into(),
            selected,
            description: None,
            columns: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Number of columns without children across all nesting levels
    pub fn leaf_count(&self) -> usize {
        self.columns.iter().map(Column::leaf_count).sum()
    }

    /// Whether any top-level column has nested children
    pub fn has_nested_columns(&self) -> bool {
        self.columns.iter().any(Column::has_children)
    }

    /// Collapse `Some(vec![])` children into `None` at every level.
    ///
    /// Both spellings mean "no children"; rebuilt schemas always use `None`.
    pub fn normalized(&self) -> Self {
        fn normalize(column: &Column) -> Column {
            let mut out = column.metadata_only();
            if column.has_children() {
                out.children = Some(column.nested().iter().map(normalize).collect());
            }
            out
        }

        Self {
            table_name: self.table_name.clone(),
            selected: self.selected,
            description: self.description.clone(),
            columns: self.columns.iter().map(normalize).collect(),
        }
    }
}
