use super::{Column, TableSchema};
use crate::error::{OrganizerError, Result};

/// Validates a [`TableSchema`] before it is submitted to the backend.
///
/// The backend requires `table`, `selected` and, on every nesting level,
/// `column`, `type` and `selected`. Presence of the boolean flags is guaranteed
/// by the type; the validator rejects empty names and types.
pub struct TableSchemaValidator;

impl TableSchemaValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate the given [`TableSchema`].
    pub fn validate(&self, table: &TableSchema) -> Result<()> {
        if table.table_name.trim().is_empty() {
            return Err(OrganizerError::validation("Table name cannot be empty"));
        }

        for (index, column) in table.columns.iter().enumerate() {
            self.validate_column(column, &table.table_name, index)?;
        }

        Ok(())
    }

    #[allow(clippy::only_used_in_recursion)]
    fn validate_column(&self, column: &Column, parent: &str, index: usize) -> Result<()> {
        if column.name.trim().is_empty() {
            return Err(OrganizerError::validation(format!(
                "Column #{} of '{}' has an empty name",
                index, parent
            )));
        }

        let location = format!("{}.{}", parent, column.name);
        if column.column_type.trim().is_empty() {
            return Err(OrganizerError::validation(format!(
                "Column '{}' has an empty type",
                location
            )));
        }

        for (child_index, child) in column.nested().iter().enumerate() {
            self.validate_column(child, &location, child_index)?;
        }

        Ok(())
    }
}

impl Default for TableSchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}
