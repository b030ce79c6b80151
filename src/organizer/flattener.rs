//! Flattens a nested [`TableSchema`] into path-addressed sub-tables

use super::types::{OrganizedTables, SubTable};
use crate::config::OrganizerConfig;
use crate::constants::PATH_SEPARATOR;
use crate::error::{OrganizerError, Result};
use crate::schema::{Column, SubTablePath, TableSchema};
use log::{debug, info};
use std::collections::HashSet;

/// Promotes every nesting level of a table to its own [`SubTable`].
///
/// Levels are emitted depth-first, each level before its descendants.
/// All output is owned; editing the result never touches the input tree.
pub struct Flattener<'a> {
    config: &'a OrganizerConfig,
}

impl<'a> Flattener<'a> {
    pub fn new(config: &'a OrganizerConfig) -> Self {
        Self { config }
    }

    pub fn flatten(&self, table: &TableSchema) -> Result<OrganizedTables> {
        check_unique_names(&table.table_name, &table.columns)?;

        let mut columns = Vec::new();
        let mut sub_tables = Vec::new();

        for (position, column) in table.columns.iter().enumerate() {
            if column.has_children() {
                let path = SubTablePath::for_column(&table.table_name, &column.name)?;
                self.flatten_level(column, path, position, &mut sub_tables)?;
            } else {
                columns.push(column.clone());
            }
        }

        info!(
            "Flattened table '{}': {} direct columns, {} sub-tables",
            table.table_name,
            columns.len(),
            sub_tables.len()
        );

        Ok(OrganizedTables {
            table_name: table.table_name.clone(),
            description: table.description.clone(),
            selected: table.selected,
            columns,
            sub_tables,
        })
    }

    /// Pure-container leaves carry no data and are left out of a nested level
    fn is_dropped(&self, column: &Column) -> bool {
        !column.has_children() && self.config.is_container_type(&column.column_type)
    }

    fn flatten_level(
        &self,
        column: &Column,
        path: SubTablePath,
        position: usize,
        out: &mut Vec<SubTable>,
    ) -> Result<()> {
        let key = path.to_string();
        // Positions index the emitted children so a rebuild lines them up again
        let emitted: Vec<&Column> = column
            .nested()
            .iter()
            .filter(|c| !self.is_dropped(c))
            .collect();
        check_unique_names(&key, emitted.iter().copied())?;

        let leaves: Vec<Column> = emitted
            .iter()
            .filter(|c| !c.has_children())
            .map(|&c| c.clone())
            .collect();

        debug!("Emitting sub-table '{}' with {} leaves", key, leaves.len());
        out.push(SubTable {
            path: key,
            columns: leaves,
            selected: column.selected,
            description: column.description.clone(),
            column_type: column.column_type.clone(),
            position: Some(position),
        });

        for (child_position, child) in emitted.into_iter().enumerate() {
            if child.has_children() {
                let child_path = path.child(&child.name)?;
                self.flatten_level(child, child_path, child_position, out)?;
            }
        }

        Ok(())
    }
}

/// Every column at one level needs its own name, leaf or nested.
fn check_unique_names<'c>(
    level: &str,
    columns: impl IntoIterator<Item = &'c Column>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for column in columns {
        if !seen.insert(column.name.as_str()) {
            return Err(OrganizerError::duplicate_path(format!(
                "{}{}{}",
                level, PATH_SEPARATOR, column.name
            )));
        }
    }
    Ok(())
}
