//! In-place edits applied by the onboarding UI to an [`OrganizedTables`].
//!
//! Every edit touches exactly the addressed record. Unknown paths and columns
//! are reported as [`OrganizerError::NotFound`].

use super::types::{OrganizedTables, SubTable};
use crate::error::{OrganizerError, Result};
use crate::schema::{Column, SubTablePath};
use log::debug;

impl OrganizedTables {
    pub fn sub_table(&self, path: &str) -> Option<&SubTable> {
        self.sub_tables.iter().find(|sub| sub.path == path)
    }

    pub fn sub_table_mut(&mut self, path: &str) -> Option<&mut SubTable> {
        self.sub_tables.iter_mut().find(|sub| sub.path == path)
    }

    fn require_sub_table_mut(&mut self, path: &str) -> Result<&mut SubTable> {
        let table_name = self.table_name.clone();
        self.sub_table_mut(path).ok_or_else(|| {
            OrganizerError::not_found(format!(
                "sub-table '{}' in table '{}'",
                path, table_name
            ))
        })
    }

    /// Toggle the selection flag of one sub-table
    pub fn set_sub_table_selected(&mut self, path: &str, selected: bool) -> Result<()> {
        debug!("Setting sub-table '{}' selected={}", path, selected);
        self.require_sub_table_mut(path)?.selected = selected;
        Ok(())
    }

    /// Replace the description of one sub-table
    pub fn set_sub_table_description(
        &mut self,
        path: &str,
        description: Option<String>,
    ) -> Result<()> {
        self.require_sub_table_mut(path)?.description = description;
        Ok(())
    }

    /// Toggle a leaf column. `path` of `None` addresses the direct columns.
    pub fn set_column_selected(
        &mut self,
        path: Option<&str>,
        column: &str,
        selected: bool,
    ) -> Result<()> {
        debug!(
            "Setting column '{}' in {} selected={}",
            column,
            path.unwrap_or("<direct columns>"),
            selected
        );

        let columns = match path {
            Some(path) => &mut self.require_sub_table_mut(path)?.columns,
            None => &mut self.columns,
        };

        let target = columns
            .iter_mut()
            .find(|c| c.name == column)
            .ok_or_else(|| {
                OrganizerError::not_found(format!(
                    "column '{}' in {}",
                    column,
                    path.unwrap_or("direct columns")
                ))
            })?;
        target.selected = selected;
        Ok(())
    }

    /// Look up a leaf column. `path` of `None` addresses the direct columns.
    pub fn column(&self, path: Option<&str>, column: &str) -> Option<&Column> {
        let columns = match path {
            Some(path) => &self.sub_table(path)?.columns,
            None => &self.columns,
        };
        columns.iter().find(|c| c.name == column)
    }

    /// Paths of all selected sub-tables, ancestors first.
    ///
    /// Paths that fail to parse sort after all valid ones, in input order.
    pub fn selected_paths(&self) -> Vec<String> {
        let mut parsed = Vec::new();
        let mut unparsed = Vec::new();
        for sub in self.sub_tables.iter().filter(|sub| sub.selected) {
            match SubTablePath::parse(&sub.path) {
                Ok(path) => parsed.push(path),
                Err(_) => unparsed.push(sub.path.clone()),
            }
        }
        parsed.sort();

        parsed
            .into_iter()
            .map(|p| p.to_string())
            .chain(unparsed)
            .collect()
    }
}
