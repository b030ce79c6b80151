//! # Organizer Module
//!
//! Converts table schemas between the nested form persisted by the backend and
//! the flattened form rendered by the onboarding "tables" step.
//!
//! ## Components
//!
//! * `flattener` - nested `TableSchema` to path-addressed `SubTable`s
//! * `rebuilder` - edited `OrganizedTables` back to a nested `TableSchema`
//! * `selection` - in-place selection/description edits on `OrganizedTables`
//! * `types` - the flattened data model
//!
//! ## Flow
//!
//! 1. Schema introspection yields a nested `TableSchema`
//! 2. `flatten` produces `OrganizedTables` for rendering
//! 3. The user toggles `selected`/`description` per sub-table
//! 4. `submit` rebuilds and validates the nested schema for the backend

pub mod flattener;
pub mod rebuilder;
pub mod selection;
pub mod types;


pub use flattener::Flattener;
pub use rebuilder::Rebuilder;
pub use types::{OrganizedTables, SubTable};

use crate::config::OrganizerConfig;
use crate::error::{OrganizerError, Result};
use crate::schema::{TableSchema, TableSchemaValidator};
use log::info;

/// Service that owns an [`OrganizerConfig`] and runs both conversions.
#[derive(Debug, Clone, Default)]
pub struct SchemaOrganizer {
    config: OrganizerConfig,
}

impl SchemaOrganizer {
    /// Create a new organizer, validating the configuration
    pub fn new(config: OrganizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &OrganizerConfig {
        &self.config
    }

    /// Flatten one nested table
    pub fn flatten(&self, table: &TableSchema) -> Result<OrganizedTables> {
        Flattener::new(&self.config).flatten(table)
    }

    /// Rebuild one nested table from its flattened form
    pub fn rebuild(&self, organized: &OrganizedTables) -> Result<TableSchema> {
        Rebuilder::new(&self.config).rebuild(organized)
    }

    /// Flatten every table of a data source
    pub fn flatten_all(&self, tables: &[TableSchema]) -> Result<Vec<OrganizedTables>> {
        let organized = tables
            .iter()
            .map(|table| self.flatten(table))
            .collect::<Result<Vec<_>>>()?;
        info!("Flattened {} tables", organized.len());
        Ok(organized)
    }

    /// Rebuild every table of a data source
    pub fn rebuild_all(&self, organized: &[OrganizedTables]) -> Result<Vec<TableSchema>> {
        let tables = organized
            .iter()
            .map(|o| self.rebuild(o))
            .collect::<Result<Vec<_>>>()?;
        info!("Rebuilt {} tables", tables.len());
        Ok(tables)
    }

    /// Rebuild and validate a table for submission to the backend
    pub fn submit(&self, organized: &OrganizedTables) -> Result<TableSchema> {
        let table = self.rebuild(organized)?;
        TableSchemaValidator::new().validate(&table)?;
        info!("Table '{}' ready for submission", table.table_name);
        Ok(table)
    }

    /// Check that flattening and rebuilding reproduces the table.
    ///
    /// Empty children lists compare equal to absent ones.
    pub fn verify_round_trip(&self, table: &TableSchema) -> Result<()> {
        let rebuilt = self.rebuild(&self.flatten(table)?)?;
        let expected = table.normalized();
        if rebuilt != expected {
            return Err(OrganizerError::validation(format!(
                "round trip of table '{}' changed its structure",
                table.table_name
            )));
        }
        Ok(())
    }
}

/// Flatten with the default configuration
pub fn flatten(table: &TableSchema) -> Result<OrganizedTables> {
    SchemaOrganizer::default().flatten(table)
}

/// Rebuild with the default configuration
pub fn rebuild(organized: &OrganizedTables) -> Result<TableSchema> {
    SchemaOrganizer::default().rebuild(organized)
}
