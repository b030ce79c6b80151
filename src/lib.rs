//! # Schema Organizer
//!
//! Bidirectional conversion between nested table schemas, where struct/JSON
//! columns embed their sub-columns, and a flattened form where every nesting
//! level becomes a path-addressed sub-table that the onboarding UI can select
//! and describe independently.
//!
//! ```
//! use schema_organizer::{Column, SchemaOrganizer, TableSchema};
//!
//! let table = TableSchema::new("users", true)
//!     .with_column(Column::new("id", "int", true))
//!     .with_column(
//!         Column::new("profile", "object", true)
//!             .with_children(vec![Column::new("city", "string", false)]),
//!     );
//!
//! let organizer = SchemaOrganizer::default();
//! let mut organized = organizer.flatten(&table).unwrap();
//! assert_eq!(organized.sub_tables[0].path, "users/profile");
//!
//! organized.set_sub_table_selected("users/profile", false).unwrap();
//! let rebuilt = organizer.rebuild(&organized).unwrap();
//! assert!(!rebuilt.columns[1].selected);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod organizer;
pub mod schema;

pub use config::OrganizerConfig;
pub use error::{OrganizerError, Result};
pub use organizer::{flatten, rebuild, OrganizedTables, SchemaOrganizer, SubTable};
pub use schema::{Column, SubTablePath, TableSchema, TableSchemaValidator};
