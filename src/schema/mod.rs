//! Nested table schema model and sub-table path addressing.

pub mod column;
pub mod path;
pub mod table;
pub mod validator;

pub use column::Column;
pub use path::SubTablePath;
pub use table::TableSchema;
pub use validator::TableSchemaValidator;
