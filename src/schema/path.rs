//! Slash-delimited sub-table paths.
//!
//! A path names one nesting level of a table: `users/profile/address` is the
//! `address` struct inside the `profile` column of table `users`. Paths order
//! parent-first (by depth, then by segments), so sorting a list of paths
//! always places every ancestor before its descendants.

use crate::constants::PATH_SEPARATOR;
use crate::error::{OrganizerError, Result};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubTablePath {
    table: String,
    segments: Vec<String>,
}

/// Check that a table or column name can be used as a path segment
pub fn validate_segment(segment: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(OrganizerError::invalid_segment("name must not be empty"));
    }
    if segment.contains(PATH_SEPARATOR) {
        return Err(OrganizerError::invalid_segment(format!(
            "'{}' contains the path separator '{}'",
            segment, PATH_SEPARATOR
        )));
    }
    Ok(())
}

impl SubTablePath {
    /// Path of a top-level nested column: `table/column`
    pub fn for_column(table: &str, column: &str) -> Result<Self> {
        validate_segment(table)?;
        validate_segment(column)?;
        Ok(Self {
            table: table.to_string(),
            segments: vec![column.to_string()],
        })
    }

    /// Parse `table/seg1/seg2/...`; at least one segment is required
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.split(PATH_SEPARATOR);
        let table = parts.next().unwrap_or_default();
        if table.is_empty() {
            return Err(OrganizerError::invalid_path(format!(
                "'{}' has no table name",
                raw
            )));
        }

        let segments: Vec<String> = parts.map(str::to_string).collect();
        if segments.is_empty() {
            return Err(OrganizerError::invalid_path(format!(
                "'{}' has no column segments",
                raw
            )));
        }
        if segments.iter().any(String::is_empty) {
            return Err(OrganizerError::invalid_path(format!(
                "'{}' contains an empty segment",
                raw
            )));
        }

        Ok(Self {
            table: table.to_string(),
            segments,
        })
    }

    /// Path one level deeper
    pub fn child(&self, column: &str) -> Result<Self> {
        validate_segment(column)?;
        let mut segments = self.segments.clone();
        segments.push(column.to_string());
        Ok(Self {
            table: self.table.clone(),
            segments,
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Proper ancestors from the outermost level inwards
    pub fn ancestors(&self) -> impl Iterator<Item = SubTablePath> + '_ {
        (1..self.segments.len()).map(move |len| Self {
            table: self.table.clone(),
            segments: self.segments[..len].to_vec(),
        })
    }
}

impl Ord for SubTablePath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.depth()
            .cmp(&other.depth())
            .then_with(|| self.table.cmp(&other.table))
            .then_with(|| self.segments.cmp(&other.segments))
    }
}

impl PartialOrd for SubTablePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SubTablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table)?;
        for segment in &self.segments {
            write!(f, "{}{}", PATH_SEPARATOR, segment)?;
        }
        Ok(())
    }
}
