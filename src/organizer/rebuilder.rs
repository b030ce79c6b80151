//! Rebuilds the nested [`TableSchema`] from an edited [`OrganizedTables`].
//!
//! Sub-tables are folded in parent-first order into an arena of levels. Each
//! level indexes its entries by name, so resolving a path segment is a map
//! lookup rather than a scan of the sibling list.

use super::types::{OrganizedTables, SubTable};
use crate::config::OrganizerConfig;
use crate::error::{OrganizerError, Result};
use crate::schema::{Column, SubTablePath, TableSchema};
use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};

const ROOT: usize = 0;

enum Entry {
    Leaf(Column),
    Level(usize),
}

struct Level {
    column: Column,
    entries: Vec<Entry>,
    by_name: HashMap<String, usize>,
    position: Option<usize>,
}

impl Level {
    fn new(column: Column, position: Option<usize>) -> Self {
        Self {
            column,
            entries: Vec::new(),
            by_name: HashMap::new(),
            position,
        }
    }

    /// Append an entry; the first entry with a given name wins lookups
    fn push(&mut self, name: &str, entry: Entry) {
        let index = self.entries.len();
        self.entries.push(entry);
        self.by_name.entry(name.to_string()).or_insert(index);
    }

    fn push_leaf(&mut self, leaf: &Column) {
        let mut leaf = leaf.clone();
        if !leaf.has_children() {
            leaf.children = None;
        }
        let name = leaf.name.clone();
        self.push(&name, Entry::Leaf(leaf));
    }
}

pub struct Rebuilder<'a> {
    config: &'a OrganizerConfig,
}

impl<'a> Rebuilder<'a> {
    pub fn new(config: &'a OrganizerConfig) -> Self {
        Self { config }
    }

    pub fn rebuild(&self, organized: &OrganizedTables) -> Result<TableSchema> {
        let ordered = self.order_sub_tables(organized)?;

        let mut arena = vec![Level::new(
            Column::new(organized.table_name.as_str(), "", organized.selected),
            None,
        )];
        for column in &organized.columns {
            arena[ROOT].push_leaf(column);
        }

        for (path, sub) in &ordered {
            self.fold_sub_table(&mut arena, path, sub);
        }

        let columns = self.materialize_entries(&arena, ROOT);
        info!(
            "Rebuilt table '{}' from {} sub-tables",
            organized.table_name,
            ordered.len()
        );

        Ok(TableSchema {
            table_name: organized.table_name.clone(),
            selected: organized.selected,
            description: organized.description.clone(),
            columns,
        })
    }

    /// Parse, check and sort sub-table paths ancestors first.
    fn order_sub_tables<'s>(
        &self,
        organized: &'s OrganizedTables,
    ) -> Result<Vec<(SubTablePath, &'s SubTable)>> {
        let mut seen = HashSet::new();
        let mut ordered = Vec::with_capacity(organized.sub_tables.len());

        for sub in &organized.sub_tables {
            let path = SubTablePath::parse(&sub.path)?;
            if path.table() != organized.table_name {
                return Err(OrganizerError::table_name_mismatch(
                    organized.table_name.as_str(),
                    path.table(),
                    sub.path.as_str(),
                ));
            }
            if !seen.insert(path.clone()) {
                return Err(OrganizerError::duplicate_path(sub.path.as_str()));
            }
            ordered.push((path, sub));
        }

        ordered.sort_by(|a, b| a.0.cmp(&b.0));

        for (path, _) in &ordered {
            for ancestor in path.ancestors() {
                if seen.contains(&ancestor) {
                    continue;
                }
                if self.config.require_ancestor_levels {
                    return Err(OrganizerError::missing_ancestor(
                        path.to_string(),
                        ancestor.to_string(),
                    ));
                }
                warn!(
                    "Sub-table '{}' has no declared level '{}', creating a placeholder",
                    path, ancestor
                );
            }
        }

        Ok(ordered)
    }

    fn fold_sub_table(&self, arena: &mut Vec<Level>, path: &SubTablePath, sub: &SubTable) {
        debug!("Folding sub-table '{}'", path);

        let mut current = ROOT;
        for segment in path.segments() {
            current = Self::find_or_create(arena, current, segment, sub);
        }

        // Only metadata is reconciled; entries attached by earlier folds stay.
        let level = &mut arena[current];
        level.column.column_type = sub.column_type.clone();
        level.column.selected = sub.selected;
        level.column.description = sub.description.clone();
        level.position = sub.position;
        for leaf in &sub.columns {
            level.push_leaf(leaf);
        }
    }

    fn find_or_create(arena: &mut Vec<Level>, parent: usize, name: &str, sub: &SubTable) -> usize {
        let existing = arena[parent].by_name.get(name).copied();
        match existing {
            Some(index) => {
                // A direct column becomes a level; children it already had stay
                let promoted = match &arena[parent].entries[index] {
                    Entry::Level(id) => return *id,
                    Entry::Leaf(column) => {
                        let mut level = Level::new(column.metadata_only(), None);
                        for child in column.nested() {
                            level.push_leaf(child);
                        }
                        level
                    }
                };
                let id = arena.len();
                arena.push(promoted);
                arena[parent].entries[index] = Entry::Level(id);
                id
            }
            None => {
                let placeholder = Column {
                    name: name.to_string(),
                    column_type: sub.column_type.clone(),
                    selected: sub.selected,
                    description: sub.description.clone(),
                    children: None,
                };
                let id = arena.len();
                arena.push(Level::new(placeholder, None));
                arena[parent].push(name, Entry::Level(id));
                id
            }
        }
    }

    fn materialize_entries(&self, arena: &[Level], id: usize) -> Vec<Column> {
        let mut columns = Vec::with_capacity(arena[id].entries.len());
        let mut positioned = Vec::new();

        for entry in &arena[id].entries {
            match entry {
                Entry::Leaf(column) => columns.push(column.clone()),
                Entry::Level(child) => {
                    let column = self.materialize_level(arena, *child);
                    match arena[*child].position {
                        Some(position) if self.config.preserve_column_order => {
                            positioned.push((position, column))
                        }
                        _ => columns.push(column),
                    }
                }
            }
        }

        positioned.sort_by_key(|(position, _)| *position);
        for (position, column) in positioned {
            let at = position.min(columns.len());
            columns.insert(at, column);
        }

        columns
    }

    fn materialize_level(&self, arena: &[Level], id: usize) -> Column {
        let mut column = arena[id].column.clone();
        let children = self.materialize_entries(arena, id);
        column.children = if children.is_empty() {
            None
        } else {
            Some(children)
        };
        column
    }
}
