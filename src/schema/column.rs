use serde::{Deserialize, Serialize};

/// A table column as produced by schema introspection.
///
/// A column with a non-empty `children` list is a nested (struct/JSON) field.
/// On the wire the children are carried as `jsonColumns`; `children` is accepted
/// as an alias when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    #[serde(rename = "column")]
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    pub selected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "jsonColumns",
        alias = "children",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub children: Option<Vec<Column>>,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: impl Into<String>, selected: bool) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            selected,
            description: None,
            children: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Column>) -> Self {
        self.children = Some(children);
        self
    }

    /// Whether this column hosts nested sub-columns
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// The nested sub-columns, empty for scalar columns
    pub fn nested(&self) -> &[Column] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// A copy of this column's own metadata without any children
    pub fn metadata_only(&self) -> Self {
        Self {
            name: self.name.clone(),
            column_type: self.column_type.clone(),
            selected: self.selected,
            description: self.description.clone(),
            children: None,
        }
    }

    /// Number of columns without children in this subtree, including self
    pub fn leaf_count(&self) -> usize {
        if self.has_children() {
            self.nested().iter().map(Column::leaf_count).sum()
        } else {
            1
        }
    }
}
