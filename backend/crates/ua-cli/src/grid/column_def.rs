use crate::grid::formatter;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

static NULL: Value = Value::Null;

/// Custom cell renderer; receives the raw cell value.
pub type CellFormatter = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// How a cell is rendered when no custom formatter is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnKind {
    #[default]
    Text,
    Telephone,
    Date,
    DateTime,
    Currency,
    Boolean,
}

#[derive(Clone)]
pub struct ColumnDef {
    /// Sent as `sort`/`group` and stored in `visibleColumnIds`
    pub id: String,
    pub label: String,
    /// Dotted path into the row JSON, e.g. `mainAddress.city`
    pub field: String,
    pub kind: ColumnKind,
    pub sortable: bool,
    pub groupable: bool,
    pub formatter: Option<CellFormatter>,
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("field", &self.field)
            .field("kind", &self.kind)
            .field("sortable", &self.sortable)
            .field("groupable", &self.groupable)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl ColumnDef {
    /// Sortable, groupable text column reading `id` from the row.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            field: id.clone(),
            id,
            label: label.into(),
            kind: ColumnKind::Text,
            sortable: true,
            groupable: true,
            formatter: None,
        }
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn groupable(mut self, groupable: bool) -> Self {
        self.groupable = groupable;
        self
    }

    pub fn formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Raw value of this column in `row`; missing paths are `Null`.
    pub fn value<'a>(&self, row: &'a Value) -> &'a Value {
        self.field
            .split('.')
            .try_fold(row, |current, key| current.get(key))
            .unwrap_or(&NULL)
    }

    pub fn format(&self, row: &Value) -> String {
        let value = self.value(row);
        match &self.formatter {
            Some(formatter) => formatter(value),
            None => formatter::format_cell(self.kind, value),
        }
    }
}
