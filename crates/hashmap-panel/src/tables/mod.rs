//! Entity tables
//!
//! A table is a declared record of columns and actions. Rendering it over a
//! list of rows produces a serializable view with every link already
//! resolved against the panel routes.

pub mod actions;
pub mod fields;
pub mod mappings;
pub mod services;

pub use actions::{Action, BatchAction, BatchOutcome, DeleteKind, LinkAction, UrlArg};
pub use fields::fields_table;
pub use mappings::{field_mappings_table, service_mappings_table};
pub use services::services_table;

use crate::urls::{Route, Urls};
use hashmap_core::models::Identify;
use serde::{Deserialize, Serialize};

/// Placeholder shown for an absent cell value
pub const EMPTY_CELL: &str = "-";

/// Parent entities of the page a table is shown on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_id: Option<String>,
}

impl PanelContext {
    pub fn service(service_id: &str) -> Self {
        Self {
            service_id: Some(service_id.to_string()),
            field_id: None,
        }
    }

    pub fn field(field_id: &str) -> Self {
        Self {
            service_id: None,
            field_id: Some(field_id.to_string()),
        }
    }
}

/// One table column
pub struct Column<T> {
    pub attribute: &'static str,
    pub label: &'static str,
    /// Reads the cell value from a row
    pub value: fn(&T) -> Option<String>,
    /// Route the cell links to, reversed with the row id
    pub link: Option<Route>,
}

impl<T> Column<T> {
    pub fn new(
        attribute: &'static str,
        label: &'static str,
        value: fn(&T) -> Option<String>,
    ) -> Self {
        Self {
            attribute,
            label,
            value,
            link: None,
        }
    }

    pub fn link(mut self, route: Route) -> Self {
        self.link = Some(route);
        self
    }
}

/// Declared table bound to its page context
pub struct Table<T> {
    pub name: &'static str,
    pub verbose_name: &'static str,
    pub columns: Vec<Column<T>>,
    pub row_actions: Vec<Action>,
    pub table_actions: Vec<Action>,
    pub multi_select: bool,
    pub context: PanelContext,
}

impl<T: Identify> Table<T> {
    /// Renders `rows` in the order given
    pub fn render(&self, rows: &[T], urls: &Urls) -> TableView {
        let columns = self
            .columns
            .iter()
            .map(|c| ColumnView {
                attribute: c.attribute,
                label: c.label,
            })
            .collect();

        let rows = rows
            .iter()
            .map(|row| {
                let id = row.id();
                RowView {
                    id: id.to_string(),
                    cells: self
                        .columns
                        .iter()
                        .map(|c| CellView {
                            value: (c.value)(row).unwrap_or_else(|| EMPTY_CELL.to_string()),
                            link: c.link.and_then(|route| urls.reverse(route, Some(id))),
                        })
                        .collect(),
                    actions: self
                        .row_actions
                        .iter()
                        .map(|a| a.view(urls, &self.context, Some(id)))
                        .collect(),
                }
            })
            .collect();

        TableView {
            name: self.name,
            verbose_name: self.verbose_name,
            multi_select: self.multi_select,
            columns,
            rows,
            actions: self
                .table_actions
                .iter()
                .map(|a| a.view(urls, &self.context, None))
                .collect(),
        }
    }
}

/// Rendered table
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub name: &'static str,
    pub verbose_name: &'static str,
    pub multi_select: bool,
    pub columns: Vec<ColumnView>,
    pub rows: Vec<RowView>,
    pub actions: Vec<ActionView>,
}

impl TableView {
    /// Row ids in display order
    pub fn row_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.id.as_str()).collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnView {
    pub attribute: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    pub id: String,
    pub cells: Vec<CellView>,
    pub actions: Vec<ActionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellView {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Rendered action button
#[derive(Debug, Clone, Serialize)]
pub struct ActionView {
    pub name: &'static str,
    pub verbose_name: &'static str,
    pub icon: &'static str,
    /// `link` or `batch`
    pub kind: &'static str,
    /// Target URL; a batch action posts its selection there
    pub url: Option<String>,
}
