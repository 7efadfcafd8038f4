//! Page view models

use crate::tables::TableView;
use crate::tabs::TabGroupView;
use serde::{Deserialize, Serialize};

/// Breadcrumb entry
#[derive(Debug, Clone, Serialize)]
pub struct Crumb {
    pub label: String,
    pub url: Option<String>,
}

/// Services index page
#[derive(Debug, Clone, Serialize)]
pub struct IndexPage {
    pub title: &'static str,
    pub table: TableView,
}

/// Service or field detail page
#[derive(Debug, Clone, Serialize)]
pub struct DetailPage {
    pub title: String,
    pub breadcrumb: Vec<Crumb>,
    pub tabs: TabGroupView,
}

/// Query of a detail page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TabQuery {
    /// Slug of the tab to activate
    pub tab: Option<String>,
}
