//! Detail page tab groups
//!
//! A tab wraps one table and fetches its rows when rendered. Preloaded tabs
//! are always fetched, the others only once activated.

use crate::tables::{
    field_mappings_table, fields_table, service_mappings_table, PanelContext, TableView,
};
use crate::urls::Urls;
use futures::future::try_join_all;
use hashmap_core::traits::MappingParent;
use hashmap_core::{AppResult, HashmapApi};
use serde::Serialize;
use tracing::{debug, instrument};

/// Where a tab reads its rows from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabSource {
    Fields { service_id: String },
    ServiceMappings { service_id: String },
    FieldMappings { field_id: String },
}

impl TabSource {
    async fn load(&self, api: &dyn HashmapApi, urls: &Urls) -> AppResult<TableView> {
        match self {
            TabSource::Fields { service_id } => {
                let rows = api.list_fields(service_id).await?;
                Ok(fields_table(PanelContext::service(service_id)).render(&rows, urls))
            }
            TabSource::ServiceMappings { service_id } => {
                let rows = api.list_mappings(MappingParent::Service(service_id)).await?;
                Ok(service_mappings_table(PanelContext::service(service_id)).render(&rows, urls))
            }
            TabSource::FieldMappings { field_id } => {
                let rows = api.list_mappings(MappingParent::Field(field_id)).await?;
                Ok(field_mappings_table(PanelContext::field(field_id)).render(&rows, urls))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub name: &'static str,
    pub slug: &'static str,
    pub preload: bool,
    pub source: TabSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    pub slug: &'static str,
    pub sticky: bool,
    pub tabs: Vec<Tab>,
}

impl TabGroup {
    /// Fields and mappings of a service
    pub fn service(service_id: &str) -> Self {
        Self {
            slug: "services_tabs",
            sticky: true,
            tabs: vec![
                Tab {
                    name: "Fields",
                    slug: "hashmap_fields",
                    preload: true,
                    source: TabSource::Fields {
                        service_id: service_id.to_string(),
                    },
                },
                Tab {
                    name: "Mappings",
                    slug: "hashmap_mappings",
                    preload: true,
                    source: TabSource::ServiceMappings {
                        service_id: service_id.to_string(),
                    },
                },
            ],
        }
    }

    /// Mappings of a field
    pub fn field(field_id: &str) -> Self {
        Self {
            slug: "fields_tabs",
            sticky: true,
            tabs: vec![Tab {
                name: "Mappings",
                slug: "hashmap_field_mappings",
                preload: true,
                source: TabSource::FieldMappings {
                    field_id: field_id.to_string(),
                },
            }],
        }
    }

    /// Slug of the active tab; unknown slugs fall back to the first tab
    pub fn active_slug(&self, requested: Option<&str>) -> Option<&'static str> {
        requested
            .and_then(|slug| self.tabs.iter().find(|t| t.slug == slug))
            .or_else(|| self.tabs.first())
            .map(|t| t.slug)
    }

    /// Fetches every tab that needs loading, concurrently
    ///
    /// The first failing fetch fails the whole render.
    #[instrument(skip(self, api, urls), fields(group = self.slug))]
    pub async fn render(
        &self,
        api: &dyn HashmapApi,
        urls: &Urls,
        requested: Option<&str>,
    ) -> AppResult<TabGroupView> {
        let active = self.active_slug(requested);

        let loads = self.tabs.iter().map(|tab| {
            let is_active = Some(tab.slug) == active;
            async move {
                let table = if tab.preload || is_active {
                    debug!(tab = tab.slug, "Loading tab");
                    Some(tab.source.load(api, urls).await?)
                } else {
                    None
                };

                Ok::<_, hashmap_core::AppError>(TabView {
                    name: tab.name,
                    slug: tab.slug,
                    active: is_active,
                    table,
                })
            }
        });

        Ok(TabGroupView {
            slug: self.slug,
            sticky: self.sticky,
            tabs: try_join_all(loads).await?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TabGroupView {
    pub slug: &'static str,
    pub sticky: bool,
    pub tabs: Vec<TabView>,
}

impl TabGroupView {
    pub fn tab(&self, slug: &str) -> Option<&TabView> {
        self.tabs.iter().find(|t| t.slug == slug)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TabView {
    pub name: &'static str,
    pub slug: &'static str,
    pub active: bool,
    /// Absent for a tab that was not loaded
    pub table: Option<TableView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_tabs_layout() {
        let group = TabGroup::service("s1");
        let slugs: Vec<&str> = group.tabs.iter().map(|t| t.slug).collect();

        assert_eq!(group.slug, "services_tabs");
        assert!(group.sticky);
        assert_eq!(slugs, vec!["hashmap_fields", "hashmap_mappings"]);
        assert!(group.tabs.iter().all(|t| t.preload));
    }

    #[test]
    fn test_active_slug() {
        let group = TabGroup::service("s1");
        assert_eq!(group.active_slug(None), Some("hashmap_fields"));
        assert_eq!(group.active_slug(Some("hashmap_mappings")), Some("hashmap_mappings"));
        assert_eq!(group.active_slug(Some("nope")), Some("hashmap_fields"));
    }
}
