//! Table actions
//!
//! An action either navigates to another panel page or mutates a batch of
//! selected rows. Both kinds are plain records dispatched by variant.

use super::{ActionView, PanelContext};
use crate::urls::{Route, Urls};
use hashmap_core::{AppResult, HashmapApi};
use serde::Serialize;
use tracing::{error, info, instrument};

#[derive(Debug, Clone)]
pub enum Action {
    Navigate(LinkAction),
    BatchMutate(BatchAction),
}

impl Action {
    pub(crate) fn view(
        &self,
        urls: &Urls,
        context: &PanelContext,
        row_id: Option<&str>,
    ) -> ActionView {
        match self {
            Action::Navigate(a) => ActionView {
                name: a.name,
                verbose_name: a.verbose_name,
                icon: a.icon,
                kind: "link",
                url: a.url(urls, context, row_id),
            },
            Action::BatchMutate(a) => ActionView {
                name: a.name,
                verbose_name: a.verbose_name,
                icon: a.icon,
                kind: "batch",
                url: urls.reverse(a.kind.route(), None),
            },
        }
    }
}

/// Where a link action takes its route argument from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlArg {
    None,
    /// Id of the row the action is shown on
    Row,
    /// Service of the page context
    Service,
    /// Field of the page context
    Field,
}

#[derive(Debug, Clone)]
pub struct LinkAction {
    pub name: &'static str,
    pub verbose_name: &'static str,
    pub icon: &'static str,
    pub route: Route,
    pub arg: UrlArg,
}

impl LinkAction {
    /// Resolves the target URL, `None` when the needed id is unknown
    pub fn url(&self, urls: &Urls, context: &PanelContext, row_id: Option<&str>) -> Option<String> {
        let arg = match self.arg {
            UrlArg::None => None,
            UrlArg::Row => row_id,
            UrlArg::Service => context.service_id.as_deref(),
            UrlArg::Field => context.field_id.as_deref(),
        };
        urls.reverse(self.route, arg)
    }
}

/// Entity a batch delete removes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteKind {
    Service,
    Field,
    Mapping,
}

impl DeleteKind {
    /// Route the selection is posted to
    pub fn route(&self) -> Route {
        match self {
            DeleteKind::Service => Route::ServiceDelete,
            DeleteKind::Field => Route::FieldDelete,
            DeleteKind::Mapping => Route::MappingDelete,
        }
    }

    async fn delete(&self, api: &dyn HashmapApi, id: &str) -> AppResult<()> {
        match self {
            DeleteKind::Service => api.delete_service(id).await,
            DeleteKind::Field => api.delete_field(id).await,
            DeleteKind::Mapping => api.delete_mapping(id).await,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BatchAction {
    pub name: &'static str,
    pub verbose_name: &'static str,
    pub action_present: &'static str,
    pub action_past: &'static str,
    pub data_type_singular: &'static str,
    pub data_type_plural: &'static str,
    pub icon: &'static str,
    pub kind: DeleteKind,
}

impl BatchAction {
    /// Delete action for one entity kind
    pub const fn delete(
        name: &'static str,
        verbose_name: &'static str,
        singular: &'static str,
        plural: &'static str,
        kind: DeleteKind,
    ) -> Self {
        Self {
            name,
            verbose_name,
            action_present: "Delete",
            action_past: "Deleted",
            data_type_singular: singular,
            data_type_plural: plural,
            icon: "remove",
            kind,
        }
    }

    fn data_type(&self, count: usize) -> &'static str {
        if count == 1 {
            self.data_type_singular
        } else {
            self.data_type_plural
        }
    }

    /// Runs the action once per selected id, in order
    ///
    /// A failing id does not stop the remaining ones.
    #[instrument(skip(self, api), fields(action = self.name))]
    pub async fn execute(&self, api: &dyn HashmapApi, object_ids: &[String]) -> BatchOutcome {
        let mut succeeded = Vec::new();
        let mut failed = Vec::new();

        for id in object_ids {
            match self.kind.delete(api, id).await {
                Ok(()) => succeeded.push(id.clone()),
                Err(e) => {
                    error!(id = %id, error = %e, "Batch action failed");
                    failed.push(id.clone());
                }
            }
        }

        let success_message = (!succeeded.is_empty()).then(|| {
            format!(
                "{} {}: {}",
                self.action_past,
                self.data_type(succeeded.len()),
                succeeded.join(", ")
            )
        });
        let error_message = (!failed.is_empty()).then(|| {
            format!(
                "Unable to {} {}: {}",
                self.action_present.to_lowercase(),
                self.data_type(failed.len()),
                failed.join(", ")
            )
        });

        info!(
            succeeded = succeeded.len(),
            failed = failed.len(),
            "Batch action finished"
        );

        BatchOutcome {
            succeeded,
            failed,
            success_message,
            error_message,
        }
    }
}

/// Per-id result of a batch action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub succeeded: Vec<String>,
    pub failed: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
