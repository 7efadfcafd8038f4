//! Services table

use super::{Action, BatchAction, Column, DeleteKind, LinkAction, PanelContext, Table, UrlArg};
use crate::urls::Route;
use hashmap_core::models::Service;

pub fn create_service() -> Action {
    Action::Navigate(LinkAction {
        name: "createservice",
        verbose_name: "Create new Service",
        icon: "create",
        route: Route::ServiceCreate,
        arg: UrlArg::None,
    })
}

pub fn delete_service() -> BatchAction {
    BatchAction::delete(
        "deleteservice",
        "Delete Service",
        "Service",
        "Services",
        DeleteKind::Service,
    )
}

/// Lists the available services; a name links to the service tabs
pub fn services_table() -> Table<Service> {
    Table {
        name: "services",
        verbose_name: "Services",
        columns: vec![
            Column::new("name", "Name", |s: &Service| Some(s.name.clone())).link(Route::Service),
        ],
        row_actions: vec![Action::BatchMutate(delete_service())],
        table_actions: vec![create_service()],
        multi_select: true,
        context: PanelContext::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::urls::Urls;

    #[test]
    fn test_render_links_names() {
        let urls = Urls::new("/admin/hashmap");
        let rows = vec![
            Service {
                service_id: "s1".to_string(),
                name: "compute".to_string(),
            },
            Service {
                service_id: "s2".to_string(),
                name: "image".to_string(),
            },
        ];

        let view = services_table().render(&rows, &urls);

        assert_eq!(view.row_ids(), vec!["s1", "s2"]);
        assert_eq!(view.rows[0].cells[0].value, "compute");
        assert_eq!(
            view.rows[1].cells[0].link.as_deref(),
            Some("/admin/hashmap/services/s2")
        );
        assert_eq!(view.rows[0].actions[0].name, "deleteservice");
        assert_eq!(view.actions[0].url.as_deref(), Some("/admin/hashmap/services/create"));
    }
}
