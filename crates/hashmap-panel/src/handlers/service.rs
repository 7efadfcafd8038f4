//! Service handlers
//!
//! Services index, service detail tabs, creation form and batch delete.

use super::{process_form, run_batch, show_form, PanelState};
use crate::dto::{BatchRequest, Crumb, DetailPage, IndexPage, TabQuery};
use crate::forms::{CreateServiceForm, FormData};
use crate::tables::{services, services_table};
use crate::tabs::TabGroup;
use crate::urls::Route;
use actix_web::{web, HttpResponse};
use futures::try_join;
use hashmap_core::AppError;
use tracing::{debug, instrument};

/// Services index
///
/// GET {base}/
#[instrument(skip(state))]
pub async fn index(state: web::Data<PanelState>) -> Result<HttpResponse, AppError> {
    let services = state.api.list_services().await?;
    debug!(count = services.len(), "Listing services");

    Ok(HttpResponse::Ok().json(IndexPage {
        title: "Hashmap",
        table: services_table().render(&services, &state.urls),
    }))
}

/// Service detail with its fields and mappings tabs
///
/// GET {base}/services/{service_id}
#[instrument(skip(state))]
pub async fn service_detail(
    state: web::Data<PanelState>,
    path: web::Path<String>,
    query: web::Query<TabQuery>,
) -> Result<HttpResponse, AppError> {
    let service_id = path.into_inner();
    let group = TabGroup::service(&service_id);

    let (service, tabs) = try_join!(
        state.api.get_service(&service_id),
        group.render(state.api.as_ref(), &state.urls, query.tab.as_deref()),
    )?;

    Ok(HttpResponse::Ok().json(DetailPage {
        title: format!("Service: {}", service.name),
        breadcrumb: vec![
            Crumb {
                label: "Hashmap".to_string(),
                url: Some(state.urls.index()),
            },
            Crumb {
                label: service.name,
                url: None,
            },
        ],
        tabs,
    }))
}

/// GET {base}/services/create
#[instrument(skip(state))]
pub async fn create_service_form(state: web::Data<PanelState>) -> HttpResponse {
    show_form(&CreateServiceForm::new(), state.page_url(Route::ServiceCreate, None))
}

/// POST {base}/services/create
#[instrument(skip(state, form))]
pub async fn create_service(
    state: web::Data<PanelState>,
    form: web::Form<FormData>,
) -> Result<HttpResponse, AppError> {
    let action = state.page_url(Route::ServiceCreate, None);
    let index = state.urls.index();

    process_form(&state, &CreateServiceForm::new(), action, &form, |_| index).await
}

/// POST {base}/services/delete
#[instrument(skip(state, req))]
pub async fn delete_services(
    state: web::Data<PanelState>,
    req: web::Json<BatchRequest>,
) -> HttpResponse {
    let redirect = state.urls.index();
    run_batch(&state, &services::delete_service(), &req, redirect).await
}
