//! Field handlers

use super::{process_form, run_batch, show_form, PanelState};
use crate::dto::{BatchRequest, Crumb, DetailPage, TabQuery};
use crate::forms::{CreateFieldForm, FormData};
use crate::tables::fields;
use crate::tabs::TabGroup;
use crate::urls::Route;
use actix_web::{web, HttpResponse};
use futures::try_join;
use hashmap_core::AppError;
use tracing::instrument;

/// Field detail with its mappings tab
///
/// GET {base}/fields/{field_id}
#[instrument(skip(state))]
pub async fn field_detail(
    state: web::Data<PanelState>,
    path: web::Path<String>,
    query: web::Query<TabQuery>,
) -> Result<HttpResponse, AppError> {
    let field_id = path.into_inner();
    let group = TabGroup::field(&field_id);

    let parents = async {
        let field = state.api.get_field(&field_id).await?;
        let service = state.api.get_service(&field.service_id).await?;
        Ok::<_, AppError>((field, service))
    };

    let ((field, service), tabs) = try_join!(
        parents,
        group.render(state.api.as_ref(), &state.urls, query.tab.as_deref()),
    )?;

    Ok(HttpResponse::Ok().json(DetailPage {
        title: format!("Field: {}", field.name),
        breadcrumb: vec![
            Crumb {
                label: "Hashmap".to_string(),
                url: Some(state.urls.index()),
            },
            Crumb {
                label: service.name,
                url: state.urls.reverse(Route::Service, Some(&service.service_id)),
            },
            Crumb {
                label: field.name,
                url: None,
            },
        ],
        tabs,
    }))
}

/// GET {base}/services/{service_id}/fields/create
#[instrument(skip(state))]
pub async fn create_field_form(
    state: web::Data<PanelState>,
    path: web::Path<String>,
) -> HttpResponse {
    let service_id = path.into_inner();
    show_form(
        &CreateFieldForm::new(&service_id),
        state.page_url(Route::FieldCreate, Some(&service_id)),
    )
}

/// POST {base}/services/{service_id}/fields/create
#[instrument(skip(state, form))]
pub async fn create_field(
    state: web::Data<PanelState>,
    path: web::Path<String>,
    form: web::Form<FormData>,
) -> Result<HttpResponse, AppError> {
    let service_id = path.into_inner();
    let action = state.page_url(Route::FieldCreate, Some(&service_id));

    process_form(
        &state,
        &CreateFieldForm::new(&service_id),
        action,
        &form,
        |field| state.page_url(Route::Service, Some(&field.service_id)),
    )
    .await
}

/// POST {base}/fields/delete
#[instrument(skip(state, req))]
pub async fn delete_fields(
    state: web::Data<PanelState>,
    req: web::Json<BatchRequest>,
) -> HttpResponse {
    let redirect = state.page_url(Route::Service, req.context.service_id.as_deref());
    run_batch(&state, &fields::delete_field(), &req, redirect).await
}
