//! Mapping handlers
//!
//! Service and field mappings share every handler body; the public handlers
//! only pick the target.

use super::{process_form, run_batch, show_form, PanelState};
use crate::dto::BatchRequest;
use crate::forms::{FormData, MappingForm, MappingTarget};
use crate::tables::mappings;
use crate::urls::Route;
use actix_web::{web, HttpResponse};
use hashmap_core::models::Mapping;
use hashmap_core::AppError;
use tracing::instrument;

fn create_route(target: MappingTarget) -> Route {
    match target {
        MappingTarget::Service => Route::ServiceMappingCreate,
        MappingTarget::Field => Route::FieldMappingCreate,
    }
}

fn edit_route(target: MappingTarget) -> Route {
    match target {
        MappingTarget::Service => Route::ServiceMappingEdit,
        MappingTarget::Field => Route::FieldMappingEdit,
    }
}

/// Detail page of the mapping's parent
fn parent_page(state: &PanelState, target: MappingTarget, mapping: &Mapping) -> String {
    match target {
        MappingTarget::Service => state.page_url(Route::Service, mapping.service_id.as_deref()),
        MappingTarget::Field => state.page_url(Route::Field, mapping.field_id.as_deref()),
    }
}

async fn create_form(state: &PanelState, target: MappingTarget, parent_id: &str) -> HttpResponse {
    show_form(
        &MappingForm::create(target, parent_id),
        state.page_url(create_route(target), Some(parent_id)),
    )
}

async fn create(
    state: &PanelState,
    target: MappingTarget,
    parent_id: &str,
    data: &FormData,
) -> Result<HttpResponse, AppError> {
    let action = state.page_url(create_route(target), Some(parent_id));
    let form = MappingForm::create(target, parent_id);

    process_form(state, &form, action, data, |mapping| parent_page(state, target, mapping)).await
}

async fn edit_form(
    state: &PanelState,
    target: MappingTarget,
    mapping_id: &str,
) -> Result<HttpResponse, AppError> {
    let mapping = state.api.get_mapping(mapping_id).await?;

    Ok(show_form(
        &MappingForm::edit(target, mapping_id).with_current(&mapping),
        state.page_url(edit_route(target), Some(mapping_id)),
    ))
}

async fn edit(
    state: &PanelState,
    target: MappingTarget,
    mapping_id: &str,
    data: &FormData,
) -> Result<HttpResponse, AppError> {
    let action = state.page_url(edit_route(target), Some(mapping_id));
    let form = MappingForm::edit(target, mapping_id);

    process_form(state, &form, action, data, |mapping| parent_page(state, target, mapping)).await
}

/// GET {base}/services/{service_id}/mappings/create
#[instrument(skip(state))]
pub async fn create_service_mapping_form(
    state: web::Data<PanelState>,
    path: web::Path<String>,
) -> HttpResponse {
    create_form(&state, MappingTarget::Service, &path).await
}

/// POST {base}/services/{service_id}/mappings/create
#[instrument(skip(state, form))]
pub async fn create_service_mapping(
    state: web::Data<PanelState>,
    path: web::Path<String>,
    form: web::Form<FormData>,
) -> Result<HttpResponse, AppError> {
    create(&state, MappingTarget::Service, &path, &form).await
}

/// GET {base}/service_mappings/{mapping_id}/edit
#[instrument(skip(state))]
pub async fn edit_service_mapping_form(
    state: web::Data<PanelState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    edit_form(&state, MappingTarget::Service, &path).await
}

/// POST {base}/service_mappings/{mapping_id}/edit
#[instrument(skip(state, form))]
pub async fn edit_service_mapping(
    state: web::Data<PanelState>,
    path: web::Path<String>,
    form: web::Form<FormData>,
) -> Result<HttpResponse, AppError> {
    edit(&state, MappingTarget::Service, &path, &form).await
}

/// GET {base}/fields/{field_id}/mappings/create
#[instrument(skip(state))]
pub async fn create_field_mapping_form(
    state: web::Data<PanelState>,
    path: web::Path<String>,
) -> HttpResponse {
    create_form(&state, MappingTarget::Field, &path).await
}

/// POST {base}/fields/{field_id}/mappings/create
#[instrument(skip(state, form))]
pub async fn create_field_mapping(
    state: web::Data<PanelState>,
    path: web::Path<String>,
    form: web::Form<FormData>,
) -> Result<HttpResponse, AppError> {
    create(&state, MappingTarget::Field, &path, &form).await
}

/// GET {base}/field_mappings/{mapping_id}/edit
#[instrument(skip(state))]
pub async fn edit_field_mapping_form(
    state: web::Data<PanelState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    edit_form(&state, MappingTarget::Field, &path).await
}

/// POST {base}/field_mappings/{mapping_id}/edit
#[instrument(skip(state, form))]
pub async fn edit_field_mapping(
    state: web::Data<PanelState>,
    path: web::Path<String>,
    form: web::Form<FormData>,
) -> Result<HttpResponse, AppError> {
    edit(&state, MappingTarget::Field, &path, &form).await
}

/// POST {base}/mappings/delete
///
/// Returns to the field page when the selection came from one, otherwise to
/// the service page.
#[instrument(skip(state, req))]
pub async fn delete_mappings(
    state: web::Data<PanelState>,
    req: web::Json<BatchRequest>,
) -> HttpResponse {
    let redirect = match (&req.context.field_id, &req.context.service_id) {
        (Some(field_id), _) => state.page_url(Route::Field, Some(field_id)),
        (None, service_id) => state.page_url(Route::Service, service_id.as_deref()),
    };
    run_batch(&state, &mappings::delete_mapping(), &req, redirect).await
}
