//! HTTP request handlers

pub mod field;
pub mod mapping;
pub mod service;

use crate::dto::{ApiResponse, BatchFailureResponse, BatchRequest, InvalidFormResponse};
use crate::forms::{submit, FormData, FormErrors, SelfHandlingForm, Submission};
use crate::tables::BatchAction;
use crate::urls::{Route, Urls};
use actix_web::{http::header, web, HttpResponse};
use hashmap_core::error::REMOTE_FAILURE_NOTICE;
use hashmap_core::{AppError, HashmapApi};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, warn};

/// Shared state of the panel handlers
pub struct PanelState {
    pub api: Arc<dyn HashmapApi>,
    pub urls: Urls,
}

impl PanelState {
    pub fn new(api: Arc<dyn HashmapApi>, urls: Urls) -> Self {
        Self { api, urls }
    }

    /// URL of a route, falling back to the index when the id is unknown
    pub(crate) fn page_url(&self, route: Route, arg: Option<&str>) -> String {
        self.urls
            .reverse(route, arg)
            .unwrap_or_else(|| self.urls.index())
    }
}

/// Configure panel routes under `urls.base_path()`
///
/// Handlers expect a `web::Data<PanelState>` in the app data.
pub fn configure(cfg: &mut web::ServiceConfig, urls: &Urls) {
    cfg.service(
        web::scope(urls.base_path())
            .service(
                web::resource([Route::Index.pattern(), "/"]).route(web::get().to(service::index)),
            )
            // Services
            .service(
                web::resource(Route::ServiceCreate.pattern())
                    .route(web::get().to(service::create_service_form))
                    .route(web::post().to(service::create_service)),
            )
            .route(Route::ServiceDelete.pattern(), web::post().to(service::delete_services))
            .route(Route::Service.pattern(), web::get().to(service::service_detail))
            // Fields
            .service(
                web::resource(Route::FieldCreate.pattern())
                    .route(web::get().to(field::create_field_form))
                    .route(web::post().to(field::create_field)),
            )
            .route(Route::FieldDelete.pattern(), web::post().to(field::delete_fields))
            .route(Route::Field.pattern(), web::get().to(field::field_detail))
            // Mappings
            .service(
                web::resource(Route::ServiceMappingCreate.pattern())
                    .route(web::get().to(mapping::create_service_mapping_form))
                    .route(web::post().to(mapping::create_service_mapping)),
            )
            .service(
                web::resource(Route::ServiceMappingEdit.pattern())
                    .route(web::get().to(mapping::edit_service_mapping_form))
                    .route(web::post().to(mapping::edit_service_mapping)),
            )
            .service(
                web::resource(Route::FieldMappingCreate.pattern())
                    .route(web::get().to(mapping::create_field_mapping_form))
                    .route(web::post().to(mapping::create_field_mapping)),
            )
            .service(
                web::resource(Route::FieldMappingEdit.pattern())
                    .route(web::get().to(mapping::edit_field_mapping_form))
                    .route(web::post().to(mapping::edit_field_mapping)),
            )
            .route(Route::MappingDelete.pattern(), web::post().to(mapping::delete_mappings)),
    );
}

fn see_other<T: Serialize>(location: &str, body: &T) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .json(body)
}

/// Form view with its initial values
pub(crate) fn show_form<F: SelfHandlingForm>(form: &F, action: String) -> HttpResponse {
    HttpResponse::Ok().json(form.spec().view(action, form.initial(), None, &FormErrors::new()))
}

/// Validates and handles a submission
///
/// Valid data redirects to the page built by `redirect`; invalid data
/// re-renders the form with its errors and performs no API call.
pub(crate) async fn process_form<F, R>(
    state: &PanelState,
    form: &F,
    action: String,
    data: &FormData,
    redirect: R,
) -> Result<HttpResponse, AppError>
where
    F: SelfHandlingForm,
    R: FnOnce(&F::Output) -> String,
{
    match submit(form, state.api.as_ref(), data).await {
        Ok(Submission::Handled(output)) => {
            let location = redirect(&output);
            let message = form.success_message(&output);
            Ok(see_other(&location, &ApiResponse::with_message(output, message)))
        }
        Ok(Submission::Invalid(errors)) => {
            warn!(
                form = form.spec().name,
                fields = ?errors.keys().collect::<Vec<_>>(),
                "Form validation failed"
            );
            let view = form.spec().view(action, form.initial(), Some(data), &errors);
            Ok(HttpResponse::BadRequest().json(InvalidFormResponse::new(view)))
        }
        Err(e) => {
            error!(form = form.spec().name, error = %e, "Form submission failed");
            Err(e)
        }
    }
}

/// Runs a batch action over the posted selection
pub(crate) async fn run_batch(
    state: &PanelState,
    action: &BatchAction,
    req: &BatchRequest,
    redirect: String,
) -> HttpResponse {
    let outcome = action.execute(state.api.as_ref(), &req.object_ids).await;

    if outcome.is_complete() {
        let body = ApiResponse {
            message: outcome.success_message.clone(),
            data: outcome,
        };
        see_other(&redirect, &body)
    } else {
        HttpResponse::BadGateway().json(BatchFailureResponse {
            error: "remote_error",
            message: outcome
                .error_message
                .clone()
                .unwrap_or_else(|| REMOTE_FAILURE_NOTICE.to_string()),
            data: outcome,
        })
    }
}
