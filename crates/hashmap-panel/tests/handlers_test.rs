//! HTTP tests for the panel handlers

mod support;

use actix_web::http::{header, StatusCode};
use actix_web::{test, App};
use hashmap_core::models::{MappingArgs, MappingType};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::sync::Arc;
use support::{Call, RecordingApi, BASE};

macro_rules! panel {
    ($api:expr) => {
        test::init_service(
            App::new()
                .app_data(support::state($api.clone()))
                .configure(|cfg| hashmap_panel::configure(cfg, &support::urls())),
        )
        .await
    };
}

fn location<B>(resp: &actix_web::dev::ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[actix_rt::test]
async fn test_index_lists_services() {
    let api = Arc::new(RecordingApi::seeded());
    let app = panel!(api);

    let req = test::TestRequest::get().uri(&format!("{}/", BASE)).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["title"], "Hashmap");
    assert_eq!(body["table"]["name"], "services");
    assert_eq!(body["table"]["rows"][0]["id"], "s1");
    assert_eq!(body["table"]["rows"][0]["cells"][0]["value"], "compute");
    assert_eq!(
        body["table"]["rows"][1]["cells"][0]["link"],
        format!("{}/services/s2", BASE)
    );
    assert_eq!(api.calls(), vec![Call::ListServices]);
}

#[actix_rt::test]
async fn test_service_detail_preloads_both_tabs() {
    let api = Arc::new(RecordingApi::seeded());
    let app = panel!(api);

    let req = test::TestRequest::get()
        .uri(&format!("{}/services/s1", BASE))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["title"], "Service: compute");
    assert_eq!(body["tabs"]["slug"], "services_tabs");

    let fields_tab = &body["tabs"]["tabs"][0];
    assert_eq!(fields_tab["slug"], "hashmap_fields");
    assert_eq!(fields_tab["active"], true);
    assert_eq!(fields_tab["table"]["multi_select"], false);
    let field_ids: Vec<&str> = fields_tab["table"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(field_ids, vec!["f2", "f1"]);

    let mappings_tab = &body["tabs"]["tabs"][1];
    assert_eq!(mappings_tab["slug"], "hashmap_mappings");
    assert_eq!(mappings_tab["table"]["rows"][0]["id"], "m9");
    assert_eq!(mappings_tab["table"]["rows"][0]["cells"][2]["value"], "g1");

    let calls = api.calls();
    assert!(calls.contains(&Call::ListFields("s1".to_string())));
    assert!(calls.contains(&Call::ListMappings("service_id", "s1".to_string())));
}

#[actix_rt::test]
async fn test_field_detail_lists_field_mappings() {
    let api = Arc::new(RecordingApi::seeded());
    let app = panel!(api);

    let req = test::TestRequest::get()
        .uri(&format!("{}/fields/f2", BASE))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["title"], "Field: flavor");
    assert_eq!(body["breadcrumb"][1]["label"], "compute");
    assert_eq!(body["breadcrumb"][1]["url"], format!("{}/services/s1", BASE));

    let tab = &body["tabs"]["tabs"][0];
    assert_eq!(tab["slug"], "hashmap_field_mappings");
    assert_eq!(tab["table"]["rows"][0]["cells"][0]["value"], "m1.small");
    assert_eq!(tab["table"]["rows"][0]["cells"][3]["value"], "-");
    assert!(api
        .calls()
        .contains(&Call::ListMappings("field_id", "f2".to_string())));
}

#[actix_rt::test]
async fn test_create_service_redirects_to_index() {
    let api = Arc::new(RecordingApi::new());
    let app = panel!(api);

    let req = test::TestRequest::post()
        .uri(&format!("{}/services/create", BASE))
        .set_form([("name", "compute")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), format!("{}/", BASE));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], "compute");
    assert_eq!(body["message"], "Created service \"compute\".");
    assert_eq!(api.calls(), vec![Call::CreateService("compute".to_string())]);
}

#[actix_rt::test]
async fn test_invalid_form_is_rerendered() {
    let api = Arc::new(RecordingApi::new());
    let app = panel!(api);

    let req = test::TestRequest::post()
        .uri(&format!("{}/services/s1/mappings/create", BASE))
        .set_form([("cost", "free"), ("type", "flat")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["error"], "validation_error");
    let fields = body["form"]["fields"].as_array().unwrap();
    let cost = fields.iter().find(|f| f["name"] == "cost").unwrap();
    assert_eq!(cost["value"], "free");
    assert_eq!(cost["error"], "Enter a number.");
    let service_id = fields.iter().find(|f| f["name"] == "service_id").unwrap();
    assert_eq!(service_id["value"], "s1");
    assert_eq!(service_id["readonly"], true);

    assert!(api.calls().is_empty());
}

#[actix_rt::test]
async fn test_create_field_form_prefills_service() {
    let api = Arc::new(RecordingApi::new());
    let app = panel!(api);

    let req = test::TestRequest::get()
        .uri(&format!("{}/services/s1/fields/create", BASE))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["name"], "create_field");
    assert_eq!(body["action"], format!("{}/services/s1/fields/create", BASE));
    assert_eq!(body["fields"][1]["name"], "service_id");
    assert_eq!(body["fields"][1]["value"], "s1");
    assert!(api.calls().is_empty());
}

#[actix_rt::test]
async fn test_create_field_mapping_redirects_to_field() {
    let api = Arc::new(RecordingApi::new());
    let app = panel!(api);

    let req = test::TestRequest::post()
        .uri(&format!("{}/fields/f1/mappings/create", BASE))
        .set_form([
            ("value", "m1.small"),
            ("cost", "1.5"),
            ("type", "flat"),
            ("group_id", ""),
            ("field_id", "f1"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), format!("{}/fields/f1", BASE));
    assert_eq!(
        api.calls(),
        vec![Call::CreateMapping(MappingArgs {
            value: Some("m1.small".to_string()),
            cost: Some(dec!(1.5)),
            mapping_type: Some(MappingType::Flat),
            field_id: Some("f1".to_string()),
            ..Default::default()
        })]
    );
}

#[actix_rt::test]
async fn test_edit_form_is_prefilled_from_mapping() {
    let api = Arc::new(RecordingApi::seeded());
    let app = panel!(api);

    let req = test::TestRequest::get()
        .uri(&format!("{}/service_mappings/m9/edit", BASE))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let value_of = |name: &str| {
        body["fields"]
            .as_array()
            .unwrap()
            .iter()
            .find(|f| f["name"] == name)
            .map(|f| f["value"].clone())
            .unwrap()
    };
    assert_eq!(value_of("cost"), json!("2"));
    assert_eq!(value_of("type"), json!("flat"));
    assert_eq!(value_of("group_id"), json!("g1"));
    assert_eq!(value_of("mapping_id"), json!("m9"));
    assert_eq!(api.calls(), vec![Call::GetMapping("m9".to_string())]);
}

#[actix_rt::test]
async fn test_edit_service_mapping_updates_context_mapping() {
    let api = Arc::new(RecordingApi::seeded());
    let app = panel!(api);

    let req = test::TestRequest::post()
        .uri(&format!("{}/service_mappings/m9/edit", BASE))
        .set_form([("cost", "3"), ("type", "rate"), ("mapping_id", "m1")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), format!("{}/services/s1", BASE));
    assert_eq!(
        api.calls(),
        vec![Call::UpdateMapping(MappingArgs {
            mapping_id: Some("m9".to_string()),
            cost: Some(dec!(3)),
            mapping_type: Some(MappingType::Rate),
            ..Default::default()
        })]
    );
}

#[actix_rt::test]
async fn test_invalid_edit_keeps_parent_id() {
    let api = Arc::new(RecordingApi::seeded());
    let app = panel!(api);

    let req = test::TestRequest::post()
        .uri(&format!("{}/service_mappings/m9/edit", BASE))
        .set_form([
            ("cost", "two"),
            ("type", "flat"),
            ("service_id", "s1"),
            ("mapping_id", "m9"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;

    let fields = body["form"]["fields"].as_array().unwrap();
    let field = |name: &str| fields.iter().find(|f| f["name"] == name).unwrap().clone();
    assert_eq!(field("cost")["error"], "Enter a number.");
    assert_eq!(field("service_id")["value"], "s1");
    assert_eq!(field("service_id")["readonly"], true);
    assert_eq!(field("mapping_id")["value"], "m9");

    assert!(api.calls().is_empty());
}

#[actix_rt::test]
async fn test_batch_delete_one_call_per_id() {
    let api = Arc::new(RecordingApi::seeded());
    let app = panel!(api);

    let req = test::TestRequest::post()
        .uri(&format!("{}/services/delete", BASE))
        .set_json(json!({"object_ids": ["s1", "s2"]}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), format!("{}/", BASE));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Deleted Services: s1, s2");
    assert_eq!(
        api.calls(),
        vec![
            Call::DeleteService("s1".to_string()),
            Call::DeleteService("s2".to_string()),
        ]
    );
}

#[actix_rt::test]
async fn test_batch_delete_empty_selection() {
    let api = Arc::new(RecordingApi::seeded());
    let app = panel!(api);

    let req = test::TestRequest::post()
        .uri(&format!("{}/mappings/delete", BASE))
        .set_json(json!({"object_ids": [], "context": {"field_id": "f2"}}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), format!("{}/fields/f2", BASE));
    assert!(api.calls().is_empty());
}

#[actix_rt::test]
async fn test_batch_delete_partial_failure() {
    let api = Arc::new(RecordingApi::seeded().failing_on("f1"));
    let app = panel!(api);

    let req = test::TestRequest::post()
        .uri(&format!("{}/fields/delete", BASE))
        .set_json(json!({"object_ids": ["f1", "f2"], "context": {"service_id": "s1"}}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "remote_error");
    assert_eq!(body["message"], "Unable to delete Field: f1");
    assert_eq!(body["data"]["succeeded"], json!(["f2"]));
    assert_eq!(body["data"]["failed"], json!(["f1"]));
    assert_eq!(body["data"]["success_message"], "Deleted Field: f2");
    assert_eq!(api.mutations().len(), 2);
}

#[actix_rt::test]
async fn test_remote_failure_shows_generic_notice() {
    let api = Arc::new(RecordingApi::seeded().failing_on("s1"));
    let app = panel!(api);

    let req = test::TestRequest::get()
        .uri(&format!("{}/services/s1", BASE))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "error": "remote_error",
            "message": "Unable to complete the request.",
            "status": 502
        })
    );
}
