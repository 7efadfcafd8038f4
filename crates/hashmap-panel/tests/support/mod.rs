//! In-process recording fake of the rating API

#![allow(dead_code)]

use actix_web::web;
use async_trait::async_trait;
use hashmap_core::models::{Field, Mapping, MappingArgs, MappingType, Service};
use hashmap_core::traits::{HashmapApi, MappingParent};
use hashmap_core::{AppError, AppResult};
use hashmap_panel::{PanelState, Urls};
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

pub const BASE: &str = "/admin/hashmap";

/// One recorded API call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListServices,
    GetService(String),
    CreateService(String),
    DeleteService(String),
    ListFields(String),
    GetField(String),
    CreateField { name: String, service_id: String },
    DeleteField(String),
    ListMappings(&'static str, String),
    GetMapping(String),
    CreateMapping(MappingArgs),
    UpdateMapping(MappingArgs),
    DeleteMapping(String),
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Call::ListServices
                | Call::GetService(_)
                | Call::ListFields(_)
                | Call::GetField(_)
                | Call::ListMappings(..)
                | Call::GetMapping(_)
        )
    }
}

#[derive(Default)]
pub struct RecordingApi {
    calls: Mutex<Vec<Call>>,
    services: Vec<Service>,
    fields: Vec<Field>,
    mappings: Vec<Mapping>,
    failing: Vec<String>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two services, two fields of `s1` and one mapping on each parent
    pub fn seeded() -> Self {
        Self {
            services: vec![service("s1", "compute"), service("s2", "image")],
            fields: vec![
                field("f2", "flavor", "s1"),
                field("f1", "image_id", "s1"),
                field("f3", "size", "s2"),
            ],
            mappings: vec![
                Mapping {
                    mapping_id: "m9".to_string(),
                    value: None,
                    cost: dec!(2),
                    mapping_type: MappingType::Flat,
                    service_id: Some("s1".to_string()),
                    field_id: None,
                    group_id: Some("g1".to_string()),
                },
                Mapping {
                    mapping_id: "m1".to_string(),
                    value: Some("m1.small".to_string()),
                    cost: dec!(1.5),
                    mapping_type: MappingType::Rate,
                    service_id: None,
                    field_id: Some("f2".to_string()),
                    group_id: None,
                },
            ],
            ..Self::default()
        }
    }

    /// Calls touching `id` fail with a remote error
    pub fn failing_on(mut self, id: &str) -> Self {
        self.failing.push(id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, id: &str) -> AppResult<()> {
        if self.failing.iter().any(|f| f == id) {
            Err(AppError::Remote(format!("HTTP 409: {} is in use", id)))
        } else {
            Ok(())
        }
    }
}

pub fn service(id: &str, name: &str) -> Service {
    Service {
        service_id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn field(id: &str, name: &str, service_id: &str) -> Field {
    Field {
        field_id: id.to_string(),
        name: name.to_string(),
        service_id: service_id.to_string(),
    }
}

fn not_found(kind: &str, id: &str) -> AppError {
    AppError::Remote(format!("HTTP 404: No such {}: {}", kind, id))
}

fn mapping_from(args: &MappingArgs, mapping_id: String) -> Mapping {
    Mapping {
        mapping_id,
        value: args.value.clone(),
        cost: args.cost.unwrap_or_default(),
        mapping_type: args.mapping_type.unwrap_or_default(),
        service_id: args.service_id.clone(),
        field_id: args.field_id.clone(),
        group_id: args.group_id.clone(),
    }
}

#[async_trait]
impl HashmapApi for RecordingApi {
    async fn list_services(&self) -> AppResult<Vec<Service>> {
        self.record(Call::ListServices);
        Ok(self.services.clone())
    }

    async fn get_service(&self, service_id: &str) -> AppResult<Service> {
        self.record(Call::GetService(service_id.to_string()));
        self.check(service_id)?;
        self.services
            .iter()
            .find(|s| s.service_id == service_id)
            .cloned()
            .ok_or_else(|| not_found("service", service_id))
    }

    async fn create_service(&self, name: &str) -> AppResult<Service> {
        self.record(Call::CreateService(name.to_string()));
        self.check(name)?;
        Ok(service("s-new", name))
    }

    async fn delete_service(&self, service_id: &str) -> AppResult<()> {
        self.record(Call::DeleteService(service_id.to_string()));
        self.check(service_id)
    }

    async fn list_fields(&self, service_id: &str) -> AppResult<Vec<Field>> {
        self.record(Call::ListFields(service_id.to_string()));
        self.check(service_id)?;
        Ok(self
            .fields
            .iter()
            .filter(|f| f.service_id == service_id)
            .cloned()
            .collect())
    }

    async fn get_field(&self, field_id: &str) -> AppResult<Field> {
        self.record(Call::GetField(field_id.to_string()));
        self.check(field_id)?;
        self.fields
            .iter()
            .find(|f| f.field_id == field_id)
            .cloned()
            .ok_or_else(|| not_found("field", field_id))
    }

    async fn create_field(&self, name: &str, service_id: &str) -> AppResult<Field> {
        self.record(Call::CreateField {
            name: name.to_string(),
            service_id: service_id.to_string(),
        });
        Ok(field("f-new", name, service_id))
    }

    async fn delete_field(&self, field_id: &str) -> AppResult<()> {
        self.record(Call::DeleteField(field_id.to_string()));
        self.check(field_id)
    }

    async fn list_mappings(&self, parent: MappingParent<'_>) -> AppResult<Vec<Mapping>> {
        let (key, id) = parent.as_query();
        self.record(Call::ListMappings(key, id.to_string()));
        self.check(id)?;
        Ok(self
            .mappings
            .iter()
            .filter(|m| match parent {
                MappingParent::Service(id) => m.service_id.as_deref() == Some(id),
                MappingParent::Field(id) => m.field_id.as_deref() == Some(id),
            })
            .cloned()
            .collect())
    }

    async fn get_mapping(&self, mapping_id: &str) -> AppResult<Mapping> {
        self.record(Call::GetMapping(mapping_id.to_string()));
        self.mappings
            .iter()
            .find(|m| m.mapping_id == mapping_id)
            .cloned()
            .ok_or_else(|| not_found("mapping", mapping_id))
    }

    async fn create_mapping(&self, args: &MappingArgs) -> AppResult<Mapping> {
        self.record(Call::CreateMapping(args.clone()));
        Ok(mapping_from(args, "m-new".to_string()))
    }

    async fn update_mapping(&self, args: &MappingArgs) -> AppResult<Mapping> {
        self.record(Call::UpdateMapping(args.clone()));
        let mapping_id = args
            .mapping_id
            .clone()
            .ok_or_else(|| AppError::MissingField("mapping_id".to_string()))?;
        self.check(&mapping_id)?;

        let mut updated = mapping_from(args, mapping_id.clone());
        if let Some(current) = self.mappings.iter().find(|m| m.mapping_id == mapping_id) {
            updated.service_id = updated.service_id.or_else(|| current.service_id.clone());
            updated.field_id = updated.field_id.or_else(|| current.field_id.clone());
        }
        Ok(updated)
    }

    async fn delete_mapping(&self, mapping_id: &str) -> AppResult<()> {
        self.record(Call::DeleteMapping(mapping_id.to_string()));
        self.check(mapping_id)
    }
}

/// Panel state wired to `api`, rooted at `BASE`
pub fn state(api: Arc<RecordingApi>) -> web::Data<PanelState> {
    web::Data::new(PanelState::new(api, Urls::new(BASE)))
}

pub fn urls() -> Urls {
    Urls::new(BASE)
}
