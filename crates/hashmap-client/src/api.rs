//! `HashmapApi` implementation backed by the REST client

use async_trait::async_trait;
use hashmap_core::models::{Field, Mapping, MappingArgs, Service};
use hashmap_core::traits::{HashmapApi, MappingParent};
use hashmap_core::AppResult;

use crate::client::HashmapClient;

#[async_trait]
impl HashmapApi for HashmapClient {
    async fn list_services(&self) -> AppResult<Vec<Service>> {
        Ok(self.services_list().await?)
    }

    async fn get_service(&self, service_id: &str) -> AppResult<Service> {
        Ok(self.services_get(service_id).await?)
    }

    async fn create_service(&self, name: &str) -> AppResult<Service> {
        Ok(self.services_create(name).await?)
    }

    async fn delete_service(&self, service_id: &str) -> AppResult<()> {
        Ok(self.services_delete(service_id).await?)
    }

    async fn list_fields(&self, service_id: &str) -> AppResult<Vec<Field>> {
        Ok(self.fields_list(service_id).await?)
    }

    async fn get_field(&self, field_id: &str) -> AppResult<Field> {
        Ok(self.fields_get(field_id).await?)
    }

    async fn create_field(&self, name: &str, service_id: &str) -> AppResult<Field> {
        Ok(self.fields_create(name, service_id).await?)
    }

    async fn delete_field(&self, field_id: &str) -> AppResult<()> {
        Ok(self.fields_delete(field_id).await?)
    }

    async fn list_mappings(&self, parent: MappingParent<'_>) -> AppResult<Vec<Mapping>> {
        Ok(self.mappings_list(parent).await?)
    }

    async fn get_mapping(&self, mapping_id: &str) -> AppResult<Mapping> {
        Ok(self.mappings_get(mapping_id).await?)
    }

    async fn create_mapping(&self, args: &MappingArgs) -> AppResult<Mapping> {
        Ok(self.mappings_create(args).await?)
    }

    async fn update_mapping(&self, args: &MappingArgs) -> AppResult<Mapping> {
        Ok(self.mappings_update(args).await?)
    }

    async fn delete_mapping(&self, mapping_id: &str) -> AppResult<()> {
        Ok(self.mappings_delete(mapping_id).await?)
    }
}
