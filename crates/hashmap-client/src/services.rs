//! Services collection

use hashmap_core::models::Service;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::{decode_list, ClientError, HashmapClient};
use crate::types::CreateServiceBody;

const COLLECTION: &str = "services";

impl HashmapClient {
    /// Lists every service
    #[instrument(skip(self))]
    pub async fn services_list(&self) -> Result<Vec<Service>, ClientError> {
        let url = self.collection_url(COLLECTION);
        let reply: Value = self.send_json(self.request(Method::GET, &url)).await?;
        let services: Vec<Service> = decode_list(reply, COLLECTION)?;

        debug!(count = services.len(), "Listed services");
        Ok(services)
    }

    /// Fetches one service
    #[instrument(skip(self))]
    pub async fn services_get(&self, service_id: &str) -> Result<Service, ClientError> {
        let url = self.resource_url(COLLECTION, service_id);
        self.send_json(self.request(Method::GET, &url)).await
    }

    /// Creates a service
    #[instrument(skip(self))]
    pub async fn services_create(&self, name: &str) -> Result<Service, ClientError> {
        let url = self.collection_url(COLLECTION);
        let builder = self
            .request(Method::POST, &url)
            .json(&CreateServiceBody { name });

        self.send_json(builder).await
    }

    /// Deletes a service
    #[instrument(skip(self))]
    pub async fn services_delete(&self, service_id: &str) -> Result<(), ClientError> {
        let url = self.resource_url(COLLECTION, service_id);
        self.send_empty(self.request(Method::DELETE, &url)).await
    }
}
