//! Fields collection

use hashmap_core::models::Field;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::{decode_list, ClientError, HashmapClient};
use crate::types::CreateFieldBody;

const COLLECTION: &str = "fields";

impl HashmapClient {
    /// Lists the fields of one service
    #[instrument(skip(self))]
    pub async fn fields_list(&self, service_id: &str) -> Result<Vec<Field>, ClientError> {
        let url = self.collection_url(COLLECTION);
        let builder = self
            .request(Method::GET, &url)
            .query(&[("service_id", service_id)]);

        let reply: Value = self.send_json(builder).await?;
        let fields: Vec<Field> = decode_list(reply, COLLECTION)?;

        debug!(count = fields.len(), "Listed fields");
        Ok(fields)
    }

    /// Fetches one field
    #[instrument(skip(self))]
    pub async fn fields_get(&self, field_id: &str) -> Result<Field, ClientError> {
        let url = self.resource_url(COLLECTION, field_id);
        self.send_json(self.request(Method::GET, &url)).await
    }

    /// Creates a field under a service
    #[instrument(skip(self))]
    pub async fn fields_create(&self, name: &str, service_id: &str) -> Result<Field, ClientError> {
        let url = self.collection_url(COLLECTION);
        let builder = self
            .request(Method::POST, &url)
            .json(&CreateFieldBody { name, service_id });

        self.send_json(builder).await
    }

    /// Deletes a field
    #[instrument(skip(self))]
    pub async fn fields_delete(&self, field_id: &str) -> Result<(), ClientError> {
        let url = self.resource_url(COLLECTION, field_id);
        self.send_empty(self.request(Method::DELETE, &url)).await
    }
}
