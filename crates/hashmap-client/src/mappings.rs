//! Mappings collection

use hashmap_core::models::{Mapping, MappingArgs};
use hashmap_core::traits::MappingParent;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::{decode_list, ClientError, HashmapClient};

const COLLECTION: &str = "mappings";

impl HashmapClient {
    /// Lists the mappings of a service or a field
    #[instrument(skip(self))]
    pub async fn mappings_list(
        &self,
        parent: MappingParent<'_>,
    ) -> Result<Vec<Mapping>, ClientError> {
        let url = self.collection_url(COLLECTION);
        let builder = self
            .request(Method::GET, &url)
            .query(&[parent.as_query()]);

        let reply: Value = self.send_json(builder).await?;
        let mappings: Vec<Mapping> = decode_list(reply, COLLECTION)?;

        debug!(count = mappings.len(), "Listed mappings");
        Ok(mappings)
    }

    /// Fetches one mapping
    #[instrument(skip(self))]
    pub async fn mappings_get(&self, mapping_id: &str) -> Result<Mapping, ClientError> {
        let url = self.resource_url(COLLECTION, mapping_id);
        self.send_json(self.request(Method::GET, &url)).await
    }

    /// Creates a mapping
    ///
    /// A stray `mapping_id` is not sent; the API assigns ids.
    #[instrument(skip(self), fields(keys = ?args.keys()))]
    pub async fn mappings_create(&self, args: &MappingArgs) -> Result<Mapping, ClientError> {
        let url = self.collection_url(COLLECTION);
        let body = MappingArgs {
            mapping_id: None,
            ..args.clone()
        };

        self.send_json(self.request(Method::POST, &url).json(&body))
            .await
    }

    /// Updates the mapping named by `args.mapping_id`
    #[instrument(skip(self), fields(keys = ?args.keys()))]
    pub async fn mappings_update(&self, args: &MappingArgs) -> Result<Mapping, ClientError> {
        let mapping_id = args
            .mapping_id
            .as_deref()
            .ok_or(ClientError::MissingArgument("mapping_id"))?;

        let url = self.resource_url(COLLECTION, mapping_id);
        self.send_json(self.request(Method::PUT, &url).json(args))
            .await
    }

    /// Deletes a mapping
    #[instrument(skip(self))]
    pub async fn mappings_delete(&self, mapping_id: &str) -> Result<(), ClientError> {
        let url = self.resource_url(COLLECTION, mapping_id);
        self.send_empty(self.request(Method::DELETE, &url)).await
    }
}
