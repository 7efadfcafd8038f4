//! Service creation form

use super::{CleanedData, FieldSpec, FormSpec, Initial, SelfHandlingForm};
use async_trait::async_trait;
use hashmap_core::models::Service;
use hashmap_core::{AppError, AppResult, HashmapApi};
use tracing::info;

pub struct CreateServiceForm {
    spec: FormSpec,
    initial: Initial,
}

impl CreateServiceForm {
    pub fn new() -> Self {
        Self {
            spec: FormSpec {
                name: "create_service",
                title: "Create Service",
                fields: vec![FieldSpec::text("name", "Name")],
            },
            initial: Initial::new(),
        }
    }
}

impl Default for CreateServiceForm {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SelfHandlingForm for CreateServiceForm {
    type Output = Service;

    fn spec(&self) -> &FormSpec {
        &self.spec
    }

    fn initial(&self) -> &Initial {
        &self.initial
    }

    async fn handle(&self, api: &dyn HashmapApi, data: CleanedData) -> AppResult<Service> {
        let name = data
            .text("name")
            .ok_or_else(|| AppError::MissingField("name".to_string()))?;

        info!(name = %name, "Creating service");
        api.create_service(name).await
    }

    fn success_message(&self, output: &Service) -> String {
        format!("Created service \"{}\".", output.name)
    }
}
