//! Field creation form

use super::{CleanedData, FieldSpec, FormSpec, Initial, SelfHandlingForm};
use async_trait::async_trait;
use hashmap_core::models::Field;
use hashmap_core::{AppError, AppResult, HashmapApi};
use tracing::info;

/// Creates a field under the service the page was opened for
pub struct CreateFieldForm {
    spec: FormSpec,
    initial: Initial,
}

impl CreateFieldForm {
    pub fn new(service_id: &str) -> Self {
        Self {
            spec: FormSpec {
                name: "create_field",
                title: "Create Field",
                fields: vec![
                    FieldSpec::text("name", "Name"),
                    FieldSpec::text("service_id", "Service ID").readonly(),
                ],
            },
            initial: [("service_id".to_string(), service_id.to_string())].into(),
        }
    }
}

#[async_trait]
impl SelfHandlingForm for CreateFieldForm {
    type Output = Field;

    fn spec(&self) -> &FormSpec {
        &self.spec
    }

    fn initial(&self) -> &Initial {
        &self.initial
    }

    async fn handle(&self, api: &dyn HashmapApi, data: CleanedData) -> AppResult<Field> {
        let name = data
            .text("name")
            .ok_or_else(|| AppError::MissingField("name".to_string()))?;
        let service_id = data
            .text("service_id")
            .ok_or_else(|| AppError::MissingField("service_id".to_string()))?;

        info!(name = %name, service_id = %service_id, "Creating field");
        api.create_field(name, service_id).await
    }

    fn success_message(&self, output: &Field) -> String {
        format!("Created field \"{}\".", output.name)
    }
}
