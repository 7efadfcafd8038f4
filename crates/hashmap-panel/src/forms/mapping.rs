//! Mapping forms
//!
//! Service and field mappings share one field list. The target decides the
//! extra `value` field and which parent id is attached; the mode decides
//! between a create call and an update of a known mapping.

use super::{CleanValue, CleanedData, FieldSpec, FormSpec, Initial, SelfHandlingForm};
use async_trait::async_trait;
use hashmap_core::models::{Mapping, MappingArgs, MappingType};
use hashmap_core::{AppError, AppResult, HashmapApi};
use tracing::info;

/// Type choices offered by every mapping form, as (wire value, label)
pub const TYPE_CHOICES: &[(&str, &str)] = &[
    (MappingType::Flat.as_str(), MappingType::Flat.label()),
    (MappingType::Rate.as_str(), MappingType::Rate.label()),
    (MappingType::Threshold.as_str(), MappingType::Threshold.label()),
];

/// What a mapping is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingTarget {
    Service,
    Field,
}

impl MappingTarget {
    /// Name of the parent id field
    pub fn parent_key(&self) -> &'static str {
        match self {
            MappingTarget::Service => "service_id",
            MappingTarget::Field => "field_id",
        }
    }

    fn parent_label(&self) -> &'static str {
        match self {
            MappingTarget::Service => "Service ID",
            MappingTarget::Field => "Field ID",
        }
    }
}

/// Whether the form creates a mapping or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingMode {
    Create,
    Edit(String),
}

pub struct MappingForm {
    target: MappingTarget,
    mode: MappingMode,
    spec: FormSpec,
    initial: Initial,
}

impl MappingForm {
    /// Form creating a mapping under `parent_id`
    pub fn create(target: MappingTarget, parent_id: &str) -> Self {
        let initial = [(target.parent_key().to_string(), parent_id.to_string())].into();
        Self::build(target, MappingMode::Create, initial)
    }

    /// Form updating `mapping_id`
    pub fn edit(target: MappingTarget, mapping_id: &str) -> Self {
        let initial = [("mapping_id".to_string(), mapping_id.to_string())].into();
        Self::build(target, MappingMode::Edit(mapping_id.to_string()), initial)
    }

    /// Pre-populates an edit form with the current state of the mapping
    pub fn with_current(mut self, mapping: &Mapping) -> Self {
        let current = [
            ("value", mapping.value.clone()),
            ("cost", Some(mapping.cost.to_string())),
            ("type", Some(mapping.mapping_type.as_str().to_string())),
            ("group_id", mapping.group_id.clone()),
            ("service_id", mapping.service_id.clone()),
            ("field_id", mapping.field_id.clone()),
        ];

        for (key, value) in current {
            let declared = self.spec.fields.iter().any(|f| f.name == key);
            if let (true, Some(value)) = (declared, value) {
                self.initial.entry(key.to_string()).or_insert(value);
            }
        }
        self
    }

    fn build(target: MappingTarget, mode: MappingMode, initial: Initial) -> Self {
        let mut fields = Vec::with_capacity(6);
        if target == MappingTarget::Field {
            fields.push(FieldSpec::text("value", "Value"));
        }
        fields.push(FieldSpec::decimal("cost", "Cost"));
        fields.push(FieldSpec::choice("type", "Type", TYPE_CHOICES));
        fields.push(FieldSpec::text("group_id", "Group").optional());
        fields.push(
            FieldSpec::text(target.parent_key(), target.parent_label())
                .optional()
                .readonly(),
        );
        if matches!(mode, MappingMode::Edit(_)) {
            fields.push(FieldSpec::text("mapping_id", "Mapping ID").readonly());
        }

        let (name, title) = match (&mode, target) {
            (MappingMode::Create, MappingTarget::Service) => {
                ("create_service_mapping", "Create Mapping")
            }
            (MappingMode::Create, MappingTarget::Field) => {
                ("create_field_mapping", "Create Mapping")
            }
            (MappingMode::Edit(_), MappingTarget::Service) => {
                ("edit_service_mapping", "Edit Mapping")
            }
            (MappingMode::Edit(_), MappingTarget::Field) => ("edit_field_mapping", "Edit Mapping"),
        };

        Self {
            target,
            mode,
            spec: FormSpec { name, title, fields },
            initial,
        }
    }

    /// Builds the call arguments from the non-empty cleaned values
    ///
    /// In edit mode the mapping id always comes from the form's own context.
    pub(crate) fn mapping_args(&self, data: &CleanedData) -> AppResult<MappingArgs> {
        let mut args = MappingArgs::default();

        for (name, value) in data.non_empty() {
            match (name, value) {
                ("value", CleanValue::Text(v)) => args.value = Some(v.clone()),
                ("cost", CleanValue::Decimal(v)) => args.cost = Some(*v),
                ("type", CleanValue::Text(v)) => {
                    let mapping_type = MappingType::from_str(v).ok_or_else(|| {
                        AppError::InvalidInput(format!("unknown mapping type {}", v))
                    })?;
                    args.mapping_type = Some(mapping_type);
                }
                ("group_id", CleanValue::Text(v)) => args.group_id = Some(v.clone()),
                ("service_id", CleanValue::Text(v)) => args.service_id = Some(v.clone()),
                ("field_id", CleanValue::Text(v)) => args.field_id = Some(v.clone()),
                _ => {}
            }
        }

        if let MappingMode::Edit(mapping_id) = &self.mode {
            args.mapping_id = Some(mapping_id.clone());
        }

        Ok(args)
    }
}

#[async_trait]
impl SelfHandlingForm for MappingForm {
    type Output = Mapping;

    fn spec(&self) -> &FormSpec {
        &self.spec
    }

    fn initial(&self) -> &Initial {
        &self.initial
    }

    async fn handle(&self, api: &dyn HashmapApi, data: CleanedData) -> AppResult<Mapping> {
        let args = self.mapping_args(&data)?;

        match &self.mode {
            MappingMode::Create => {
                info!(target_kind = ?self.target, keys = ?args.keys(), "Creating mapping");
                api.create_mapping(&args).await
            }
            MappingMode::Edit(mapping_id) => {
                info!(mapping_id = %mapping_id, keys = ?args.keys(), "Updating mapping");
                api.update_mapping(&args).await
            }
        }
    }

    fn success_message(&self, output: &Mapping) -> String {
        match self.mode {
            MappingMode::Create => format!("Created mapping \"{}\".", output.mapping_id),
            MappingMode::Edit(_) => format!("Updated mapping \"{}\".", output.mapping_id),
        }
    }
}
