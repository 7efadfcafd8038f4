//! Self-handling entity forms
//!
//! A form is a declared list of fields plus one `handle` step that turns the
//! cleaned values into exactly one rating API mutation. Nothing reaches the
//! API unless every field passes its local rule.

pub mod field;
pub mod mapping;
pub mod service;

pub use field::CreateFieldForm;
pub use mapping::{MappingForm, MappingMode, MappingTarget};
pub use service::CreateServiceForm;

use async_trait::async_trait;
use hashmap_core::{AppResult, HashmapApi};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

/// Raw submitted values, keyed by field name
pub type FormData = HashMap<String, String>;

/// Values provided by the page context rather than the operator
pub type Initial = BTreeMap<String, String>;

/// Per-field error messages, keyed by field name
pub type FormErrors = BTreeMap<String, String>;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const NUMBER_MESSAGE: &str = "Enter a number.";

/// Value rule of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Decimal,
    /// Fixed choice set of `(value, label)` pairs
    Choice(&'static [(&'static str, &'static str)]),
}

impl FieldKind {
    fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Decimal => "decimal",
            FieldKind::Choice(_) => "choice",
        }
    }
}

/// Declaration of one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Read-only fields always take their value from the page context
    pub readonly: bool,
}

impl FieldSpec {
    /// Required text field
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: true,
            readonly: false,
        }
    }

    /// Required decimal field
    pub const fn decimal(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Decimal,
            required: true,
            readonly: false,
        }
    }

    /// Required choice field
    pub const fn choice(
        name: &'static str,
        label: &'static str,
        choices: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Choice(choices),
            required: true,
            readonly: false,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub const fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    fn clean(&self, raw: Option<&str>) -> Result<CleanValue, String> {
        let raw = raw.map(str::trim).unwrap_or_default();

        if raw.is_empty() {
            return if self.required {
                Err(REQUIRED_MESSAGE.to_string())
            } else {
                Ok(CleanValue::Empty)
            };
        }

        match self.kind {
            FieldKind::Text => Ok(CleanValue::Text(raw.to_string())),
            FieldKind::Decimal => Decimal::from_str(raw)
                .map(CleanValue::Decimal)
                .map_err(|_| NUMBER_MESSAGE.to_string()),
            FieldKind::Choice(choices) => {
                if choices.iter().any(|(value, _)| *value == raw) {
                    Ok(CleanValue::Text(raw.to_string()))
                } else {
                    Err(format!(
                        "Select a valid choice. {} is not one of the available choices.",
                        raw
                    ))
                }
            }
        }
    }
}

/// A validated field value
#[derive(Debug, Clone, PartialEq)]
pub enum CleanValue {
    Empty,
    Text(String),
    Decimal(Decimal),
}

impl CleanValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CleanValue::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CleanValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            CleanValue::Decimal(value) => Some(*value),
            _ => None,
        }
    }
}

/// Validated values of a form, in field order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedData {
    values: Vec<(&'static str, CleanValue)>,
}

impl CleanedData {
    /// Value of a field, if the form declares it
    pub fn get(&self, name: &str) -> Option<&CleanValue> {
        self.values
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Text value of a field, absent when empty
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(CleanValue::as_text)
    }

    /// Fields carrying a value; empty optional fields are skipped
    pub fn non_empty(&self) -> impl Iterator<Item = (&'static str, &CleanValue)> {
        self.values
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (*name, value))
    }
}

/// Declared shape of a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl FormSpec {
    /// Validates submitted data
    ///
    /// Read-only fields are taken from `initial`, whatever was submitted for
    /// them.
    pub fn clean(&self, data: &FormData, initial: &Initial) -> Result<CleanedData, FormErrors> {
        let mut values = Vec::with_capacity(self.fields.len());
        let mut errors = FormErrors::new();

        for field in &self.fields {
            let raw = if field.readonly {
                initial.get(field.name)
            } else {
                data.get(field.name)
            };

            match field.clean(raw.map(String::as_str)) {
                Ok(value) => values.push((field.name, value)),
                Err(message) => {
                    errors.insert(field.name.to_string(), message);
                }
            }
        }

        if errors.is_empty() {
            Ok(CleanedData { values })
        } else {
            Err(errors)
        }
    }

    /// View of the form for rendering
    ///
    /// Shows `initial` on first display, and the submitted values plus
    /// errors when re-rendering a rejected submission.
    pub fn view(
        &self,
        action: String,
        initial: &Initial,
        submitted: Option<&FormData>,
        errors: &FormErrors,
    ) -> FormView {
        let fields = self
            .fields
            .iter()
            .map(|field| {
                // Readonly values come from the page; a re-rendered edit form only
                // knows its parent id from the submission it echoes back.
                let posted = submitted.and_then(|data| data.get(field.name));
                let value = if field.readonly {
                    initial.get(field.name).or(posted)
                } else if submitted.is_some() {
                    posted
                } else {
                    initial.get(field.name)
                };

                FieldView {
                    name: field.name,
                    label: field.label,
                    kind: field.kind.as_str(),
                    required: field.required,
                    readonly: field.readonly,
                    choices: match field.kind {
                        FieldKind::Choice(choices) => choices
                            .iter()
                            .map(|(value, label)| ChoiceView { value, label })
                            .collect(),
                        _ => Vec::new(),
                    },
                    value: value.cloned(),
                    error: errors.get(field.name).cloned(),
                }
            })
            .collect();

        FormView {
            name: self.name,
            title: self.title,
            action,
            fields,
        }
    }
}

/// Rendered form
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub name: &'static str,
    pub title: &'static str,
    /// URL the form posts to
    pub action: String,
    pub fields: Vec<FieldView>,
}

impl FormView {
    /// Looks up a rendered field
    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Rendered form field
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: &'static str,
    pub required: bool,
    pub readonly: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<ChoiceView>,
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoiceView {
    pub value: &'static str,
    pub label: &'static str,
}

/// A form that performs its own API call once valid
#[async_trait]
pub trait SelfHandlingForm: Send + Sync {
    /// What the API call returns
    type Output: Serialize + Send;

    fn spec(&self) -> &FormSpec;

    /// Values provided by the page context
    fn initial(&self) -> &Initial;

    /// Issues the single API mutation for valid data
    async fn handle(&self, api: &dyn HashmapApi, data: CleanedData) -> AppResult<Self::Output>;

    /// Notice shown after a successful submission
    fn success_message(&self, output: &Self::Output) -> String;
}

/// Result of a submission that passed or failed local validation
#[derive(Debug)]
pub enum Submission<T> {
    Handled(T),
    Invalid(FormErrors),
}

/// Validates `data` and, only if valid, lets the form call the API
pub async fn submit<F>(
    form: &F,
    api: &dyn HashmapApi,
    data: &FormData,
) -> AppResult<Submission<F::Output>>
where
    F: SelfHandlingForm,
{
    match form.spec().clean(data, form.initial()) {
        Ok(cleaned) => form.handle(api, cleaned).await.map(Submission::Handled),
        Err(errors) => Ok(Submission::Invalid(errors)),
    }
}
