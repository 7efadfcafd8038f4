//! Mapping model
//!
//! A mapping is a pricing rule attached either directly to a service or to
//! one value of a field. Which parent it has is decided by the form it was
//! created with; the rating API enforces the one-parent rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Identify;

/// Mapping cost type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MappingType {
    /// Fixed cost
    #[default]
    Flat,
    /// Cost multiplied by the rated quantity
    Rate,
    /// Cost applied once a threshold is crossed
    Threshold,
}

impl fmt::Display for MappingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MappingType {
    /// Every type, in the order offered to the operator
    pub const ALL: [MappingType; 3] =
        [MappingType::Flat, MappingType::Rate, MappingType::Threshold];

    /// Wire value
    pub const fn as_str(&self) -> &'static str {
        match self {
            MappingType::Flat => "flat",
            MappingType::Rate => "rate",
            MappingType::Threshold => "threshold",
        }
    }

    /// Display label
    pub const fn label(&self) -> &'static str {
        match self {
            MappingType::Flat => "Flat",
            MappingType::Rate => "Rate",
            MappingType::Threshold => "Threshold",
        }
    }

    /// Parse from the exact wire value
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Mapping entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    pub mapping_id: String,

    /// Field value this mapping prices; only set for field mappings
    #[serde(default)]
    pub value: Option<String>,

    pub cost: Decimal,

    #[serde(rename = "type")]
    pub mapping_type: MappingType,

    #[serde(default)]
    pub service_id: Option<String>,

    #[serde(default)]
    pub field_id: Option<String>,

    #[serde(default)]
    pub group_id: Option<String>,
}

impl Identify for Mapping {
    fn id(&self) -> &str {
        &self.mapping_id
    }
}

/// Arguments of a mapping create or update call
///
/// Absent keys are never serialized, so an empty optional input reaches the
/// API as a missing key rather than an empty string or null.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MappingArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub cost: Option<Decimal>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mapping_type: Option<MappingType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_id: Option<String>,
}

impl MappingArgs {
    /// Names of the keys that will be sent, in serialization order
    pub fn keys(&self) -> Vec<&'static str> {
        [
            ("mapping_id", self.mapping_id.is_some()),
            ("value", self.value.is_some()),
            ("cost", self.cost.is_some()),
            ("type", self.mapping_type.is_some()),
            ("group_id", self.group_id.is_some()),
            ("service_id", self.service_id.is_some()),
            ("field_id", self.field_id.is_some()),
        ]
        .into_iter()
        .filter_map(|(key, present)| present.then_some(key))
        .collect()
    }
}
