//! Field model

use serde::{Deserialize, Serialize};

use super::Identify;

/// A dimension of a service, e.g. `flavor` for `compute`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub field_id: String,
    pub name: String,
    /// Parent service, fixed at creation
    pub service_id: String,
}

impl Identify for Field {
    fn id(&self) -> &str {
        &self.field_id
    }
}
