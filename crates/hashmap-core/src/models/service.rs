//! Service model

use serde::{Deserialize, Serialize};

use super::Identify;

/// A named category of billable resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub service_id: String,
    pub name: String,
}

impl Identify for Service {
    fn id(&self) -> &str {
        &self.service_id
    }
}
