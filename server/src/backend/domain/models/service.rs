//! Domain model for an entry of the service catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Minutes; always positive
    pub duration: u32,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    /// Generate a unique ID for a service
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
