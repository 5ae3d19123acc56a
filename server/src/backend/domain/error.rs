//! Domain error conditions.
//!
//! Services return `anyhow::Result`; these variants travel inside the
//! `anyhow::Error` so the REST layer can downcast and pick a status code.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SalonError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Appointment {appointment_id} references a missing {entity}: {id}")]
    UnresolvedReference {
        appointment_id: String,
        entity: &'static str,
        id: String,
    },

    #[error("{entity} {id} is still used by {count} appointment(s)")]
    InUse {
        entity: &'static str,
        id: String,
        count: u32,
    },
}

impl SalonError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { entity, id: id.into() }
    }
}
