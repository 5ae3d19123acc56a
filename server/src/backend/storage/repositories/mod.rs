// Repository modules
pub mod appointment_repository;
pub mod client_repository;
pub mod service_repository;

pub use appointment_repository::AppointmentRepository;
pub use client_repository::ClientRepository;
pub use service_repository::ServiceRepository;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};

/// Fixed-width RFC 3339 so that text ordering matches time ordering
pub(crate) fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Stored timestamp is not RFC 3339: '{}'", value))?
        .with_timezone(&Utc))
}

pub(crate) fn parse_duration(value: i64) -> Result<u32> {
    u32::try_from(value).with_context(|| format!("Stored duration out of range: {}", value))
}
