//! Domain models for stored appointments and the visits derived from them.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::domain::error::SalonError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// One stored booking row: exactly one (client, service) pair at one slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub client_id: String,
    pub service_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub notes: Option<String>,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Generate a unique ID for an appointment row
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Client columns joined onto an appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRef {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl ClientRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Service columns joined onto an appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRef {
    pub id: String,
    pub name: String,
    pub duration: u32,
    pub color: String,
}

/// An appointment row together with whatever its foreign keys resolved to.
///
/// `None` means the referenced row does not exist (a dangling reference).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDetails {
    pub appointment: Appointment,
    pub client: Option<ClientRef>,
    pub service: Option<ServiceRef>,
}

impl AppointmentDetails {
    /// Both references, or the first one that failed to resolve
    pub fn resolve(&self) -> Result<(&ClientRef, &ServiceRef), SalonError> {
        let client = self.client.as_ref().ok_or_else(|| SalonError::UnresolvedReference {
            appointment_id: self.appointment.id.clone(),
            entity: "client",
            id: self.appointment.client_id.clone(),
        })?;
        let service = self.service.as_ref().ok_or_else(|| SalonError::UnresolvedReference {
            appointment_id: self.appointment.id.clone(),
            entity: "service",
            id: self.appointment.service_id.clone(),
        })?;
        Ok((client, service))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub name: String,
    pub duration: u32,
}

/// A visit: every stored row sharing client, date and time, collapsed into one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalAppointment {
    pub key: String,
    pub client_id: String,
    pub client_name: String,
    pub appointment_ids: Vec<String>,
    pub services: Vec<ServiceLine>,
    pub service_color: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: u32,
    /// Taken from the first member
    pub is_paid: bool,
    pub all_paid: bool,
    /// Taken from the first member
    pub notes: Option<String>,
}

impl LogicalAppointment {
    pub fn service_names(&self) -> String {
        self.services
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn duration_label(&self) -> String {
        format!("{} min", self.duration)
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, SalonError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| SalonError::InvalidInput(format!("Date must be in YYYY-MM-DD format: '{}'", value)))
}

/// Parse `HH:MM`; a trailing `:SS` is accepted and dropped
pub fn parse_time(value: &str) -> Result<NaiveTime, SalonError> {
    let value = value.trim();
    let hh_mm = match value.len() {
        8 if value.as_bytes()[5] == b':' => &value[..5],
        _ => value,
    };
    NaiveTime::parse_from_str(hh_mm, TIME_FORMAT)
        .map_err(|_| SalonError::InvalidInput(format!("Time must be in HH:MM format: '{}'", value)))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}
