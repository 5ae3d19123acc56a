/// Builders for joined appointment records used across the domain tests.
///
/// Every record gets a fixed timestamp so equality comparisons stay stable.
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use super::models::{Appointment, AppointmentDetails, ClientRef, ServiceRef};

pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

pub fn time(value: &str) -> NaiveTime {
    NaiveTime::parse_from_str(value, "%H:%M").unwrap()
}

pub fn client(id: &str, first_name: &str, last_name: &str) -> ClientRef {
    ClientRef {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: format!("500-{}", id),
    }
}

pub fn service(id: &str, name: &str, duration: u32) -> ServiceRef {
    ServiceRef {
        id: id.to_string(),
        name: name.to_string(),
        duration,
        color: format!("#{}", id.to_uppercase()),
    }
}

/// A fully resolved, unpaid record
pub fn record(id: &str, client: &ClientRef, service: &ServiceRef, on: &str, at: &str) -> AppointmentDetails {
    AppointmentDetails {
        appointment: Appointment {
            id: id.to_string(),
            client_id: client.id.clone(),
            service_id: service.id.clone(),
            date: date(on),
            time: time(at),
            notes: None,
            is_paid: false,
            created_at: fixed_timestamp(),
            updated_at: fixed_timestamp(),
        },
        client: Some(client.clone()),
        service: Some(service.clone()),
    }
}

pub fn paid(mut details: AppointmentDetails) -> AppointmentDetails {
    details.appointment.is_paid = true;
    details
}

pub fn with_notes(mut details: AppointmentDetails, notes: &str) -> AppointmentDetails {
    details.appointment.notes = Some(notes.to_string());
    details
}
