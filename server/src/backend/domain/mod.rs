//! # Domain Module
//!
//! Business logic of the salon booking backend, independent of HTTP and of the
//! storage engine.
//!
//! ## Module Organization
//!
//! - **client_service**, **catalog_service**, **appointment_service**: CRUD over
//!   clients, the service catalog and stored appointment rows
//! - **schedule_service**: read-only views composed from the pure modules below
//! - **aggregation**: collapses rows sharing client, date and time into visits
//! - **timeline**: places visits on the 08:00 to 20:00 axis
//! - **debt**: prices unpaid rows and totals them per client
//! - **calendar**: day buckets, the day picker filter and day headings
//! - **snapshot**: the shared in-memory appointment list and its fetch guard
//! - **clock**: the once-per-second wall clock reading
//!
//! ## Core Concepts
//!
//! - **Appointment**: one stored row pairing one client with one service at a
//!   date and time
//! - **Visit** ([`models::LogicalAppointment`]): every row of one client at one
//!   slot, shown as a single entry with the combined duration
//! - **Debt**: the price of each unpaid row, `max(duration × 3, 50)`
//!
//! ## Business Rules
//!
//! - A booking names at least one service and creates one row per service
//! - Service durations are positive
//! - Payment is tracked per row; a visit shows the flag of its first row
//! - Clients and services still referenced by appointments cannot be deleted

pub mod aggregation;
pub mod appointment_service;
pub mod calendar;
pub mod catalog_service;
pub mod client_service;
pub mod clock;
pub mod commands;
pub mod debt;
pub mod error;
pub mod models;
pub mod schedule_service;
pub mod snapshot;
pub mod timeline;

#[cfg(test)]
pub mod test_utils;

pub use appointment_service::AppointmentService;
pub use catalog_service::CatalogService;
pub use client_service::ClientService;
pub use clock::ClockTicker;
pub use error::SalonError;
pub use schedule_service::ScheduleService;
pub use snapshot::AppointmentSnapshot;
