//! # Storage Module
//!
//! Persistence for clients, the service catalog and appointments.
//!
//! The domain layer talks to the traits in [`traits`]; the SQLite repositories
//! in [`repositories`] implement them on top of a shared [`DbConnection`].
//!
//! ## Layout
//!
//! - `clients`, `services`: one row per record, listed oldest first
//! - `appointments`: one row per (client, service) booking at a date and time,
//!   with foreign keys to both tables and an index on `(date, time)`
//!
//! Dates are stored as `YYYY-MM-DD`, times as `HH:MM` and timestamps as
//! fixed-width RFC 3339 text, so plain `ORDER BY` gives chronological order.

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::{AppointmentRepository, ClientRepository, ServiceRepository};
pub use traits::{AppointmentStorage, ClientStorage, ServiceStorage};
