//! # REST API Interface Layer
//!
//! HTTP endpoints of the salon backend. Handlers map request DTOs from the
//! `shared` crate onto domain commands, call one service, and map the result
//! back. Domain errors become status codes in [`error`].
//!
//! All routes live under `/api`:
//!
//! - `/clients`, `/clients/:id`
//! - `/services`, `/services/:id`
//! - `/appointments`, `/appointments/:id`, `/appointments/:id/payment`
//! - `/schedule/visits`, `/schedule/days`, `/schedule/timeline`
//! - `/history`, `/debtors`, `/clock`

pub mod appointment_apis;
pub mod client_apis;
pub mod clock_apis;
pub mod debtor_apis;
pub mod error;
pub mod mappers;
pub mod schedule_apis;
pub mod service_apis;

pub use appointment_apis::*;
pub use client_apis::*;
pub use clock_apis::*;
pub use debtor_apis::*;
pub use schedule_apis::*;
pub use service_apis::*;
