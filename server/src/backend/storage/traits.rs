//! # Storage Traits
//!
//! The domain services only see these traits, so the SQLite repositories can be
//! swapped for another store without touching business logic.

use anyhow::Result;
use async_trait::async_trait;

use crate::backend::domain::models::{Appointment, AppointmentDetails, Client, Service};

#[async_trait]
pub trait ClientStorage: Send + Sync {
    async fn store_client(&self, client: &Client) -> Result<()>;

    async fn get_client(&self, client_id: &str) -> Result<Option<Client>>;

    /// All clients, oldest first
    async fn list_clients(&self) -> Result<Vec<Client>>;

    /// Returns false when no row has the client's id
    async fn update_client(&self, client: &Client) -> Result<bool>;

    /// Returns false when no row has the given id
    async fn delete_client(&self, client_id: &str) -> Result<bool>;
}

#[async_trait]
pub trait ServiceStorage: Send + Sync {
    async fn store_service(&self, service: &Service) -> Result<()>;

    async fn get_service(&self, service_id: &str) -> Result<Option<Service>>;

    /// All catalog entries, oldest first
    async fn list_services(&self) -> Result<Vec<Service>>;

    async fn update_service(&self, service: &Service) -> Result<bool>;

    async fn delete_service(&self, service_id: &str) -> Result<bool>;
}

#[async_trait]
pub trait AppointmentStorage: Send + Sync {
    /// Insert every row or none of them
    async fn store_appointments(&self, appointments: &[Appointment]) -> Result<()>;

    async fn get_appointment(&self, appointment_id: &str) -> Result<Option<Appointment>>;

    /// Every row with its client and service joined, ordered by date then time.
    /// Rows inserted together keep their insertion order.
    async fn list_appointments(&self) -> Result<Vec<AppointmentDetails>>;

    async fn update_appointment(&self, appointment: &Appointment) -> Result<bool>;

    async fn delete_appointment(&self, appointment_id: &str) -> Result<bool>;

    async fn count_for_client(&self, client_id: &str) -> Result<u32>;

    async fn count_for_service(&self, service_id: &str) -> Result<u32>;
}
