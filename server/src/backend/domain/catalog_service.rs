use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::backend::domain::commands::services::{CreateServiceCommand, UpdateServiceCommand};
use crate::backend::domain::error::SalonError;
use crate::backend::domain::models::Service;
use crate::backend::domain::snapshot::AppointmentSnapshot;
use crate::backend::storage::{AppointmentStorage, ServiceStorage};
use shared::DEFAULT_SERVICE_COLOR;

/// Longest bookable service: one full day
pub const MAX_SERVICE_DURATION: u32 = 24 * 60;

/// Service for the catalog of bookable salon services
#[derive(Clone)]
pub struct CatalogService {
    services: Arc<dyn ServiceStorage>,
    appointments: Arc<dyn AppointmentStorage>,
    snapshot: Arc<AppointmentSnapshot>,
}

impl CatalogService {
    pub fn new(
        services: Arc<dyn ServiceStorage>,
        appointments: Arc<dyn AppointmentStorage>,
        snapshot: Arc<AppointmentSnapshot>,
    ) -> Self {
        Self { services, appointments, snapshot }
    }

    pub async fn create_service(&self, command: CreateServiceCommand) -> Result<Service> {
        info!("Creating service: {} ({} min)", command.name, command.duration);

        self.validate_duration(command.duration)?;

        let now = Utc::now();
        let service = Service {
            id: Service::generate_id(),
            name: command.name,
            duration: command.duration,
            color: command.color.unwrap_or_else(|| DEFAULT_SERVICE_COLOR.to_string()),
            created_at: now,
            updated_at: now,
        };

        self.services
            .store_service(&service)
            .await
            .context("Failed to store service")?;

        info!("Created service {} with ID: {}", service.name, service.id);
        Ok(service)
    }

    pub async fn get_service(&self, service_id: &str) -> Result<Service> {
        match self.services.get_service(service_id).await? {
            Some(service) => Ok(service),
            None => {
                warn!("Service not found: {}", service_id);
                Err(SalonError::not_found("Service", service_id).into())
            }
        }
    }

    /// Catalog entries, oldest first
    pub async fn list_services(&self) -> Result<Vec<Service>> {
        let services = self.services.list_services().await.context("Failed to list services")?;
        info!("Found {} services", services.len());
        Ok(services)
    }

    pub async fn update_service(&self, service_id: &str, command: UpdateServiceCommand) -> Result<Service> {
        info!("Updating service: {}", service_id);

        let mut service = self.get_service(service_id).await?;

        if let Some(duration) = command.duration {
            self.validate_duration(duration)?;
            service.duration = duration;
        }
        if let Some(name) = command.name {
            service.name = name;
        }
        if let Some(color) = command.color {
            service.color = color;
        }
        service.updated_at = Utc::now();

        if !self.services.update_service(&service).await.context("Failed to update service")? {
            return Err(SalonError::not_found("Service", service_id).into());
        }

        // Durations and colours are joined into every appointment row
        self.snapshot.invalidate();

        info!("Updated service {} with ID: {}", service.name, service.id);
        Ok(service)
    }

    /// Delete a catalog entry that no appointment refers to
    pub async fn delete_service(&self, service_id: &str) -> Result<()> {
        info!("Deleting service: {}", service_id);

        let count = self.appointments.count_for_service(service_id).await?;
        if count > 0 {
            warn!("Refusing to delete service {} with {} appointments", service_id, count);
            return Err(SalonError::InUse {
                entity: "Service",
                id: service_id.to_string(),
                count,
            }
            .into());
        }

        if !self.services.delete_service(service_id).await.context("Failed to delete service")? {
            warn!("Service not found: {}", service_id);
            return Err(SalonError::not_found("Service", service_id).into());
        }

        self.snapshot.invalidate();
        info!("Deleted service: {}", service_id);
        Ok(())
    }

    fn validate_duration(&self, duration: u32) -> Result<()> {
        if duration == 0 {
            return Err(SalonError::InvalidInput("Service duration must be a positive number of minutes".to_string()).into());
        }
        if duration > MAX_SERVICE_DURATION {
            return Err(SalonError::InvalidInput(format!(
                "Service duration must not exceed {} minutes",
                MAX_SERVICE_DURATION
            ))
            .into());
        }
        Ok(())
    }
}
