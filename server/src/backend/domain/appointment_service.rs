//! Booking, editing and paying for appointments.
//!
//! A booking for several services creates one stored row per service, all in
//! one transaction. Reads go through the shared [`AppointmentSnapshot`]; every
//! successful write invalidates it.

use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::backend::domain::commands::appointments::{CreateAppointmentsCommand, UpdateAppointmentCommand};
use crate::backend::domain::error::SalonError;
use crate::backend::domain::models::{parse_date, parse_time, Appointment, AppointmentDetails};
use crate::backend::domain::snapshot::AppointmentSnapshot;
use crate::backend::storage::{AppointmentStorage, ClientStorage, ServiceStorage};

#[derive(Clone)]
pub struct AppointmentService {
    appointments: Arc<dyn AppointmentStorage>,
    clients: Arc<dyn ClientStorage>,
    services: Arc<dyn ServiceStorage>,
    snapshot: Arc<AppointmentSnapshot>,
}

impl AppointmentService {
    pub fn new(
        appointments: Arc<dyn AppointmentStorage>,
        clients: Arc<dyn ClientStorage>,
        services: Arc<dyn ServiceStorage>,
        snapshot: Arc<AppointmentSnapshot>,
    ) -> Self {
        Self { appointments, clients, services, snapshot }
    }

    /// Book one client for every listed service at the same slot
    pub async fn create_appointments(&self, command: CreateAppointmentsCommand) -> Result<Vec<Appointment>> {
        info!(
            "Creating {} appointment(s) for client {} on {} at {}",
            command.service_ids.len(),
            command.client_id,
            command.date,
            command.time
        );

        if command.service_ids.is_empty() {
            return Err(SalonError::InvalidInput("At least one service must be selected".to_string()).into());
        }

        let date = parse_date(&command.date)?;
        let time = parse_time(&command.time)?;

        self.ensure_client_exists(&command.client_id).await?;
        for service_id in &command.service_ids {
            self.ensure_service_exists(service_id).await?;
        }

        let now = Utc::now();
        let rows: Vec<Appointment> = command
            .service_ids
            .iter()
            .map(|service_id| Appointment {
                id: Appointment::generate_id(),
                client_id: command.client_id.clone(),
                service_id: service_id.clone(),
                date,
                time,
                notes: None,
                is_paid: false,
                created_at: now,
                updated_at: now,
            })
            .collect();

        self.appointments
            .store_appointments(&rows)
            .await
            .context("Failed to store appointments")?;
        self.snapshot.invalidate();

        info!("Created {} appointment row(s)", rows.len());
        Ok(rows)
    }

    /// Every stored row with its client and service, ordered by date then time
    pub async fn list_appointments(&self) -> Result<Arc<Vec<AppointmentDetails>>> {
        if let Some(records) = self.snapshot.current() {
            debug!("Serving {} appointments from snapshot", records.len());
            return Ok(records);
        }

        let ticket = self.snapshot.begin_fetch();
        let records = Arc::new(
            self.appointments
                .list_appointments()
                .await
                .context("Failed to list appointments")?,
        );

        if self.snapshot.publish(ticket, records.clone()) {
            debug!("Published snapshot of {} appointments", records.len());
        }
        Ok(records)
    }

    pub async fn get_appointment(&self, appointment_id: &str) -> Result<Appointment> {
        match self.appointments.get_appointment(appointment_id).await? {
            Some(appointment) => Ok(appointment),
            None => {
                warn!("Appointment not found: {}", appointment_id);
                Err(SalonError::not_found("Appointment", appointment_id).into())
            }
        }
    }

    /// Change only the fields present in the command
    pub async fn update_appointment(
        &self,
        appointment_id: &str,
        command: UpdateAppointmentCommand,
    ) -> Result<Appointment> {
        info!("Updating appointment: {}", appointment_id);

        let mut appointment = self.get_appointment(appointment_id).await?;

        if let Some(client_id) = command.client_id {
            if client_id != appointment.client_id {
                self.ensure_client_exists(&client_id).await?;
                appointment.client_id = client_id;
            }
        }
        if let Some(service_id) = command.service_id {
            if service_id != appointment.service_id {
                self.ensure_service_exists(&service_id).await?;
                appointment.service_id = service_id;
            }
        }
        if let Some(date) = command.date {
            appointment.date = parse_date(&date)?;
        }
        if let Some(time) = command.time {
            appointment.time = parse_time(&time)?;
        }
        if let Some(notes) = command.notes {
            appointment.notes = if notes.is_empty() { None } else { Some(notes) };
        }
        if let Some(is_paid) = command.is_paid {
            appointment.is_paid = is_paid;
        }

        self.save(appointment).await
    }

    /// Flip the payment flag of one stored row; sibling rows of the same visit are untouched
    pub async fn toggle_payment(&self, appointment_id: &str) -> Result<Appointment> {
        let mut appointment = self.get_appointment(appointment_id).await?;
        appointment.is_paid = !appointment.is_paid;

        info!(
            "Marking appointment {} as {}",
            appointment_id,
            if appointment.is_paid { "paid" } else { "unpaid" }
        );
        self.save(appointment).await
    }

    pub async fn delete_appointment(&self, appointment_id: &str) -> Result<()> {
        info!("Deleting appointment: {}", appointment_id);

        let deleted = self
            .appointments
            .delete_appointment(appointment_id)
            .await
            .context("Failed to delete appointment")?;
        if !deleted {
            warn!("Appointment not found: {}", appointment_id);
            return Err(SalonError::not_found("Appointment", appointment_id).into());
        }

        self.snapshot.invalidate();
        Ok(())
    }

    async fn save(&self, mut appointment: Appointment) -> Result<Appointment> {
        appointment.updated_at = Utc::now();

        let updated = self
            .appointments
            .update_appointment(&appointment)
            .await
            .context("Failed to update appointment")?;
        if !updated {
            return Err(SalonError::not_found("Appointment", appointment.id.clone()).into());
        }

        self.snapshot.invalidate();
        Ok(appointment)
    }

    async fn ensure_client_exists(&self, client_id: &str) -> Result<()> {
        if self.clients.get_client(client_id).await?.is_none() {
            return Err(SalonError::InvalidInput(format!("Unknown client: {}", client_id)).into());
        }
        Ok(())
    }

    async fn ensure_service_exists(&self, service_id: &str) -> Result<()> {
        if self.services.get_service(service_id).await?.is_none() {
            return Err(SalonError::InvalidInput(format!("Unknown service: {}", service_id)).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::{format_time, Client, Service};
    use crate::backend::storage::{AppointmentRepository, ClientRepository, DbConnection, ServiceRepository};

    async fn setup_test() -> AppointmentService {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let clients = Arc::new(ClientRepository::new(db.clone()));
        let services = Arc::new(ServiceRepository::new(db.clone()));
        let now = Utc::now();

        for (id, first) in [("c1", "Anna"), ("c2", "Ewa")] {
            clients
                .store_client(&Client {
                    id: id.to_string(),
                    first_name: first.to_string(),
                    last_name: "Nowak".to_string(),
                    phone: "500".to_string(),
                    created_at: now,
                    updated_at: now,
                })
                .await
                .unwrap();
        }
        for (id, name, duration) in [("s1", "Cut", 30), ("s2", "Color", 45)] {
            services
                .store_service(&Service {
                    id: id.to_string(),
                    name: name.to_string(),
                    duration,
                    color: "#FF0000".to_string(),
                    created_at: now,
                    updated_at: now,
                })
                .await
                .unwrap();
        }

        AppointmentService::new(
            Arc::new(AppointmentRepository::new(db)),
            clients,
            services,
            Arc::new(AppointmentSnapshot::new()),
        )
    }

    fn booking(service_ids: &[&str]) -> CreateAppointmentsCommand {
        CreateAppointmentsCommand {
            client_id: "c1".to_string(),
            service_ids: service_ids.iter().map(|s| s.to_string()).collect(),
            date: "2024-06-10".to_string(),
            time: "09:00".to_string(),
        }
    }

    fn salon_error(err: &anyhow::Error) -> Option<&SalonError> {
        err.downcast_ref::<SalonError>()
    }

    #[tokio::test]
    async fn test_booking_creates_one_row_per_service() {
        let service = setup_test().await;

        let rows = service.create_appointments(booking(&["s1", "s2"])).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.client_id == "c1" && !r.is_paid));
        assert_ne!(rows[0].id, rows[1].id);

        let listed = service.list_appointments().await.unwrap();
        let services: Vec<&str> = listed.iter().map(|d| d.appointment.service_id.as_str()).collect();
        assert_eq!(services, vec!["s1", "s2"]);
    }

    #[tokio::test]
    async fn test_empty_booking_is_rejected() {
        let service = setup_test().await;
        let err = service.create_appointments(booking(&[])).await.unwrap_err();
        assert!(matches!(salon_error(&err), Some(SalonError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_unknown_service_rejects_the_whole_booking() {
        let service = setup_test().await;

        let err = service
            .create_appointments(booking(&["s1", "missing"]))
            .await
            .unwrap_err();
        assert!(matches!(salon_error(&err), Some(SalonError::InvalidInput(_))));
        assert!(service.list_appointments().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_slot_is_rejected() {
        let service = setup_test().await;
        let mut command = booking(&["s1"]);
        command.time = "9 o'clock".to_string();

        let err = service.create_appointments(command).await.unwrap_err();
        assert!(matches!(salon_error(&err), Some(SalonError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_list_is_served_from_snapshot_until_a_write() {
        let service = setup_test().await;
        service.create_appointments(booking(&["s1"])).await.unwrap();

        let first = service.list_appointments().await.unwrap();
        let second = service.list_appointments().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        service.create_appointments(booking(&["s2"])).await.unwrap();
        let third = service.list_appointments().await.unwrap();
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(third.len(), 2);
    }

    #[tokio::test]
    async fn test_toggle_payment_touches_one_row_only() {
        let service = setup_test().await;
        let rows = service.create_appointments(booking(&["s1", "s2"])).await.unwrap();

        let toggled = service.toggle_payment(&rows[1].id).await.unwrap();
        assert!(toggled.is_paid);
        assert!(!service.get_appointment(&rows[0].id).await.unwrap().is_paid);

        let toggled = service.toggle_payment(&rows[1].id).await.unwrap();
        assert!(!toggled.is_paid);
    }

    #[tokio::test]
    async fn test_partial_update() {
        let service = setup_test().await;
        let rows = service.create_appointments(booking(&["s1"])).await.unwrap();
        let id = rows[0].id.clone();

        let updated = service
            .update_appointment(
                &id,
                UpdateAppointmentCommand {
                    time: Some("10:30".to_string()),
                    notes: Some("bring photos".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(format_time(updated.time), "10:30");
        assert_eq!(updated.notes.as_deref(), Some("bring photos"));
        assert_eq!(updated.service_id, "s1");

        let cleared = service
            .update_appointment(
                &id,
                UpdateAppointmentCommand {
                    notes: Some(String::new()),
                    client_id: Some("c2".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(cleared.notes.is_none());
        assert_eq!(cleared.client_id, "c2");
        assert_eq!(format_time(cleared.time), "10:30");

        let err = service
            .update_appointment(
                &id,
                UpdateAppointmentCommand {
                    client_id: Some("ghost".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(salon_error(&err), Some(SalonError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_delete_appointment() {
        let service = setup_test().await;
        let rows = service.create_appointments(booking(&["s1"])).await.unwrap();

        service.delete_appointment(&rows[0].id).await.unwrap();
        assert!(service.list_appointments().await.unwrap().is_empty());

        let err = service.delete_appointment(&rows[0].id).await.unwrap_err();
        assert!(matches!(salon_error(&err), Some(SalonError::NotFound { .. })));

        let err = service.toggle_payment(&rows[0].id).await.unwrap_err();
        assert!(matches!(salon_error(&err), Some(SalonError::NotFound { .. })));
    }
}
