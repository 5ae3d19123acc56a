use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::backend::domain::commands::clients::{CreateClientCommand, UpdateClientCommand};
use crate::backend::domain::error::SalonError;
use crate::backend::domain::models::Client;
use crate::backend::domain::snapshot::AppointmentSnapshot;
use crate::backend::storage::{AppointmentStorage, ClientStorage};

/// Service for the client records of the salon
#[derive(Clone)]
pub struct ClientService {
    clients: Arc<dyn ClientStorage>,
    appointments: Arc<dyn AppointmentStorage>,
    snapshot: Arc<AppointmentSnapshot>,
}

impl ClientService {
    pub fn new(
        clients: Arc<dyn ClientStorage>,
        appointments: Arc<dyn AppointmentStorage>,
        snapshot: Arc<AppointmentSnapshot>,
    ) -> Self {
        Self { clients, appointments, snapshot }
    }

    pub async fn create_client(&self, command: CreateClientCommand) -> Result<Client> {
        info!("Creating client: {} {}", command.first_name, command.last_name);

        let now = Utc::now();
        let client = Client {
            id: Client::generate_id(),
            first_name: command.first_name,
            last_name: command.last_name,
            phone: command.phone,
            created_at: now,
            updated_at: now,
        };

        self.clients
            .store_client(&client)
            .await
            .context("Failed to store client")?;

        info!("Created client {} with ID: {}", client.full_name(), client.id);
        Ok(client)
    }

    pub async fn get_client(&self, client_id: &str) -> Result<Client> {
        match self.clients.get_client(client_id).await? {
            Some(client) => Ok(client),
            None => {
                warn!("Client not found: {}", client_id);
                Err(SalonError::not_found("Client", client_id).into())
            }
        }
    }

    /// All clients, oldest first
    pub async fn list_clients(&self) -> Result<Vec<Client>> {
        let clients = self.clients.list_clients().await.context("Failed to list clients")?;
        info!("Found {} clients", clients.len());
        Ok(clients)
    }

    pub async fn update_client(&self, client_id: &str, command: UpdateClientCommand) -> Result<Client> {
        info!("Updating client: {}", client_id);

        let mut client = self.get_client(client_id).await?;

        if let Some(first_name) = command.first_name {
            client.first_name = first_name;
        }
        if let Some(last_name) = command.last_name {
            client.last_name = last_name;
        }
        if let Some(phone) = command.phone {
            client.phone = phone;
        }
        client.updated_at = Utc::now();

        if !self.clients.update_client(&client).await.context("Failed to update client")? {
            return Err(SalonError::not_found("Client", client_id).into());
        }

        // Joined names in the appointment list are now stale
        self.snapshot.invalidate();

        info!("Updated client {} with ID: {}", client.full_name(), client.id);
        Ok(client)
    }

    /// Delete a client that no appointment refers to
    pub async fn delete_client(&self, client_id: &str) -> Result<()> {
        info!("Deleting client: {}", client_id);

        let count = self.appointments.count_for_client(client_id).await?;
        if count > 0 {
            warn!("Refusing to delete client {} with {} appointments", client_id, count);
            return Err(SalonError::InUse {
                entity: "Client",
                id: client_id.to_string(),
                count,
            }
            .into());
        }

        if !self.clients.delete_client(client_id).await.context("Failed to delete client")? {
            warn!("Client not found: {}", client_id);
            return Err(SalonError::not_found("Client", client_id).into());
        }

        self.snapshot.invalidate();
        info!("Deleted client: {}", client_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::{Appointment, Service};
    use crate::backend::storage::{
        AppointmentRepository, ClientRepository, DbConnection, ServiceRepository, ServiceStorage,
    };
    use chrono::{NaiveDate, NaiveTime};

    struct Fixture {
        db: DbConnection,
        service: ClientService,
        snapshot: Arc<AppointmentSnapshot>,
    }

    async fn setup_test() -> Fixture {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let snapshot = Arc::new(AppointmentSnapshot::new());
        let service = ClientService::new(
            Arc::new(ClientRepository::new(db.clone())),
            Arc::new(AppointmentRepository::new(db.clone())),
            snapshot.clone(),
        );
        Fixture { db, service, snapshot }
    }

    fn anna() -> CreateClientCommand {
        CreateClientCommand {
            first_name: "Anna".to_string(),
            last_name: "Nowak".to_string(),
            phone: "500 100 200".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list_clients() {
        let f = setup_test().await;

        let created = f.service.create_client(anna()).await.expect("Failed to create client");
        assert!(!created.id.is_empty());
        assert_eq!(created.full_name(), "Anna Nowak");

        let listed = f.service.list_clients().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let f = setup_test().await;
        let created = f.service.create_client(anna()).await.unwrap();

        let ticket = f.snapshot.begin_fetch();
        f.snapshot.publish(ticket, Vec::new());

        let updated = f
            .service
            .update_client(
                &created.id,
                UpdateClientCommand {
                    phone: Some("600 600 600".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Anna");
        assert_eq!(updated.phone, "600 600 600");
        assert!(updated.updated_at >= created.updated_at);
        assert!(f.snapshot.current().is_none());
    }

    #[tokio::test]
    async fn test_missing_client_is_not_found() {
        let f = setup_test().await;

        let err = f.service.get_client("nope").await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<SalonError>(),
            Some(&SalonError::not_found("Client", "nope"))
        );

        let err = f
            .service
            .update_client("nope", UpdateClientCommand::default())
            .await
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<SalonError>(), Some(SalonError::NotFound { .. })));

        let err = f.service.delete_client("nope").await.unwrap_err();
        assert!(matches!(err.downcast_ref::<SalonError>(), Some(SalonError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_client_with_appointments_cannot_be_deleted() {
        let f = setup_test().await;
        let client = f.service.create_client(anna()).await.unwrap();
        let now = Utc::now();

        ServiceRepository::new(f.db.clone())
            .store_service(&Service {
                id: "s1".to_string(),
                name: "Cut".to_string(),
                duration: 30,
                color: "#FF0000".to_string(),
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();
        AppointmentRepository::new(f.db.clone())
            .store_appointments(&[Appointment {
                id: "a1".to_string(),
                client_id: client.id.clone(),
                service_id: "s1".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
                time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                notes: None,
                is_paid: false,
                created_at: now,
                updated_at: now,
            }])
            .await
            .unwrap();

        let err = f.service.delete_client(&client.id).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SalonError>(),
            Some(SalonError::InUse { count: 1, .. })
        ));
        assert!(f.service.get_client(&client.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_client() {
        let f = setup_test().await;
        let client = f.service.create_client(anna()).await.unwrap();

        f.service.delete_client(&client.id).await.unwrap();
        assert!(f.service.list_clients().await.unwrap().is_empty());
    }
}
