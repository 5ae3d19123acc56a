use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{format_timestamp, parse_timestamp};
use crate::backend::domain::models::Client;
use crate::backend::storage::connection::DbConnection;
use crate::backend::storage::traits::ClientStorage;

/// Repository for client rows
#[derive(Clone)]
pub struct ClientRepository {
    db: DbConnection,
}

impl ClientRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn map_row(row: &SqliteRow) -> Result<Client> {
        Ok(Client {
            id: row.get("id"),
            first_name: row.get("first_name"),
            last_name: row.get("last_name"),
            phone: row.get("phone"),
            created_at: parse_timestamp(row.get("created_at"))?,
            updated_at: parse_timestamp(row.get("updated_at"))?,
        })
    }
}

#[async_trait]
impl ClientStorage for ClientRepository {
    async fn store_client(&self, client: &Client) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO clients (id, first_name, last_name, phone, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&client.id)
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.phone)
        .bind(format_timestamp(&client.created_at))
        .bind(format_timestamp(&client.updated_at))
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_client(&self, client_id: &str) -> Result<Option<Client>> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, phone, created_at, updated_at
            FROM clients
            WHERE id = ?
            "#,
        )
        .bind(client_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn list_clients(&self) -> Result<Vec<Client>> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, phone, created_at, updated_at
            FROM clients
            ORDER BY created_at ASC, rowid ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn update_client(&self, client: &Client) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE clients
            SET first_name = ?, last_name = ?, phone = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.phone)
        .bind(format_timestamp(&client.updated_at))
        .bind(&client.id)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_client(&self, client_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(client_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    async fn setup_test_repo() -> ClientRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        ClientRepository::new(db)
    }

    fn client(id: &str, first_name: &str, minutes: i64) -> Client {
        let created = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap() + Duration::minutes(minutes);
        Client {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: "Nowak".to_string(),
            phone: "500 100 200".to_string(),
            created_at: created,
            updated_at: created,
        }
    }

    #[tokio::test]
    async fn test_store_and_get_client() {
        let repo = setup_test_repo().await;
        let anna = client("c1", "Anna", 0);

        repo.store_client(&anna).await.expect("Failed to store client");

        let loaded = repo.get_client("c1").await.unwrap();
        assert_eq!(loaded, Some(anna));
        assert!(repo.get_client("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_clients_oldest_first() {
        let repo = setup_test_repo().await;
        repo.store_client(&client("c2", "Ewa", 10)).await.unwrap();
        repo.store_client(&client("c1", "Anna", 0)).await.unwrap();
        repo.store_client(&client("c3", "Ola", 5)).await.unwrap();

        let ids: Vec<String> = repo
            .list_clients()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["c1", "c3", "c2"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_report_missing_rows() {
        let repo = setup_test_repo().await;
        let mut anna = client("c1", "Anna", 0);
        repo.store_client(&anna).await.unwrap();

        anna.phone = "600 000 000".to_string();
        assert!(repo.update_client(&anna).await.unwrap());
        assert_eq!(repo.get_client("c1").await.unwrap().unwrap().phone, "600 000 000");

        assert!(!repo.update_client(&client("ghost", "Nobody", 0)).await.unwrap());

        assert!(repo.delete_client("c1").await.unwrap());
        assert!(!repo.delete_client("c1").await.unwrap());
    }
}
