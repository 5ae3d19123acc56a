use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{format_timestamp, parse_duration, parse_timestamp};
use crate::backend::domain::models::Service;
use crate::backend::storage::connection::DbConnection;
use crate::backend::storage::traits::ServiceStorage;

/// Repository for the service catalog
#[derive(Clone)]
pub struct ServiceRepository {
    db: DbConnection,
}

impl ServiceRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn map_row(row: &SqliteRow) -> Result<Service> {
        Ok(Service {
            id: row.get("id"),
            name: row.get("name"),
            duration: parse_duration(row.get("duration"))?,
            color: row.get("color"),
            created_at: parse_timestamp(row.get("created_at"))?,
            updated_at: parse_timestamp(row.get("updated_at"))?,
        })
    }
}

#[async_trait]
impl ServiceStorage for ServiceRepository {
    async fn store_service(&self, service: &Service) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO services (id, name, duration, color, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&service.id)
        .bind(&service.name)
        .bind(i64::from(service.duration))
        .bind(&service.color)
        .bind(format_timestamp(&service.created_at))
        .bind(format_timestamp(&service.updated_at))
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_service(&self, service_id: &str) -> Result<Option<Service>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, duration, color, created_at, updated_at
            FROM services
            WHERE id = ?
            "#,
        )
        .bind(service_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn list_services(&self) -> Result<Vec<Service>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, duration, color, created_at, updated_at
            FROM services
            ORDER BY created_at ASC, rowid ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn update_service(&self, service: &Service) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE services
            SET name = ?, duration = ?, color = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&service.name)
        .bind(i64::from(service.duration))
        .bind(&service.color)
        .bind(format_timestamp(&service.updated_at))
        .bind(&service.id)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_service(&self, service_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(service_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    async fn setup_test_repo() -> ServiceRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        ServiceRepository::new(db)
    }

    fn service(id: &str, name: &str, duration: u32) -> Service {
        let now = Utc::now();
        Service {
            id: id.to_string(),
            name: name.to_string(),
            duration,
            color: "#FF0000".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_store_get_update_delete() {
        let repo = setup_test_repo().await;
        let mut cut = service("s1", "Cut", 30);
        repo.store_service(&cut).await.expect("Failed to store service");

        let loaded = repo.get_service("s1").await.unwrap().unwrap();
        assert_eq!(loaded.duration, 30);
        assert_eq!(loaded.color, "#FF0000");

        cut.duration = 45;
        cut.color = "#00FF00".to_string();
        assert!(repo.update_service(&cut).await.unwrap());
        let loaded = repo.get_service("s1").await.unwrap().unwrap();
        assert_eq!(loaded.duration, 45);
        assert_eq!(loaded.color, "#00FF00");

        assert!(repo.delete_service("s1").await.unwrap());
        assert!(repo.get_service("s1").await.unwrap().is_none());
        assert!(!repo.delete_service("s1").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order_for_equal_timestamps() {
        let repo = setup_test_repo().await;
        let wash = service("s2", "Wash", 10);
        let mut cut = service("s1", "Cut", 30);
        cut.created_at = wash.created_at;

        repo.store_service(&wash).await.unwrap();
        repo.store_service(&cut).await.unwrap();

        let names: Vec<String> = repo
            .list_services()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Wash", "Cut"]);
    }

    #[tokio::test]
    async fn test_zero_duration_is_refused_by_the_schema() {
        let repo = setup_test_repo().await;
        assert!(repo.store_service(&service("s1", "Nothing", 0)).await.is_err());
    }
}
