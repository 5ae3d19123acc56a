use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;

use super::{format_timestamp, parse_duration, parse_timestamp};
use crate::backend::domain::models::{
    format_date, format_time, parse_date, parse_time, Appointment, AppointmentDetails, ClientRef,
    ServiceRef,
};
use crate::backend::storage::connection::DbConnection;
use crate::backend::storage::traits::AppointmentStorage;

/// Repository for appointment rows and their joined views
#[derive(Clone)]
pub struct AppointmentRepository {
    db: DbConnection,
}

impl AppointmentRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn map_appointment(row: &SqliteRow) -> Result<Appointment> {
        Ok(Appointment {
            id: row.get("id"),
            client_id: row.get("client_id"),
            service_id: row.get("service_id"),
            date: parse_date(row.get("date"))?,
            time: parse_time(row.get("time"))?,
            notes: row.get("notes"),
            is_paid: row.get("is_paid"),
            created_at: parse_timestamp(row.get("created_at"))?,
            updated_at: parse_timestamp(row.get("updated_at"))?,
        })
    }

    /// Joined columns are NULL when the referenced row is gone
    fn map_details(row: &SqliteRow) -> Result<AppointmentDetails> {
        let appointment = Self::map_appointment(row)?;

        let client = match row.get::<Option<String>, _>("c_id") {
            Some(id) => Some(ClientRef {
                id,
                first_name: row.get("c_first_name"),
                last_name: row.get("c_last_name"),
                phone: row.get("c_phone"),
            }),
            None => None,
        };

        let service = match row.get::<Option<String>, _>("s_id") {
            Some(id) => Some(ServiceRef {
                id,
                name: row.get("s_name"),
                duration: parse_duration(row.get("s_duration"))?,
                color: row.get("s_color"),
            }),
            None => None,
        };

        Ok(AppointmentDetails { appointment, client, service })
    }

    async fn count_where(&self, column: &str, id: &str) -> Result<u32> {
        let sql = format!("SELECT COUNT(*) AS n FROM appointments WHERE {} = ?", column);
        let row = sqlx::query(&sql).bind(id).fetch_one(self.db.pool()).await?;
        let count: i64 = row.get("n");
        u32::try_from(count).context("Appointment count out of range")
    }
}

#[async_trait]
impl AppointmentStorage for AppointmentRepository {
    async fn store_appointments(&self, appointments: &[Appointment]) -> Result<()> {
        let mut tx = self.db.pool().begin().await?;

        for appointment in appointments {
            sqlx::query(
                r#"
                INSERT INTO appointments
                    (id, client_id, service_id, date, time, notes, is_paid, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&appointment.id)
            .bind(&appointment.client_id)
            .bind(&appointment.service_id)
            .bind(format_date(appointment.date))
            .bind(format_time(appointment.time))
            .bind(&appointment.notes)
            .bind(appointment.is_paid)
            .bind(format_timestamp(&appointment.created_at))
            .bind(format_timestamp(&appointment.updated_at))
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to insert appointment {}", appointment.id))?;
        }

        tx.commit().await?;
        debug!("Stored {} appointment rows", appointments.len());
        Ok(())
    }

    async fn get_appointment(&self, appointment_id: &str) -> Result<Option<Appointment>> {
        let row = sqlx::query(
            r#"
            SELECT id, client_id, service_id, date, time, notes, is_paid, created_at, updated_at
            FROM appointments
            WHERE id = ?
            "#,
        )
        .bind(appointment_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::map_appointment).transpose()
    }

    async fn list_appointments(&self) -> Result<Vec<AppointmentDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT a.id, a.client_id, a.service_id, a.date, a.time, a.notes, a.is_paid,
                   a.created_at, a.updated_at,
                   c.id AS c_id, c.first_name AS c_first_name, c.last_name AS c_last_name, c.phone AS c_phone,
                   s.id AS s_id, s.name AS s_name, s.duration AS s_duration, s.color AS s_color
            FROM appointments a
            LEFT JOIN clients c ON c.id = a.client_id
            LEFT JOIN services s ON s.id = a.service_id
            ORDER BY a.date ASC, a.time ASC, a.rowid ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::map_details).collect()
    }

    async fn update_appointment(&self, appointment: &Appointment) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE appointments
            SET client_id = ?, service_id = ?, date = ?, time = ?, notes = ?, is_paid = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&appointment.client_id)
        .bind(&appointment.service_id)
        .bind(format_date(appointment.date))
        .bind(format_time(appointment.time))
        .bind(&appointment.notes)
        .bind(appointment.is_paid)
        .bind(format_timestamp(&appointment.updated_at))
        .bind(&appointment.id)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_appointment(&self, appointment_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = ?")
            .bind(appointment_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_for_client(&self, client_id: &str) -> Result<u32> {
        self.count_where("client_id", client_id).await
    }

    async fn count_for_service(&self, service_id: &str) -> Result<u32> {
        self.count_where("service_id", service_id).await
    }
}
