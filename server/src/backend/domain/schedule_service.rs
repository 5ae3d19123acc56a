//! Read-only views over the appointment list.
//!
//! Everything here is computed from the current appointment snapshot: visits
//! grouped per slot, day buckets for the schedule list, the timeline of one
//! day, the history of one day and the debtors report. The missing-reference
//! policy is applied the same way in every view.

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use crate::backend::config::MissingReferencePolicy;
use crate::backend::domain::aggregation::{group_visits, resolve_all};
use crate::backend::domain::appointment_service::AppointmentService;
use crate::backend::domain::calendar::{appointments_on, filter_by_selection, group_by_day};
use crate::backend::domain::commands::schedule::{
    DayHistoryResult, DayTimelineResult, ScheduleDaysQuery, ScheduleDaysResult,
};
use crate::backend::domain::debt::{debts_by_client, DebtRecord};
use crate::backend::domain::models::{parse_date, AppointmentDetails, LogicalAppointment};
use crate::backend::domain::timeline::TimelineWindow;

#[derive(Clone)]
pub struct ScheduleService {
    appointments: AppointmentService,
    policy: MissingReferencePolicy,
    window: TimelineWindow,
}

impl ScheduleService {
    pub fn new(appointments: AppointmentService, policy: MissingReferencePolicy) -> Self {
        Self {
            appointments,
            policy,
            window: TimelineWindow::default(),
        }
    }

    /// All visits, in the order their first row appears in the list
    pub async fn list_visits(&self) -> Result<Vec<LogicalAppointment>> {
        let records = self.appointments.list_appointments().await?;
        let visits = group_visits(&records, self.policy)?;
        info!("Grouped {} appointment rows into {} visits", records.len(), visits.len());
        Ok(visits)
    }

    /// Visits bucketed per day after applying the day picker selection
    pub async fn schedule_days(&self, query: ScheduleDaysQuery, today: NaiveDate) -> Result<ScheduleDaysResult> {
        let selected_date = match query.selected_date {
            Some(value) => parse_date(&value)?,
            None => today,
        };
        info!("Building schedule for selected date {} (today {})", selected_date, today);

        let visits = self.list_visits().await?;
        let selected = filter_by_selection(selected_date, today, &visits);

        Ok(ScheduleDaysResult {
            selected_date,
            today,
            days: group_by_day(&selected),
        })
    }

    pub async fn day_timeline(&self, date: &str) -> Result<DayTimelineResult> {
        let date = parse_date(date)?;
        info!("Laying out timeline for {}", date);

        let visits = self.list_visits().await?;
        Ok(DayTimelineResult {
            date,
            hour_markers: self.window.hour_markers(),
            slots: self.window.layout_day(date, &visits),
        })
    }

    /// Stored rows of exactly one day, one entry per service
    pub async fn day_history(&self, date: &str) -> Result<DayHistoryResult> {
        let date = parse_date(date)?;
        info!("Loading history for {}", date);

        let records = self.appointments.list_appointments().await?;
        let on_day = appointments_on(date, records.as_slice());
        let appointments = resolve_all(&on_day, self.policy)?
            .into_iter()
            .map(|row| AppointmentDetails {
                appointment: row.appointment.clone(),
                client: Some(row.client.clone()),
                service: Some(row.service.clone()),
            })
            .collect();

        Ok(DayHistoryResult { date, appointments })
    }

    /// Clients with unpaid appointments and what they owe
    pub async fn debtors(&self) -> Result<Vec<DebtRecord>> {
        let records = self.appointments.list_appointments().await?;
        let debts = debts_by_client(&records, self.policy)?;
        info!("Found {} clients with unpaid appointments", debts.len());
        Ok(debts)
    }
}
