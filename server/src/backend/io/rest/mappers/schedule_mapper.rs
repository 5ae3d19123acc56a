use chrono::{DateTime, Local};

use crate::backend::domain::calendar::{format_day_heading, DayBucket};
use crate::backend::domain::commands::schedule::{DayHistoryResult, DayTimelineResult, ScheduleDaysResult};
use crate::backend::domain::models::{format_date, format_time, LogicalAppointment};
use crate::backend::domain::timeline::TimelineSlot;
use crate::backend::io::rest::mappers::AppointmentMapper;
use shared::{
    ClockResponse, DayGroup, HistoryResponse, ScheduleDaysResponse, TimelineEntry, TimelineResponse,
    Visit, VisitListResponse, VisitService,
};

/// Mapper for the read-only schedule views
pub struct ScheduleMapper;

impl ScheduleMapper {
    pub fn visit_to_dto(visit: LogicalAppointment) -> Visit {
        let service_names = visit.service_names();
        let duration_label = visit.duration_label();

        Visit {
            key: visit.key,
            client_id: visit.client_id,
            client_name: visit.client_name,
            appointment_ids: visit.appointment_ids,
            services: visit
                .services
                .into_iter()
                .map(|line| VisitService {
                    name: line.name,
                    duration: line.duration,
                })
                .collect(),
            service_names,
            service_color: visit.service_color,
            date: format_date(visit.date),
            time: format_time(visit.time),
            duration: visit.duration,
            duration_label,
            is_paid: visit.is_paid,
            all_paid: visit.all_paid,
            notes: visit.notes,
        }
    }

    pub fn to_visit_list_dto(visits: Vec<LogicalAppointment>) -> VisitListResponse {
        VisitListResponse {
            visits: visits.into_iter().map(Self::visit_to_dto).collect(),
        }
    }

    fn day_to_dto(bucket: DayBucket<LogicalAppointment>) -> DayGroup {
        DayGroup {
            date: format_date(bucket.date),
            heading: format_day_heading(bucket.date),
            visits: bucket.items.into_iter().map(Self::visit_to_dto).collect(),
        }
    }

    pub fn to_days_dto(result: ScheduleDaysResult) -> ScheduleDaysResponse {
        ScheduleDaysResponse {
            selected_date: format_date(result.selected_date),
            today: format_date(result.today),
            days: result.days.into_iter().map(Self::day_to_dto).collect(),
        }
    }

    fn slot_to_dto(slot: TimelineSlot) -> TimelineEntry {
        TimelineEntry {
            visit: Self::visit_to_dto(slot.visit),
            left_percent: slot.position.left_percent,
            width_percent: slot.position.width_percent,
            end_time: format_time(slot.end_time),
        }
    }

    pub fn to_timeline_dto(result: DayTimelineResult) -> TimelineResponse {
        TimelineResponse {
            date: format_date(result.date),
            heading: format_day_heading(result.date),
            hour_markers: result.hour_markers,
            entries: result.slots.into_iter().map(Self::slot_to_dto).collect(),
        }
    }

    pub fn to_history_dto(result: DayHistoryResult) -> HistoryResponse {
        HistoryResponse {
            date: format_date(result.date),
            heading: format_day_heading(result.date),
            appointments: result
                .appointments
                .into_iter()
                .map(AppointmentMapper::details_to_dto)
                .collect(),
        }
    }

    pub fn to_clock_dto(now: DateTime<Local>) -> ClockResponse {
        ClockResponse {
            now: now.to_rfc3339(),
            date: format_date(now.date_naive()),
            time: now.format("%H:%M:%S").to_string(),
        }
    }
}
