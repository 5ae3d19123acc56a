//! Domain-level command and query types.
//!
//! Services take these instead of the public DTOs from the `shared` crate; the
//! REST layer maps one onto the other. Dates and times stay strings here and
//! are parsed by the service that owns the rule.

pub mod clients {
    #[derive(Debug, Clone)]
    pub struct CreateClientCommand {
        pub first_name: String,
        pub last_name: String,
        pub phone: String,
    }

    /// Partial update; `None` leaves the field as it is
    #[derive(Debug, Clone, Default)]
    pub struct UpdateClientCommand {
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub phone: Option<String>,
    }
}

pub mod services {
    #[derive(Debug, Clone)]
    pub struct CreateServiceCommand {
        pub name: String,
        pub duration: u32,
        /// Falls back to the default catalog colour
        pub color: Option<String>,
    }

    #[derive(Debug, Clone, Default)]
    pub struct UpdateServiceCommand {
        pub name: Option<String>,
        pub duration: Option<u32>,
        pub color: Option<String>,
    }
}

pub mod appointments {
    /// Book one client for several services at one slot; one row per service
    #[derive(Debug, Clone)]
    pub struct CreateAppointmentsCommand {
        pub client_id: String,
        pub service_ids: Vec<String>,
        pub date: String,
        pub time: String,
    }

    /// Partial update of one stored row.
    ///
    /// `notes: Some("")` clears the notes.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateAppointmentCommand {
        pub client_id: Option<String>,
        pub service_id: Option<String>,
        pub date: Option<String>,
        pub time: Option<String>,
        pub notes: Option<String>,
        pub is_paid: Option<bool>,
    }
}

pub mod schedule {
    use chrono::NaiveDate;

    use crate::backend::domain::calendar::DayBucket;
    use crate::backend::domain::models::{AppointmentDetails, LogicalAppointment};
    use crate::backend::domain::timeline::TimelineSlot;

    /// Query for the day-grouped visit list
    #[derive(Debug, Clone, Default)]
    pub struct ScheduleDaysQuery {
        /// Defaults to today
        pub selected_date: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct ScheduleDaysResult {
        pub selected_date: NaiveDate,
        pub today: NaiveDate,
        pub days: Vec<DayBucket<LogicalAppointment>>,
    }

    #[derive(Debug, Clone)]
    pub struct DayTimelineResult {
        pub date: NaiveDate,
        pub hour_markers: Vec<String>,
        pub slots: Vec<TimelineSlot>,
    }

    #[derive(Debug, Clone)]
    pub struct DayHistoryResult {
        pub date: NaiveDate,
        pub appointments: Vec<AppointmentDetails>,
    }
}
