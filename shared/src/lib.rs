use serde::{Deserialize, Serialize};

/// Colour given to a new service when the request names none
pub const DEFAULT_SERVICE_COLOR: &str = "#FF0000";

/// Swatches offered by the service form, grouped vivid / pastel / deep
pub const SERVICE_COLOR_PALETTE: [&str; 24] = [
    "#FF0000", "#00FF00", "#0000FF", "#FF00FF", "#00FFFF", "#FF8000", "#8000FF", "#FF0080",
    "#FFB3BA", "#BAFFC9", "#BAE1FF", "#FFB3F7", "#E0BBE4", "#957DAD", "#FEC8D8", "#FFDFD3",
    "#800000", "#008000", "#000080", "#800080", "#008080", "#804000", "#400080", "#804040",
];

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    /// RFC 3339
    pub created_at: String,
    /// RFC 3339
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateClientRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateClientRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientResponse {
    pub client: Client,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientListResponse {
    pub clients: Vec<Client>,
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Length of the service in minutes
    pub duration: u32,
    /// Display token used for swatches and timeline blocks
    pub color: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub duration: u32,
    /// Falls back to [`DEFAULT_SERVICE_COLOR`]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub duration: Option<u32>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub service: Service,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceListResponse {
    pub services: Vec<Service>,
}

// ---------------------------------------------------------------------------
// Appointments
// ---------------------------------------------------------------------------

/// Client details embedded in a joined appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Service details embedded in a joined appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub id: String,
    pub name: String,
    pub duration: u32,
    pub color: String,
}

/// One stored booking row: a single (client, service) pair at one slot.
///
/// `client` and `service` are `None` when the referenced row no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub client_id: String,
    pub service_id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub notes: Option<String>,
    pub is_paid: bool,
    pub created_at: String,
    pub updated_at: String,
    pub client: Option<ClientSummary>,
    pub service: Option<ServiceSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointmentsRequest {
    pub client_id: String,
    /// One stored row is created per service id
    pub service_ids: Vec<String>,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointmentsResponse {
    pub appointments: Vec<Appointment>,
    pub success_message: String,
}

/// Partial update of one stored row.
///
/// An empty `notes` string clears the notes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub client_id: Option<String>,
    pub service_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
    pub is_paid: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub appointment: Appointment,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentListResponse {
    pub appointments: Vec<Appointment>,
}

// ---------------------------------------------------------------------------
// Schedule views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitService {
    pub name: String,
    pub duration: u32,
}

/// A client's multi-service visit: every stored row sharing client, date and time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    /// `client_id-date-time`
    pub key: String,
    pub client_id: String,
    pub client_name: String,
    /// Stored rows in this visit, in list order
    pub appointment_ids: Vec<String>,
    pub services: Vec<VisitService>,
    /// Comma-joined service names
    pub service_names: String,
    /// Colour of the first service
    pub service_color: String,
    pub date: String,
    pub time: String,
    /// Summed duration in minutes
    pub duration: u32,
    /// e.g. `"75 min"`
    pub duration_label: String,
    /// Payment status of the first stored row
    pub is_paid: bool,
    /// True only when every stored row is paid
    pub all_paid: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitListResponse {
    pub visits: Vec<Visit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayGroup {
    /// `YYYY-MM-DD`
    pub date: String,
    pub heading: String,
    pub visits: Vec<Visit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDaysResponse {
    pub selected_date: String,
    pub today: String,
    pub days: Vec<DayGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub visit: Visit,
    /// Offset from 08:00 as a percentage of the 12-hour window; not clamped
    pub left_percent: f64,
    /// Duration as a percentage of the 12-hour window; not clamped
    pub width_percent: f64,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineResponse {
    pub date: String,
    pub heading: String,
    pub hour_markers: Vec<String>,
    pub entries: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub date: String,
    pub heading: String,
    pub appointments: Vec<Appointment>,
}

// ---------------------------------------------------------------------------
// Debtors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtorAppointment {
    pub appointment: Appointment,
    pub price: u32,
    pub price_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debtor {
    pub client: ClientSummary,
    pub appointments: Vec<DebtorAppointment>,
    pub total_debt: u32,
    pub total_debt_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtorListResponse {
    pub debtors: Vec<Debtor>,
}

// ---------------------------------------------------------------------------
// Misc
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockResponse {
    /// RFC 3339 local time
    pub now: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM:SS`
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl ClientSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
