//! Mapping between appointment DTOs and domain rows.
//!
//! Dates and times leave the backend as `YYYY-MM-DD` and `HH:MM` strings.

use crate::backend::domain::commands::appointments::{CreateAppointmentsCommand, UpdateAppointmentCommand};
use crate::backend::domain::models::{
    format_date, format_time, Appointment as DomainAppointment, AppointmentDetails, ClientRef,
    ServiceRef,
};
use shared::{
    Appointment as SharedAppointment, AppointmentListResponse, AppointmentResponse, ClientSummary,
    CreateAppointmentsRequest, CreateAppointmentsResponse, ServiceSummary, UpdateAppointmentRequest,
};

pub struct AppointmentMapper;

impl AppointmentMapper {
    /// A bare row, without joined client or service
    pub fn to_dto(domain: DomainAppointment) -> SharedAppointment {
        Self::with_refs(domain, None, None)
    }

    pub fn details_to_dto(details: AppointmentDetails) -> SharedAppointment {
        Self::with_refs(details.appointment, details.client, details.service)
    }

    fn with_refs(
        domain: DomainAppointment,
        client: Option<ClientRef>,
        service: Option<ServiceRef>,
    ) -> SharedAppointment {
        SharedAppointment {
            id: domain.id,
            client_id: domain.client_id,
            service_id: domain.service_id,
            date: format_date(domain.date),
            time: format_time(domain.time),
            notes: domain.notes,
            is_paid: domain.is_paid,
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
            client: client.map(Self::client_summary),
            service: service.map(Self::service_summary),
        }
    }

    pub fn client_summary(client: ClientRef) -> ClientSummary {
        ClientSummary {
            id: client.id,
            first_name: client.first_name,
            last_name: client.last_name,
            phone: client.phone,
        }
    }

    pub fn service_summary(service: ServiceRef) -> ServiceSummary {
        ServiceSummary {
            id: service.id,
            name: service.name,
            duration: service.duration,
            color: service.color,
        }
    }

    pub fn to_list_dto(records: &[AppointmentDetails]) -> AppointmentListResponse {
        AppointmentListResponse {
            appointments: records.iter().cloned().map(Self::details_to_dto).collect(),
        }
    }

    pub fn to_response(domain: DomainAppointment, success_message: &str) -> AppointmentResponse {
        AppointmentResponse {
            appointment: Self::to_dto(domain),
            success_message: success_message.to_string(),
        }
    }

    pub fn to_created_response(rows: Vec<DomainAppointment>) -> CreateAppointmentsResponse {
        let success_message = format!("Created {} appointment(s)", rows.len());
        CreateAppointmentsResponse {
            appointments: rows.into_iter().map(Self::to_dto).collect(),
            success_message,
        }
    }

    pub fn to_create_command(request: CreateAppointmentsRequest) -> CreateAppointmentsCommand {
        CreateAppointmentsCommand {
            client_id: request.client_id,
            service_ids: request.service_ids,
            date: request.date,
            time: request.time,
        }
    }

    pub fn to_update_command(request: UpdateAppointmentRequest) -> UpdateAppointmentCommand {
        UpdateAppointmentCommand {
            client_id: request.client_id,
            service_id: request.service_id,
            date: request.date,
            time: request.time,
            notes: request.notes,
            is_paid: request.is_paid,
        }
    }
}
