//! # REST API for Appointments
//!
//! Raw appointment rows: booking, listing, partial updates, payment toggling
//! and deletion. Grouped views live in `schedule_apis`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::backend::io::rest::error::ApiError;
use crate::backend::io::rest::mappers::AppointmentMapper;
use crate::backend::AppState;
use shared::{CreateAppointmentsRequest, UpdateAppointmentRequest};

/// List every row with its client and service, ordered by date then time
pub async fn list_appointments(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/appointments");

    match state.appointment_service.list_appointments().await {
        Ok(records) => (StatusCode::OK, Json(AppointmentMapper::to_list_dto(&records))).into_response(),
        Err(e) => {
            error!("Failed to list appointments: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Book one client for one or more services at one slot
pub async fn create_appointments(
    State(state): State<AppState>,
    Json(request): Json<CreateAppointmentsRequest>,
) -> impl IntoResponse {
    info!("POST /api/appointments - request: {:?}", request);

    let command = AppointmentMapper::to_create_command(request);
    match state.appointment_service.create_appointments(command).await {
        Ok(rows) => (StatusCode::CREATED, Json(AppointmentMapper::to_created_response(rows))).into_response(),
        Err(e) => {
            error!("Failed to create appointments: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn update_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> impl IntoResponse {
    info!("PUT /api/appointments/{} - request: {:?}", appointment_id, request);

    let command = AppointmentMapper::to_update_command(request);
    match state.appointment_service.update_appointment(&appointment_id, command).await {
        Ok(appointment) => (
            StatusCode::OK,
            Json(AppointmentMapper::to_response(appointment, "Appointment updated successfully")),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to update appointment {}: {}", appointment_id, e);
            ApiError::from(e).into_response()
        }
    }
}

/// Flip the paid flag of one row
pub async fn toggle_payment(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
) -> impl IntoResponse {
    info!("POST /api/appointments/{}/payment", appointment_id);

    match state.appointment_service.toggle_payment(&appointment_id).await {
        Ok(appointment) => {
            let message = if appointment.is_paid {
                "Appointment marked as paid"
            } else {
                "Appointment marked as unpaid"
            };
            (StatusCode::OK, Json(AppointmentMapper::to_response(appointment, message))).into_response()
        }
        Err(e) => {
            error!("Failed to toggle payment of {}: {}", appointment_id, e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(appointment_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/appointments/{}", appointment_id);

    match state.appointment_service.delete_appointment(&appointment_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to delete appointment {}: {}", appointment_id, e);
            ApiError::from(e).into_response()
        }
    }
}
