//! # REST API for the Debtors Report

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::backend::io::rest::error::ApiError;
use crate::backend::io::rest::mappers::DebtorMapper;
use crate::backend::AppState;

/// Clients with unpaid appointments, in order of their first unpaid appointment
pub async fn list_debtors(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/debtors");

    match state.schedule_service.debtors().await {
        Ok(debts) => (
            StatusCode::OK,
            Json(DebtorMapper::to_list_dto(debts, &state.currency)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to build debtors report: {}", e);
            ApiError::from(e).into_response()
        }
    }
}
