//! # REST API for Schedule Views
//!
//! Read-only endpoints built from the appointment list: grouped visits, the
//! day-bucketed schedule, one day's timeline and one day's history.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::{error, info};

use crate::backend::domain::calendar::current_date;
use crate::backend::domain::commands::schedule::ScheduleDaysQuery;
use crate::backend::domain::models::format_date;
use crate::backend::io::rest::error::ApiError;
use crate::backend::io::rest::mappers::ScheduleMapper;
use crate::backend::AppState;

#[derive(Debug, Deserialize)]
pub struct ScheduleDaysParams {
    pub selected_date: Option<String>,
}

/// `?date=YYYY-MM-DD`, today when absent
#[derive(Debug, Deserialize)]
pub struct DayParams {
    pub date: Option<String>,
}

impl DayParams {
    fn date_or_today(self) -> String {
        self.date.unwrap_or_else(|| format_date(current_date()))
    }
}

pub async fn list_visits(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/schedule/visits");

    match state.schedule_service.list_visits().await {
        Ok(visits) => (StatusCode::OK, Json(ScheduleMapper::to_visit_list_dto(visits))).into_response(),
        Err(e) => {
            error!("Failed to list visits: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn schedule_days(
    State(state): State<AppState>,
    Query(params): Query<ScheduleDaysParams>,
) -> impl IntoResponse {
    info!("GET /api/schedule/days - params: {:?}", params);

    let query = ScheduleDaysQuery {
        selected_date: params.selected_date,
    };
    match state.schedule_service.schedule_days(query, current_date()).await {
        Ok(result) => (StatusCode::OK, Json(ScheduleMapper::to_days_dto(result))).into_response(),
        Err(e) => {
            error!("Failed to build schedule: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn day_timeline(
    State(state): State<AppState>,
    Query(params): Query<DayParams>,
) -> impl IntoResponse {
    info!("GET /api/schedule/timeline - params: {:?}", params);

    let date = params.date_or_today();
    match state.schedule_service.day_timeline(&date).await {
        Ok(result) => (StatusCode::OK, Json(ScheduleMapper::to_timeline_dto(result))).into_response(),
        Err(e) => {
            error!("Failed to lay out timeline for {}: {}", date, e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn day_history(
    State(state): State<AppState>,
    Query(params): Query<DayParams>,
) -> impl IntoResponse {
    info!("GET /api/history - params: {:?}", params);

    let date = params.date_or_today();
    match state.schedule_service.day_history(&date).await {
        Ok(result) => (StatusCode::OK, Json(ScheduleMapper::to_history_dto(result))).into_response(),
        Err(e) => {
            error!("Failed to load history for {}: {}", date, e);
            ApiError::from(e).into_response()
        }
    }
}
