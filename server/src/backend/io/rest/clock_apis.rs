use axum::{extract::State, response::Json};

use crate::backend::io::rest::mappers::ScheduleMapper;
use crate::backend::AppState;
use shared::ClockResponse;

/// Latest reading of the clock ticker
pub async fn get_clock(State(state): State<AppState>) -> Json<ClockResponse> {
    Json(ScheduleMapper::to_clock_dto(state.clock.now()))
}
