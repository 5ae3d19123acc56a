//! # REST API for the Service Catalog

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::backend::io::rest::error::ApiError;
use crate::backend::io::rest::mappers::ServiceMapper;
use crate::backend::AppState;
use shared::{CreateServiceRequest, UpdateServiceRequest};

pub async fn list_services(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/services");

    match state.catalog_service.list_services().await {
        Ok(services) => (StatusCode::OK, Json(ServiceMapper::to_list_dto(services))).into_response(),
        Err(e) => {
            error!("Failed to list services: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn create_service(
    State(state): State<AppState>,
    Json(request): Json<CreateServiceRequest>,
) -> impl IntoResponse {
    info!("POST /api/services - request: {:?}", request);

    let command = ServiceMapper::to_create_command(request);
    match state.catalog_service.create_service(command).await {
        Ok(service) => (
            StatusCode::CREATED,
            Json(ServiceMapper::to_response(service, "Service created successfully")),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to create service: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn update_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    Json(request): Json<UpdateServiceRequest>,
) -> impl IntoResponse {
    info!("PUT /api/services/{} - request: {:?}", service_id, request);

    let command = ServiceMapper::to_update_command(request);
    match state.catalog_service.update_service(&service_id, command).await {
        Ok(service) => (
            StatusCode::OK,
            Json(ServiceMapper::to_response(service, "Service updated successfully")),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to update service {}: {}", service_id, e);
            ApiError::from(e).into_response()
        }
    }
}

pub async fn delete_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/services/{}", service_id);

    match state.catalog_service.delete_service(&service_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to delete service {}: {}", service_id, e);
            ApiError::from(e).into_response()
        }
    }
}
