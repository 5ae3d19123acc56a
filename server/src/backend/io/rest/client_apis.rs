//! # REST API for Client Management
//!
//! Endpoints for listing, creating, updating, and deleting clients.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::backend::io::rest::error::ApiError;
use crate::backend::io::rest::mappers::ClientMapper;
use crate::backend::AppState;
use shared::{CreateClientRequest, UpdateClientRequest};

/// List all clients, oldest first
pub async fn list_clients(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/clients");

    match state.client_service.list_clients().await {
        Ok(clients) => (StatusCode::OK, Json(ClientMapper::to_list_dto(clients))).into_response(),
        Err(e) => {
            error!("Failed to list clients: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Create a new client
pub async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> impl IntoResponse {
    info!("POST /api/clients - request: {:?}", request);

    let command = ClientMapper::to_create_command(request);
    match state.client_service.create_client(command).await {
        Ok(client) => (
            StatusCode::CREATED,
            Json(ClientMapper::to_response(client, "Client created successfully")),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to create client: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// Update some fields of a client
pub async fn update_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Json(request): Json<UpdateClientRequest>,
) -> impl IntoResponse {
    info!("PUT /api/clients/{} - request: {:?}", client_id, request);

    let command = ClientMapper::to_update_command(request);
    match state.client_service.update_client(&client_id, command).await {
        Ok(client) => (
            StatusCode::OK,
            Json(ClientMapper::to_response(client, "Client updated successfully")),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to update client {}: {}", client_id, e);
            ApiError::from(e).into_response()
        }
    }
}

/// Delete a client
pub async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/clients/{}", client_id);

    match state.client_service.delete_client(&client_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            error!("Failed to delete client {}: {}", client_id, e);
            ApiError::from(e).into_response()
        }
    }
}
