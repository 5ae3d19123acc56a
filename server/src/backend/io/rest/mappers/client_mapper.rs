use crate::backend::domain::commands::clients::{CreateClientCommand, UpdateClientCommand};
use crate::backend::domain::models::Client as DomainClient;
use shared::{
    Client as SharedClient, ClientListResponse, ClientResponse, CreateClientRequest,
    UpdateClientRequest,
};

/// Mapper between client DTOs and the domain client model
pub struct ClientMapper;

impl ClientMapper {
    pub fn to_dto(domain: DomainClient) -> SharedClient {
        SharedClient {
            id: domain.id,
            first_name: domain.first_name,
            last_name: domain.last_name,
            phone: domain.phone,
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
        }
    }

    pub fn to_response(domain: DomainClient, success_message: &str) -> ClientResponse {
        ClientResponse {
            client: Self::to_dto(domain),
            success_message: success_message.to_string(),
        }
    }

    pub fn to_list_dto(clients: Vec<DomainClient>) -> ClientListResponse {
        ClientListResponse {
            clients: clients.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_create_command(request: CreateClientRequest) -> CreateClientCommand {
        CreateClientCommand {
            first_name: request.first_name,
            last_name: request.last_name,
            phone: request.phone,
        }
    }

    pub fn to_update_command(request: UpdateClientRequest) -> UpdateClientCommand {
        UpdateClientCommand {
            first_name: request.first_name,
            last_name: request.last_name,
            phone: request.phone,
        }
    }
}
