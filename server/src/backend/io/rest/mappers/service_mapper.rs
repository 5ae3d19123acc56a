use crate::backend::domain::commands::services::{CreateServiceCommand, UpdateServiceCommand};
use crate::backend::domain::models::Service as DomainService;
use shared::{
    CreateServiceRequest, Service as SharedService, ServiceListResponse, ServiceResponse,
    UpdateServiceRequest,
};

/// Mapper between catalog DTOs and the domain service model
pub struct ServiceMapper;

impl ServiceMapper {
    pub fn to_dto(domain: DomainService) -> SharedService {
        SharedService {
            id: domain.id,
            name: domain.name,
            duration: domain.duration,
            color: domain.color,
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
        }
    }

    pub fn to_response(domain: DomainService, success_message: &str) -> ServiceResponse {
        ServiceResponse {
            service: Self::to_dto(domain),
            success_message: success_message.to_string(),
        }
    }

    pub fn to_list_dto(services: Vec<DomainService>) -> ServiceListResponse {
        ServiceListResponse {
            services: services.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_create_command(request: CreateServiceRequest) -> CreateServiceCommand {
        CreateServiceCommand {
            name: request.name,
            duration: request.duration,
            color: request.color,
        }
    }

    pub fn to_update_command(request: UpdateServiceRequest) -> UpdateServiceCommand {
        UpdateServiceCommand {
            name: request.name,
            duration: request.duration,
            color: request.color,
        }
    }
}
