//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    about_handler, auth_handler, leader_handler, partner_handler, resource_handler,
    service_handler, ticket_handler, upload_handler,
};
use crate::api::routes;
use crate::domain::{
    About, AboutInput, Leader, LeaderInput, Partner, PartnerInput, Resource, ResourceInput,
    Service, ServiceInput, Ticket, TicketInput,
};

/// OpenAPI documentation for the organization site API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Organization Site CMS",
        version = "0.1.0",
        description = "Public content API with a single token-gated admin"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        routes::health,
        auth_handler::login,
        service_handler::list_services,
        service_handler::create_service,
        service_handler::update_service,
        service_handler::delete_service,
        ticket_handler::submit_ticket,
        ticket_handler::list_tickets,
        ticket_handler::get_ticket,
        ticket_handler::update_ticket_status,
        ticket_handler::delete_ticket,
        about_handler::get_about,
        about_handler::update_about,
        leader_handler::list_leaders,
        leader_handler::create_leader,
        leader_handler::update_leader,
        leader_handler::delete_leader,
        resource_handler::list_resources,
        resource_handler::create_resource,
        resource_handler::update_resource,
        resource_handler::delete_resource,
        partner_handler::list_partners,
        partner_handler::create_partner,
        partner_handler::update_partner,
        partner_handler::delete_partner,
        upload_handler::upload_file,
    ),
    components(
        schemas(
            Service,
            ServiceInput,
            Ticket,
            TicketInput,
            About,
            AboutInput,
            Leader,
            LeaderInput,
            Resource,
            ResourceInput,
            Partner,
            PartnerInput,
            auth_handler::LoginRequest,
            auth_handler::TokenResponse,
            upload_handler::UploadForm,
            upload_handler::UploadResponse,
            routes::HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Authentication", description = "Admin login"),
        (name = "Services", description = "Service catalogue"),
        (name = "Tickets", description = "Support tickets"),
        (name = "About", description = "About page text"),
        (name = "Leaders", description = "Leadership bios"),
        (name = "Resources", description = "Published resources"),
        (name = "Partners", description = "Partner organizations"),
        (name = "Uploads", description = "Asset uploads")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token obtained from /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}
