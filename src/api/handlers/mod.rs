//! HTTP request handlers.

pub mod about_handler;
pub mod auth_handler;
pub mod leader_handler;
pub mod partner_handler;
pub mod resource_handler;
pub mod service_handler;
pub mod ticket_handler;
pub mod upload_handler;

pub use about_handler::about_routes;
pub use auth_handler::auth_routes;
pub use leader_handler::leader_routes;
pub use partner_handler::partner_routes;
pub use resource_handler::resource_routes;
pub use service_handler::service_routes;
pub use ticket_handler::ticket_routes;
pub use upload_handler::upload_routes;
