//! Domain layer - Site content entities
//!
//! Plain data types for the content the site publishes, plus the
//! validated input payloads used to create or replace them.
//! No persistence concerns live here.

pub mod about;
pub mod leader;
pub mod partner;
pub mod resource;
pub mod service;
pub mod ticket;

pub use about::{About, AboutInput};
pub use leader::{Leader, LeaderInput};
pub use partner::{Partner, PartnerInput};
pub use resource::{Resource, ResourceInput};
pub use service::{Service, ServiceInput};
pub use ticket::{Ticket, TicketInput, TicketStatusUpdate};
