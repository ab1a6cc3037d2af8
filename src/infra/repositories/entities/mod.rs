//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod about;
pub mod leader;
pub mod partner;
pub mod resource;
pub mod service;
pub mod ticket;
