//! Data Transfer Objects for request/response serialization.

pub mod card;
pub mod follow;
pub mod health;
pub mod style;
