//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without framework dependencies.
//! Creation inputs use separate `New*` structs and partial updates use
//! `*Patch` structs.

pub mod card;
pub mod follow;
pub mod style;
pub mod user;

pub use card::{Card, CardPatch, NewCard};
pub use follow::{FollowRelationship, FollowStatus, FollowedUser};
pub use style::{NewStyle, StyleDeclaration, StyleValue};
pub use user::{AuthUser, User};
