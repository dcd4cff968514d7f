//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, CardService, FollowService, StyleService};
use crate::domain::repositories::UserRepository;

/// Application state shared across all request handlers.
///
/// Services are behind `Arc` so the state stays cheap to clone per request.
/// The user repository is exposed directly for the health check's liveness
/// probe.
#[derive(Clone)]
pub struct AppState {
    pub card_service: Arc<CardService>,
    pub style_service: Arc<StyleService>,
    pub follow_service: Arc<FollowService>,
    pub auth_service: Arc<AuthService>,
    pub user_repository: Arc<dyn UserRepository>,
}
