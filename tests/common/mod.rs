#![allow(dead_code)]

//! Shared test harness: in-memory repositories behind the domain traits,
//! wired through the real routers and auth middleware.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;

use cardbox::application::services::auth_service::hash_token;
use cardbox::application::services::{AuthService, CardService, FollowService, StyleService};
use cardbox::domain::entities::{
    AuthUser, Card, CardPatch, FollowRelationship, FollowStatus, FollowedUser, NewCard, NewStyle,
    StyleDeclaration, User,
};
use cardbox::domain::repositories::{
    ApiToken, CardRepository, FollowRepository, StyleRepository, TokenRepository, UserRepository,
};
use cardbox::error::AppError;
use cardbox::state::AppState;

pub const SIGNING_SECRET: &str = "test-signing-secret";

/// In-memory backing store shared by all fake repositories.
#[derive(Default)]
pub struct Store {
    pub users: Vec<User>,
    pub tokens: Vec<ApiToken>,
    pub cards: Vec<Card>,
    pub styles: Vec<StyleDeclaration>,
    pub follows: Vec<FollowRelationship>,
    next_id: i64,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type SharedStore = Arc<Mutex<Store>>;

pub fn new_store() -> SharedStore {
    Arc::new(Mutex::new(Store::default()))
}

fn lock(store: &SharedStore) -> std::sync::MutexGuard<'_, Store> {
    store.lock().unwrap()
}

// ─── Seeding helpers ─────────────────────────────────────────────────────────

pub fn seed_user(store: &SharedStore, username: &str) -> i64 {
    let mut s = lock(store);
    let id = s.next_id();
    s.users.push(User {
        id,
        username: username.to_string(),
        created_at: Utc::now(),
    });
    id
}

/// Registers `token` for `user_id` so authenticated requests can use it.
pub fn seed_token(store: &SharedStore, user_id: i64, token: &str) {
    let mut s = lock(store);
    let id = s.next_id();
    s.tokens.push(ApiToken {
        id,
        user_id,
        name: format!("test-token-{id}"),
        token_hash: hash_token(SIGNING_SECRET, token),
        created_at: Utc::now(),
        last_used_at: None,
        revoked_at: None,
    });
}

pub fn seed_card(store: &SharedStore, creator_id: i64, front_text: &str, draft: bool) -> i64 {
    let mut s = lock(store);
    let creator = s
        .users
        .iter()
        .find(|u| u.id == creator_id)
        .map(|u| u.username.clone())
        .unwrap();
    let id = s.next_id();
    s.cards.push(Card {
        id,
        creator_id,
        creator,
        front_text: front_text.to_string(),
        back_text: None,
        image_url: None,
        background_color: None,
        font: None,
        font_size: None,
        text_align: None,
        draft,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    });
    id
}

pub fn seed_style(store: &SharedStore, card_id: i64, property: &str, value: &str) -> i64 {
    let mut s = lock(store);
    let id = s.next_id();
    s.styles.push(StyleDeclaration {
        id,
        card_id,
        property: property.to_string(),
        value: cardbox::domain::entities::StyleValue::Text(value.to_string()),
    });
    id
}

pub fn seed_follow(store: &SharedStore, follower_id: i64, followed_id: i64, status: FollowStatus) {
    let mut s = lock(store);
    let id = s.next_id();
    s.follows.push(FollowRelationship {
        id,
        follower_id,
        followed_id,
        status,
        created_at: Utc::now(),
    });
}

pub fn card_by_id(store: &SharedStore, id: i64) -> Option<Card> {
    lock(store).cards.iter().find(|c| c.id == id).cloned()
}

// ─── Fake repositories ───────────────────────────────────────────────────────

struct FakeUserRepository {
    store: SharedStore,
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn create(&self, username: &str) -> Result<User, AppError> {
        let mut s = lock(&self.store);
        if s.users.iter().any(|u| u.username == username) {
            return Err(AppError::conflict("Username taken", json!({})));
        }
        let id = s.next_id();
        let user = User {
            id,
            username: username.to_string(),
            created_at: Utc::now(),
        };
        s.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(lock(&self.store).users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(lock(&self.store)
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}

struct FakeTokenRepository {
    store: SharedStore,
}

#[async_trait]
impl TokenRepository for FakeTokenRepository {
    async fn resolve_user(&self, token_hash: &str) -> Result<Option<AuthUser>, AppError> {
        let s = lock(&self.store);
        let token = s
            .tokens
            .iter()
            .find(|t| t.token_hash == token_hash && t.revoked_at.is_none());

        Ok(token.and_then(|t| {
            s.users.iter().find(|u| u.id == t.user_id).map(|u| AuthUser {
                id: u.id,
                username: u.username.clone(),
            })
        }))
    }

    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError> {
        let mut s = lock(&self.store);
        if let Some(token) = s.tokens.iter_mut().find(|t| t.token_hash == token_hash) {
            token.last_used_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn create_token(
        &self,
        user_id: i64,
        name: &str,
        token_hash: &str,
    ) -> Result<ApiToken, AppError> {
        let mut s = lock(&self.store);
        let id = s.next_id();
        let token = ApiToken {
            id,
            user_id,
            name: name.to_string(),
            token_hash: token_hash.to_string(),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        };
        s.tokens.push(token.clone());
        Ok(token)
    }

    async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError> {
        Ok(lock(&self.store).tokens.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ApiToken>, AppError> {
        Ok(lock(&self.store).tokens.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ApiToken>, AppError> {
        Ok(lock(&self.store)
            .tokens
            .iter()
            .find(|t| t.name == name)
            .cloned())
    }

    async fn revoke_token(&self, id: i64) -> Result<(), AppError> {
        let mut s = lock(&self.store);
        match s.tokens.iter_mut().find(|t| t.id == id) {
            Some(token) => {
                token.revoked_at = Some(Utc::now());
                Ok(())
            }
            None => Err(AppError::not_found("Token not found", json!({ "id": id }))),
        }
    }
}

struct FakeCardRepository {
    store: SharedStore,
}

#[async_trait]
impl CardRepository for FakeCardRepository {
    async fn create(&self, creator_id: i64, new_card: NewCard) -> Result<Card, AppError> {
        let mut s = lock(&self.store);
        let creator = s
            .users
            .iter()
            .find(|u| u.id == creator_id)
            .map(|u| u.username.clone())
            .ok_or_else(|| AppError::internal("Unknown creator", json!({})))?;
        let id = s.next_id();
        let card = Card {
            id,
            creator_id,
            creator,
            front_text: new_card.front_text,
            back_text: new_card.back_text,
            image_url: new_card.image_url,
            background_color: new_card.background_color,
            font: new_card.font,
            font_size: new_card.font_size,
            text_align: new_card.text_align,
            draft: new_card.draft,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        s.cards.push(card.clone());
        Ok(card)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Card>, AppError> {
        Ok(lock(&self.store).cards.iter().find(|c| c.id == id).cloned())
    }

    async fn list_public<'a>(&self, search: Option<&'a str>) -> Result<Vec<Card>, AppError> {
        let s = lock(&self.store);
        let term = search.map(str::to_lowercase);

        let mut cards: Vec<Card> = s
            .cards
            .iter()
            .filter(|c| !c.draft)
            .filter(|c| match &term {
                None => true,
                Some(term) => {
                    c.front_text.to_lowercase().contains(term)
                        || c.back_text
                            .as_ref()
                            .is_some_and(|b| b.to_lowercase().contains(term))
                        || c.creator.to_lowercase().contains(term)
                }
            })
            .cloned()
            .collect();

        // Sequential ids stand in for insertion time.
        cards.sort_by_key(|c| std::cmp::Reverse(c.id));
        Ok(cards)
    }

    async fn list_by_creator(&self, creator_id: i64) -> Result<Vec<Card>, AppError> {
        let s = lock(&self.store);
        let mut cards: Vec<Card> = s
            .cards
            .iter()
            .filter(|c| c.creator_id == creator_id)
            .cloned()
            .collect();
        cards.sort_by_key(|c| std::cmp::Reverse(c.id));
        Ok(cards)
    }

    async fn update(&self, id: i64, patch: CardPatch) -> Result<Card, AppError> {
        let mut s = lock(&self.store);
        let card = s
            .cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found("Card not found", json!({ "id": id })))?;

        if let Some(v) = patch.front_text {
            card.front_text = v;
        }
        if let Some(v) = patch.back_text {
            card.back_text = v;
        }
        if let Some(v) = patch.image_url {
            card.image_url = v;
        }
        if let Some(v) = patch.background_color {
            card.background_color = v;
        }
        if let Some(v) = patch.font {
            card.font = v;
        }
        if let Some(v) = patch.font_size {
            card.font_size = v;
        }
        if let Some(v) = patch.text_align {
            card.text_align = v;
        }
        if let Some(v) = patch.draft {
            card.draft = v;
        }
        card.updated_at = Utc::now();

        Ok(card.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut s = lock(&self.store);
        let before = s.cards.len();
        s.cards.retain(|c| c.id != id);
        // Cascade, as the schema does.
        s.styles.retain(|st| st.card_id != id);
        Ok(s.cards.len() < before)
    }
}

struct FakeStyleRepository {
    store: SharedStore,
}

#[async_trait]
impl StyleRepository for FakeStyleRepository {
    async fn list_for_card(&self, card_id: i64) -> Result<Vec<StyleDeclaration>, AppError> {
        Ok(lock(&self.store)
            .styles
            .iter()
            .filter(|s| s.card_id == card_id)
            .cloned()
            .collect())
    }

    async fn list_for_cards(&self, card_ids: &[i64]) -> Result<Vec<StyleDeclaration>, AppError> {
        Ok(lock(&self.store)
            .styles
            .iter()
            .filter(|s| card_ids.contains(&s.card_id))
            .cloned()
            .collect())
    }

    async fn insert(&self, card_id: i64, style: NewStyle) -> Result<StyleDeclaration, AppError> {
        let mut s = lock(&self.store);
        if s.styles
            .iter()
            .any(|st| st.card_id == card_id && st.property == style.property)
        {
            return Err(AppError::conflict(
                "duplicate key value violates unique constraint",
                json!({ "constraint": "card_styles_card_id_property_key" }),
            ));
        }
        let id = s.next_id();
        let declaration = StyleDeclaration {
            id,
            card_id,
            property: style.property,
            value: style.value,
        };
        s.styles.push(declaration.clone());
        Ok(declaration)
    }

    async fn upsert(&self, card_id: i64, style: NewStyle) -> Result<StyleDeclaration, AppError> {
        let mut s = lock(&self.store);
        if let Some(existing) = s
            .styles
            .iter_mut()
            .find(|st| st.card_id == card_id && st.property == style.property)
        {
            existing.value = style.value;
            return Ok(existing.clone());
        }
        let id = s.next_id();
        let declaration = StyleDeclaration {
            id,
            card_id,
            property: style.property,
            value: style.value,
        };
        s.styles.push(declaration.clone());
        Ok(declaration)
    }
}

struct FakeFollowRepository {
    store: SharedStore,
}

impl FakeFollowRepository {
    fn followed_user(s: &Store, user_id: i64, created: chrono::DateTime<Utc>) -> FollowedUser {
        let username = s
            .users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.username.clone())
            .unwrap_or_default();
        FollowedUser {
            id: user_id,
            username,
            relationship_created: created,
        }
    }
}

#[async_trait]
impl FollowRepository for FakeFollowRepository {
    async fn insert(
        &self,
        follower_id: i64,
        followed_id: i64,
    ) -> Result<FollowRelationship, AppError> {
        let mut s = lock(&self.store);
        if s.follows
            .iter()
            .any(|f| f.follower_id == follower_id && f.followed_id == followed_id)
        {
            return Err(AppError::conflict(
                "duplicate key value violates unique constraint",
                json!({ "constraint": "follows_follower_id_followed_id_key" }),
            ));
        }
        let id = s.next_id();
        let relationship = FollowRelationship {
            id,
            follower_id,
            followed_id,
            status: FollowStatus::Active,
            created_at: Utc::now(),
        };
        s.follows.push(relationship.clone());
        Ok(relationship)
    }

    async fn find(
        &self,
        follower_id: i64,
        followed_id: i64,
    ) -> Result<Option<FollowRelationship>, AppError> {
        Ok(lock(&self.store)
            .follows
            .iter()
            .find(|f| f.follower_id == follower_id && f.followed_id == followed_id)
            .cloned())
    }

    async fn delete(&self, follower_id: i64, followed_id: i64) -> Result<bool, AppError> {
        let mut s = lock(&self.store);
        let before = s.follows.len();
        s.follows
            .retain(|f| !(f.follower_id == follower_id && f.followed_id == followed_id));
        Ok(s.follows.len() < before)
    }

    async fn set_status(&self, id: i64, status: FollowStatus) -> Result<(), AppError> {
        let mut s = lock(&self.store);
        match s.follows.iter_mut().find(|f| f.id == id) {
            Some(relationship) => {
                relationship.status = status;
                Ok(())
            }
            None => Err(AppError::not_found(
                "Follow relationship not found",
                json!({ "id": id }),
            )),
        }
    }

    async fn list_followed(
        &self,
        user_id: i64,
        status: FollowStatus,
    ) -> Result<Vec<FollowedUser>, AppError> {
        let s = lock(&self.store);
        let mut edges: Vec<&FollowRelationship> = s
            .follows
            .iter()
            .filter(|f| f.follower_id == user_id && f.status == status)
            .collect();
        edges.sort_by_key(|f| std::cmp::Reverse(f.id));
        Ok(edges
            .into_iter()
            .map(|f| Self::followed_user(&s, f.followed_id, f.created_at))
            .collect())
    }

    async fn list_followers(
        &self,
        user_id: i64,
        status: FollowStatus,
    ) -> Result<Vec<FollowedUser>, AppError> {
        let s = lock(&self.store);
        let mut edges: Vec<&FollowRelationship> = s
            .follows
            .iter()
            .filter(|f| f.followed_id == user_id && f.status == status)
            .collect();
        edges.sort_by_key(|f| std::cmp::Reverse(f.id));
        Ok(edges
            .into_iter()
            .map(|f| Self::followed_user(&s, f.follower_id, f.created_at))
            .collect())
    }
}

// ─── Server construction ─────────────────────────────────────────────────────

pub fn create_test_state(store: SharedStore) -> AppState {
    let card_repo = Arc::new(FakeCardRepository {
        store: store.clone(),
    });
    let style_repo = Arc::new(FakeStyleRepository {
        store: store.clone(),
    });
    let follow_repo = Arc::new(FakeFollowRepository {
        store: store.clone(),
    });
    let user_repo = Arc::new(FakeUserRepository {
        store: store.clone(),
    });
    let token_repo = Arc::new(FakeTokenRepository { store });

    AppState {
        card_service: Arc::new(CardService::new(card_repo.clone(), style_repo.clone())),
        style_service: Arc::new(StyleService::new(card_repo, style_repo)),
        follow_service: Arc::new(FollowService::new(follow_repo, user_repo.clone())),
        auth_service: Arc::new(AuthService::new(token_repo, SIGNING_SECRET.to_string())),
        user_repository: user_repo,
    }
}

/// Builds a test server with the full public + protected route set and the
/// real bearer auth middleware.
pub fn make_server(store: SharedStore) -> TestServer {
    let state = create_test_state(store);

    let protected = cardbox::api::routes::protected_routes().route_layer(
        axum::middleware::from_fn_with_state(state.clone(), cardbox::api::middleware::auth::layer),
    );

    let app = axum::Router::new()
        .merge(cardbox::api::routes::public_routes())
        .merge(protected)
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Groups style items in a card response by property for assertions.
pub fn styles_by_property(card: &serde_json::Value) -> HashMap<String, serde_json::Value> {
    card["styles"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .map(|s| (s["property"].as_str().unwrap_or_default().to_string(), s))
        .collect()
}
