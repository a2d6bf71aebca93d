//! Shared fixtures for the API integration tests
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use ship_api::app::AppState;
use ship_core::domain::entities::{Claims, Order};
use ship_core::errors::DomainError;
use ship_core::repositories::{InMemoryOrderRepository, OrderRepository};
use ship_core::services::{GatePolicy, OrderService, RoutePolicy, SecurityHeaders, TokenVerifier};

pub const SECRET: &str = "integration-test-secret";
pub const USER_ID: &str = "507f1f77bcf86cd799439011";
pub const OTHER_USER_ID: &str = "507f191e810c19729de860ea";

pub fn token_for(user_id: &str, ttl: Duration) -> String {
    let claims = Claims::new(user_id, ttl);
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap()
}

pub fn valid_token() -> String {
    token_for(USER_ID, Duration::hours(1))
}

pub fn expired_token() -> String {
    token_for(USER_ID, Duration::hours(-2))
}

pub fn forged_token() -> String {
    let claims = Claims::new(USER_ID, Duration::hours(1));
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"someone-else")).unwrap()
}

pub fn policy(production: bool) -> Arc<GatePolicy> {
    Arc::new(GatePolicy::new(
        RoutePolicy::default(),
        TokenVerifier::from_secret(SECRET),
        SecurityHeaders::new(production),
    ))
}

pub fn state_with(repository: Arc<dyn OrderRepository>) -> AppState {
    AppState::new(OrderService::new(repository))
}

pub fn memory_state() -> (AppState, InMemoryOrderRepository) {
    let repository = InMemoryOrderRepository::new();
    (state_with(Arc::new(repository.clone())), repository)
}

/// Repository whose every call fails like a lost database connection
pub struct UnavailableRepository;

#[async_trait]
impl OrderRepository for UnavailableRepository {
    async fn create(&self, _order: Order) -> Result<Order, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Order>, DomainError> {
        Err(unavailable())
    }

    async fn find_by_user(&self, _user_id: &str) -> Result<Vec<Order>, DomainError> {
        Err(unavailable())
    }

    async fn update(&self, _order: &Order) -> Result<Order, DomainError> {
        Err(unavailable())
    }
}

fn unavailable() -> DomainError {
    DomainError::Internal {
        message: "connection refused".to_string(),
    }
}

/// Builds the full application (gate, headers, CORS, routes) as a test service
macro_rules! init_app {
    ($state:expr) => {
        init_app!($state, false)
    };
    ($state:expr, $production:expr) => {{
        let environment = if $production {
            ship_shared::Environment::Production
        } else {
            ship_shared::Environment::Development
        };
        actix_web::test::init_service(ship_api::app::create_app(
            actix_web::web::Data::new($state),
            ship_api::middleware::gate::RequestGate::new($crate::common::policy($production)),
            ship_api::middleware::security::SecurityMiddleware::new(
                ship_core::services::SecurityHeaders::new($production),
            ),
            ship_api::middleware::cors::create_cors(
                &ship_shared::CorsConfig::default(),
                environment,
            ),
        ))
        .await
    }};
}
