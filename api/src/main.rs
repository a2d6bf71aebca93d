use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use ship_api::app::{create_app, AppState};
use ship_api::config::{Config, OrderStoreKind};
use ship_api::middleware::{cors::create_cors, gate::RequestGate, security::SecurityMiddleware};
use ship_core::repositories::{InMemoryOrderRepository, OrderRepository};
use ship_core::services::{GatePolicy, OrderService, RoutePolicy, SecurityHeaders, TokenVerifier};
use ship_infra::database::{DatabasePool, MySqlOrderRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.environment.default_log_level()),
    );

    info!("Starting ShipTrack API Server ({})", config.environment);

    if config.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            anyhow::bail!("JWT_SECRET must be set in production");
        }
        warn!("JWT_SECRET not set, using the development secret");
    }

    let repository = build_order_repository(&config).await?;
    let order_service = OrderService::new(repository);
    let state = web::Data::new(
        AppState::new(order_service).with_auth_cookie(config.jwt.cookie_name.clone()),
    );

    let routes = RoutePolicy::default();
    info!(
        "Gate tables: protected pages {:?}, auth-only pages {:?}, protected API {:?}",
        routes.protected_pages(),
        routes.auth_only_pages(),
        routes.protected_api()
    );

    let policy = Arc::new(GatePolicy::new(
        routes,
        TokenVerifier::new(&config.jwt),
        SecurityHeaders::for_environment(config.environment),
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let environment = config.environment;
    let cors_config = config.cors.clone();
    let cookie_name = config.jwt.cookie_name.clone();

    let mut server = HttpServer::new(move || {
        create_app(
            state.clone(),
            RequestGate::with_cookie(Arc::clone(&policy), &cookie_name),
            SecurityMiddleware::new(policy.security_headers().clone()),
            create_cors(&cors_config, environment),
        )
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server terminated with an error")
}

async fn build_order_repository(config: &Config) -> anyhow::Result<Arc<dyn OrderRepository>> {
    match config.order_store {
        OrderStoreKind::Memory => {
            warn!("Using in-memory order store; orders are lost on restart");
            Ok(Arc::new(InMemoryOrderRepository::new()))
        }
        OrderStoreKind::MySql => {
            let pool = DatabasePool::new(&config.database)
                .await
                .context("Failed to connect to the database")?;
            pool.ensure_schema()
                .await
                .context("Failed to prepare the orders table")?;
            Ok(Arc::new(MySqlOrderRepository::new(pool.get_pool().clone())))
        }
    }
}
