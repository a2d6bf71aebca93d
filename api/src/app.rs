//! Application state and factory
//!
//! Wires the request gate, security headers, CORS and the route table into
//! an actix-web [`App`]. `main` and the integration tests share this factory.

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};

use ship_core::services::OrderService;
use ship_shared::config::DEFAULT_AUTH_COOKIE;

use crate::handlers::error::{json_error_handler, not_found};
use crate::middleware::{gate::RequestGate, security::SecurityMiddleware};
use crate::routes::{auth, health::health_check, orders};

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub order_service: OrderService,
    /// Cookie cleared on logout; must match the one the gate reads
    pub auth_cookie: String,
}

impl AppState {
    pub fn new(order_service: OrderService) -> Self {
        Self {
            order_service,
            auth_cookie: DEFAULT_AUTH_COOKIE.to_string(),
        }
    }

    pub fn with_auth_cookie(mut self, cookie_name: impl Into<String>) -> Self {
        self.auth_cookie = cookie_name.into();
        self
    }
}

/// Create and configure the application.
///
/// Middleware order, outermost first: logging, security headers, CORS, gate.
/// Security headers therefore land on every response, including CORS
/// preflights and the gate's redirects and rejections.
pub fn create_app(
    state: web::Data<AppState>,
    gate: RequestGate,
    security: SecurityMiddleware,
    cors: Cors,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(gate)
        .wrap(cors)
        .wrap(security)
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/me", web::get().to(auth::me))
                        .route("/logout", web::post().to(auth::logout)),
                )
                .service(
                    web::scope("/orders")
                        .route("", web::get().to(orders::list_orders))
                        .route("", web::post().to(orders::create_order))
                        .route("/{id}", web::get().to(orders::get_order))
                        .route("/{id}", web::patch().to(orders::update_order)),
                ),
        )
        .default_service(web::route().to(not_found))
}
