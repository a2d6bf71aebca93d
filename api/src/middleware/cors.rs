//! CORS middleware configuration for cross-origin requests.
//!
//! In development any origin is accepted. In production only the origins
//! listed in `ALLOWED_ORIGINS` may call the API. Credentials are allowed in
//! both so the session cookie reaches `/api/auth/me`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use ship_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance for the given environment
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    if environment.is_production() {
        create_production_cors(config)
    } else {
        create_development_cors(config)
    }
}

fn create_development_cors(config: &CorsConfig) -> Cors {
    log::info!("Configuring CORS for development environment");

    base_cors(config).allow_any_origin()
}

fn create_production_cors(config: &CorsConfig) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = base_cors(config);
    for origin in &config.allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }
    cors
}

fn base_cors(config: &CorsConfig) -> Cors {
    Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(config.max_age)
        .supports_credentials()
}
