//! Process configuration assembled from environment variables

use std::str::FromStr;

use ship_shared::config::{CorsConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig};

/// Backing store for orders, chosen with `ORDER_STORE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderStoreKind {
    /// Process-local map; data is lost on restart
    Memory,
    #[default]
    MySql,
}

impl FromStr for OrderStoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(OrderStoreKind::Memory),
            "mysql" => Ok(OrderStoreKind::MySql),
            other => Err(format!("Unknown order store: {}", other)),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    pub order_store: OrderStoreKind,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let order_store = match std::env::var("ORDER_STORE") {
            Ok(value) => value.parse().unwrap_or_else(|err| {
                log::warn!("{}, falling back to mysql", err);
                OrderStoreKind::MySql
            }),
            Err(_) => OrderStoreKind::default(),
        };

        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            cors: CorsConfig::from_env(),
            order_store,
        }
    }
}
