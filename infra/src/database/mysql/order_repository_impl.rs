//! MySQL implementation of the OrderRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, MySqlPool, Row};
use uuid::Uuid;

use ship_core::domain::entities::{Order, OrderStatus};
use ship_core::errors::DomainError;
use ship_core::repositories::OrderRepository;

const SELECT_COLUMNS: &str = r#"
    SELECT id, user_id, order_details, order_date, total_amount, status,
           tracking_number, service_type, carrier_name, created_at, updated_at
    FROM orders
"#;

/// MySQL implementation of OrderRepository
pub struct MySqlOrderRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlOrderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Parses the `status` column, which the schema stores as plain text
    pub(crate) fn parse_status(value: &str) -> Result<OrderStatus, DomainError> {
        value.parse().map_err(|_| DomainError::Internal {
            message: format!("Unknown order status in store: {}", value),
        })
    }

    fn row_to_order(row: &sqlx::mysql::MySqlRow) -> Result<Order, DomainError> {
        let id: String = row.try_get("id").map_err(column_error("id"))?;
        let status: String = row.try_get("status").map_err(column_error("status"))?;
        let Json(order_details) = row
            .try_get::<Json<serde_json::Value>, _>("order_details")
            .map_err(column_error("order_details"))?;

        Ok(Order {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid order UUID: {}", e),
            })?,
            user_id: row.try_get("user_id").map_err(column_error("user_id"))?,
            order_details,
            order_date: row
                .try_get::<DateTime<Utc>, _>("order_date")
                .map_err(column_error("order_date"))?,
            total_amount: row.try_get("total_amount").map_err(column_error("total_amount"))?,
            status: Self::parse_status(&status)?,
            tracking_number: row
                .try_get("tracking_number")
                .map_err(column_error("tracking_number"))?,
            service_type: row.try_get("service_type").map_err(column_error("service_type"))?,
            carrier_name: row.try_get("carrier_name").map_err(column_error("carrier_name"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column_error("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(column_error("updated_at"))?,
        })
    }
}

fn column_error(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Internal {
        message: format!("Failed to get {}: {}", column, e),
    }
}

#[async_trait]
impl OrderRepository for MySqlOrderRepository {
    async fn create(&self, order: Order) -> Result<Order, DomainError> {
        let query = r#"
            INSERT INTO orders (
                id, user_id, order_details, order_date, total_amount, status,
                tracking_number, service_type, carrier_name, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(order.id.to_string())
            .bind(&order.user_id)
            .bind(Json(&order.order_details))
            .bind(order.order_date)
            .bind(order.total_amount)
            .bind(order.status.as_str())
            .bind(&order.tracking_number)
            .bind(&order.service_type)
            .bind(&order.carrier_name)
            .bind(order.created_at)
            .bind(order.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to save order: {}", e),
            })?;

        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find order: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_order(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Order>, DomainError> {
        let query = format!("{} WHERE user_id = ? ORDER BY order_date DESC", SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list orders: {}", e),
            })?;

        rows.iter().map(Self::row_to_order).collect()
    }

    async fn update(&self, order: &Order) -> Result<Order, DomainError> {
        let query = r#"
            UPDATE orders
            SET status = ?, tracking_number = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(order.status.as_str())
            .bind(&order.tracking_number)
            .bind(order.updated_at)
            .bind(order.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update order: {}", e),
            })?;

        if result.rows_affected() == 0 {
            // MySQL reports 0 for unchanged rows too; confirm the row exists
            return self.find_by_id(order.id).await?.ok_or(DomainError::NotFound {
                resource: format!("order {}", order.id),
            });
        }

        Ok(order.clone())
    }
}
