//! In-memory implementation of OrderRepository.
//!
//! Used by tests and by local runs without a database (`ORDER_STORE=memory`).

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Order;
use crate::errors::DomainError;

use super::r#trait::OrderRepository;

/// Order repository backed by a process-local map
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
}

impl InMemoryOrderRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: Order) -> Result<Order, DomainError> {
        let mut orders = self.orders.write().await;

        if orders.contains_key(&order.id) {
            return Err(DomainError::Validation {
                message: "Order already exists".to_string(),
            });
        }

        orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders.get(&id).cloned())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Order>, DomainError> {
        let orders = self.orders.read().await;
        let mut owned: Vec<Order> = orders
            .values()
            .filter(|o| o.is_owned_by(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        Ok(owned)
    }

    async fn update(&self, order: &Order) -> Result<Order, DomainError> {
        let mut orders = self.orders.write().await;

        match orders.get_mut(&order.id) {
            Some(stored) => {
                stored.status = order.status;
                stored.tracking_number = order.tracking_number.clone();
                stored.updated_at = order.updated_at;
                Ok(stored.clone())
            }
            None => Err(DomainError::NotFound {
                resource: format!("order {}", order.id),
            }),
        }
    }
}
