//! Order service implementation

use std::sync::Arc;
use uuid::Uuid;

use ship_shared::validation::{is_valid_amount, is_valid_tracking_number, not_empty};

use crate::domain::entities::{NewOrder, Order, OrderDetails, OrderUpdate};
use crate::errors::{DomainError, OrderError};
use crate::repositories::OrderRepository;

/// Service for listing, placing and updating shipping orders
#[derive(Clone)]
pub struct OrderService {
    repository: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    /// Orders owned by `user_id`, newest first
    pub async fn list_orders(&self, user_id: &str) -> Result<Vec<Order>, DomainError> {
        let orders = self.repository.find_by_user(user_id).await?;
        tracing::debug!(user_id, count = orders.len(), "listed orders");
        Ok(orders)
    }

    /// Validates and stores a new pending order for `user_id`
    pub async fn create_order(&self, user_id: &str, new_order: NewOrder) -> Result<Order, DomainError> {
        if !not_empty(user_id) {
            return Err(DomainError::Unauthorized);
        }
        if !is_valid_amount(new_order.total_amount) {
            return Err(OrderError::InvalidAmount.into());
        }
        if !new_order.order_details.is_object() {
            return Err(OrderError::InvalidDetails.into());
        }
        let total_weight = OrderDetails::from_value(&new_order.order_details)
            .unwrap_or_default()
            .total_weight();
        if let Some(tracking_number) = &new_order.tracking_number {
            if !is_valid_tracking_number(tracking_number) {
                return Err(OrderError::InvalidTrackingNumber.into());
            }
        }

        let order = self.repository.create(Order::new(user_id, new_order)).await?;
        tracing::info!(
            order_id = %order.id,
            user_id,
            total_amount = order.total_amount,
            total_weight,
            "order created"
        );
        Ok(order)
    }

    /// Fetches one order.
    ///
    /// Orders owned by someone else are reported as not found, so callers
    /// cannot probe for ids they do not own.
    pub async fn get_order(&self, user_id: &str, order_id: Uuid) -> Result<Order, DomainError> {
        match self.repository.find_by_id(order_id).await? {
            Some(order) if order.is_owned_by(user_id) => Ok(order),
            _ => Err(DomainError::NotFound {
                resource: format!("order {}", order_id),
            }),
        }
    }

    /// Applies a status transition and/or tracking number to an owned order
    pub async fn update_order(
        &self,
        user_id: &str,
        order_id: Uuid,
        update: OrderUpdate,
    ) -> Result<Order, DomainError> {
        let mut order = self.get_order(user_id, order_id).await?;

        if let Some(status) = update.status {
            order.transition_to(status)?;
        }
        if let Some(tracking_number) = update.tracking_number {
            if !is_valid_tracking_number(&tracking_number) {
                return Err(OrderError::InvalidTrackingNumber.into());
            }
            order.set_tracking_number(tracking_number);
        }

        let order = self.repository.update(&order).await?;
        tracing::info!(order_id = %order.id, status = %order.status, "order updated");
        Ok(order)
    }
}
