//! Order repository trait defining the interface for order persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Order;
use crate::errors::DomainError;

/// Repository trait for Order entity persistence operations
///
/// Every lookup that returns orders for display is partitioned by the
/// owner's user id, which callers take from verified claims only.
/// Orders are never deleted.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order
    ///
    /// # Returns
    /// * `Ok(Order)` - The stored order
    /// * `Err(DomainError)` - Save failed (e.g., duplicate id, store unavailable)
    async fn create(&self, order: Order) -> Result<Order, DomainError>;

    /// Find an order by its identifier, regardless of owner
    ///
    /// # Returns
    /// * `Ok(Some(Order))` - Order found
    /// * `Ok(None)` - No order with this id
    /// * `Err(DomainError)` - Store error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError>;

    /// Find all orders owned by a user, newest `order_date` first
    ///
    /// # Example
    /// ```no_run
    /// # use ship_core::repositories::OrderRepository;
    /// # async fn example(repo: &impl OrderRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let orders = repo.find_by_user("507f1f77bcf86cd799439011").await?;
    /// for order in orders {
    ///     println!("{} {}", order.order_date, order.status);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Order>, DomainError>;

    /// Overwrite the mutable fields (status, tracking number, updated_at)
    /// of an existing order
    ///
    /// # Returns
    /// * `Ok(Order)` - The updated order
    /// * `Err(DomainError::NotFound)` - No order with this id
    async fn update(&self, order: &Order) -> Result<Order, DomainError>;
}
