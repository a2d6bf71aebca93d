//! Unit tests for the order service

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewOrder, Order, OrderStatus, OrderUpdate};
use crate::errors::{DomainError, OrderError};
use crate::repositories::{InMemoryOrderRepository, OrderRepository};
use crate::services::order::OrderService;

/// Repository that fails every call, standing in for an unreachable store
struct UnavailableRepository;

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
        message: "store unavailable".to_string(),
    }
}

fn service() -> OrderService {
    OrderService::new(Arc::new(InMemoryOrderRepository::new()))
}

fn new_order(total_amount: f64) -> NewOrder {
    NewOrder {
        order_details: json!({
            "DeliveryAddress": { "City": "Berlin", "Postcode": "10115", "Country": { "Title": "Germany" } },
            "Consignment": { "Packages": [ { "Weight": 4.0, "Length": 40.0, "Width": 30.0, "Height": 20.0 } ] }
        }),
        total_amount,
        service_type: Some("Economy".to_string()),
        carrier_name: Some("UPS".to_string()),
        tracking_number: None,
    }
}

#[tokio::test]
async fn test_create_and_list() {
    let service = service();

    let first = service.create_order("user-1", new_order(12.0)).await.unwrap();
    let second = service.create_order("user-1", new_order(30.0)).await.unwrap();
    service.create_order("user-2", new_order(5.0)).await.unwrap();

    assert_eq!(first.status, OrderStatus::Pending);
    assert_eq!(first.user_id, "user-1");

    let listed = service.list_orders("user-1").await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].order_date >= listed[1].order_date);
    assert!(listed.iter().all(|o| o.user_id == "user-1"));
    assert!(listed.iter().any(|o| o.id == second.id));
}

#[tokio::test]
async fn test_create_rejects_invalid_input() {
    let service = service();

    let negative = service.create_order("user-1", new_order(-3.0)).await;
    assert!(matches!(negative, Err(DomainError::Order(OrderError::InvalidAmount))));

    let mut not_object = new_order(1.0);
    not_object.order_details = json!(["quote"]);
    let result = service.create_order("user-1", not_object).await;
    assert!(matches!(result, Err(DomainError::Order(OrderError::InvalidDetails))));

    let mut bad_tracking = new_order(1.0);
    bad_tracking.tracking_number = Some("??".to_string());
    let result = service.create_order("user-1", bad_tracking).await;
    assert!(matches!(result, Err(DomainError::Order(OrderError::InvalidTrackingNumber))));

    let anonymous = service.create_order("  ", new_order(1.0)).await;
    assert!(matches!(anonymous, Err(DomainError::Unauthorized)));
}

#[tokio::test]
async fn test_create_keeps_free_form_details() {
    let service = service();

    for details in [
        json!({ "CollectionAddress": { "City": "Leeds" } }),
        json!({ "TransitTimeEstimate": "2-3 days" }),
        json!({ "ServiceResults": [{ "ServiceName": "Express" }] }),
    ] {
        let mut order = new_order(7.5);
        order.order_details = details.clone();
        let created = service.create_order("user-1", order).await.unwrap();
        assert_eq!(created.order_details, details);
    }
}

#[tokio::test]
async fn test_get_order_hides_foreign_orders() {
    let service = service();
    let order = service.create_order("owner", new_order(9.5)).await.unwrap();

    assert_eq!(service.get_order("owner", order.id).await.unwrap().id, order.id);
    assert!(matches!(
        service.get_order("intruder", order.id).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        service.get_order("owner", Uuid::new_v4()).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_update_order_status_and_tracking() {
    let service = service();
    let order = service.create_order("owner", new_order(9.5)).await.unwrap();

    let updated = service
        .update_order(
            "owner",
            order.id,
            OrderUpdate {
                status: Some(OrderStatus::Shipped),
                tracking_number: Some("1Z999AA10123456784".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Shipped);
    assert_eq!(updated.tracking_number.as_deref(), Some("1Z999AA10123456784"));
    assert!(updated.updated_at >= order.updated_at);

    let reloaded = service.get_order("owner", order.id).await.unwrap();
    assert_eq!(reloaded.status, OrderStatus::Shipped);
}

#[tokio::test]
async fn test_update_refuses_to_leave_terminal_status() {
    let service = service();
    let order = service.create_order("owner", new_order(9.5)).await.unwrap();

    let cancel = OrderUpdate {
        status: Some(OrderStatus::Cancelled),
        tracking_number: None,
    };
    service.update_order("owner", order.id, cancel).await.unwrap();

    let reopen = OrderUpdate {
        status: Some(OrderStatus::Processing),
        tracking_number: None,
    };
    let result = service.update_order("owner", order.id, reopen).await;
    assert!(matches!(
        result,
        Err(DomainError::Order(OrderError::InvalidTransition { .. }))
    ));
}

#[tokio::test]
async fn test_update_foreign_order_is_not_found() {
    let service = service();
    let order = service.create_order("owner", new_order(9.5)).await.unwrap();

    let result = service
        .update_order("intruder", order.id, OrderUpdate::default())
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_store_failures_propagate_as_internal() {
    let service = OrderService::new(Arc::new(UnavailableRepository));

    assert!(matches!(
        service.list_orders("user-1").await,
        Err(DomainError::Internal { .. })
    ));
    assert!(matches!(
        service.create_order("user-1", new_order(1.0)).await,
        Err(DomainError::Internal { .. })
    ));
    assert!(matches!(
        service.get_order("user-1", Uuid::new_v4()).await,
        Err(DomainError::Internal { .. })
    ));
}
