//! Integration tests for the order endpoints

#[macro_use]
mod common;

use std::sync::Arc;

use actix_web::{
    http::{header, StatusCode},
    test,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};

use ship_core::domain::entities::{NewOrder, Order, OrderStatus};
use ship_core::repositories::OrderRepository;

use common::{memory_state, state_with, valid_token, UnavailableRepository, OTHER_USER_ID, USER_ID};

fn bearer() -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", valid_token()))
}

fn quote() -> Value {
    json!({
        "CollectionAddress": {
            "City": "Leeds",
            "Postcode": "LS1 4DY",
            "Country": { "Title": "United Kingdom" }
        },
        "DeliveryAddress": {
            "City": "Paris",
            "Postcode": "75001",
            "Country": { "Title": "France" }
        },
        "TransitTimeEstimate": 2,
        "Consignment": {
            "Packages": [{ "Weight": 2.5, "Length": 30, "Width": 20, "Height": 10 }]
        }
    })
}

fn stored_order(user_id: &str, days_ago: i64) -> Order {
    let mut order = Order::new(
        user_id,
        NewOrder {
            order_details: quote(),
            total_amount: 19.99,
            service_type: Some("Economy".to_string()),
            carrier_name: Some("Parcelforce".to_string()),
            tracking_number: None,
        },
    );
    order.order_date = Utc::now() - Duration::days(days_ago);
    order
}

#[actix_web::test]
async fn test_create_order_returns_created_order() {
    let (state, repository) = memory_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .insert_header(bearer())
        .set_json(json!({
            "orderDetails": quote(),
            "totalAmount": 24.99,
            "serviceType": "Next Day",
            "carrierName": "DPD"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Order created successfully");
    assert_eq!(body["order"]["userId"], USER_ID);
    assert_eq!(body["order"]["status"], "pending");
    assert_eq!(body["order"]["totalAmount"], 24.99);
    assert_eq!(body["order"]["carrierName"], "DPD");
    assert!(body["order"]["orderDate"].is_string());
    assert_eq!(repository.len().await, 1);
}

#[actix_web::test]
async fn test_create_order_accepts_partly_shaped_details() {
    let (state, repository) = memory_state();
    let app = init_app!(state);

    let payloads = vec![
        json!({ "CollectionAddress": { "City": "Leeds" } }),
        json!({ "TransitTimeEstimate": "2-3 days" }),
        json!({ "ServiceResults": [{ "ServiceName": "Express" }] }),
    ];

    for details in payloads {
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .insert_header(bearer())
            .set_json(json!({ "orderDetails": details.clone(), "totalAmount": 8.0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED, "rejected {}", details);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["order"]["orderDetails"], details);
    }

    assert_eq!(repository.len().await, 3);
}

#[actix_web::test]
async fn test_create_order_ignores_owner_in_body() {
    let (state, _) = memory_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .insert_header(bearer())
        .set_json(json!({
            "userId": OTHER_USER_ID,
            "orderDetails": quote(),
            "totalAmount": 5.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["order"]["userId"], USER_ID);
}

#[actix_web::test]
async fn test_create_order_validation_failures() {
    let (state, repository) = memory_state();
    let app = init_app!(state);

    let invalid_bodies = vec![
        json!({ "totalAmount": 10.0 }),
        json!({ "orderDetails": quote(), "totalAmount": -3.0 }),
        json!({ "orderDetails": [1, 2, 3], "totalAmount": 10.0 }),
        json!({ "orderDetails": quote(), "totalAmount": 10.0, "trackingNumber": "no spaces allowed" }),
    ];

    for body in invalid_bodies {
        let req = test::TestRequest::post()
            .uri("/api/orders")
            .insert_header(bearer())
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "accepted {}", body);

        let response: Value = test::read_body_json(resp).await;
        assert!(response["message"].is_string());
    }

    assert!(repository.is_empty().await);
}

#[actix_web::test]
async fn test_create_order_with_malformed_json() {
    let (state, _) = memory_state();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/orders")
        .insert_header(bearer())
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"orderDetails\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid request body");
}

#[actix_web::test]
async fn test_list_orders_returns_only_callers_orders_newest_first() {
    let (state, repository) = memory_state();
    let older = repository.create(stored_order(USER_ID, 3)).await.unwrap();
    let newer = repository.create(stored_order(USER_ID, 1)).await.unwrap();
    repository.create(stored_order(OTHER_USER_ID, 0)).await.unwrap();
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/orders")
        .insert_header(bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let orders = body["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0]["id"], newer.id.to_string());
    assert_eq!(orders[1]["id"], older.id.to_string());
}

#[actix_web::test]
async fn test_get_order_by_owner() {
    let (state, repository) = memory_state();
    let order = repository.create(stored_order(USER_ID, 0)).await.unwrap();
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri(&format!("/api/orders/{}", order.id))
        .insert_header(bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["order"]["id"], order.id.to_string());
    assert_eq!(body["order"]["orderDetails"]["DeliveryAddress"]["City"], "Paris");
}

#[actix_web::test]
async fn test_get_order_hides_foreign_unknown_and_malformed_ids() {
    let (state, repository) = memory_state();
    let foreign = repository.create(stored_order(OTHER_USER_ID, 0)).await.unwrap();
    let app = init_app!(state);

    let uris = vec![
        format!("/api/orders/{}", foreign.id),
        format!("/api/orders/{}", uuid::Uuid::new_v4()),
        "/api/orders/507f1f77bcf86cd799439011".to_string(),
    ];

    for uri in uris {
        let req = test::TestRequest::get()
            .uri(&uri)
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Order not found" }));
    }
}

#[actix_web::test]
async fn test_update_order_status_and_tracking_number() {
    let (state, repository) = memory_state();
    let order = repository.create(stored_order(USER_ID, 0)).await.unwrap();
    let app = init_app!(state);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/orders/{}", order.id))
        .insert_header(bearer())
        .set_json(json!({ "status": "shipped", "trackingNumber": "JD014600006281" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Order updated successfully");
    assert_eq!(body["order"]["status"], "shipped");
    assert_eq!(body["order"]["trackingNumber"], "JD014600006281");

    let stored = repository.find_by_id(order.id).await.unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::Shipped);
}

#[actix_web::test]
async fn test_update_order_rejects_unknown_status() {
    let (state, repository) = memory_state();
    let order = repository.create(stored_order(USER_ID, 0)).await.unwrap();
    let app = init_app!(state);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/orders/{}", order.id))
        .insert_header(bearer())
        .set_json(json!({ "status": "lost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_order_cannot_leave_terminal_status() {
    let (state, repository) = memory_state();
    let mut order = stored_order(USER_ID, 0);
    order.status = OrderStatus::Delivered;
    let order = repository.create(order).await.unwrap();
    let app = init_app!(state);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/orders/{}", order.id))
        .insert_header(bearer())
        .set_json(json!({ "status": "processing" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "Cannot change order status from delivered to processing"
    );
}

#[actix_web::test]
async fn test_update_foreign_order_is_not_found() {
    let (state, repository) = memory_state();
    let foreign = repository.create(stored_order(OTHER_USER_ID, 0)).await.unwrap();
    let app = init_app!(state);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/orders/{}", foreign.id))
        .insert_header(bearer())
        .set_json(json!({ "status": "cancelled" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let stored = repository.find_by_id(foreign.id).await.unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::Pending);
}

#[actix_web::test]
async fn test_store_failures_map_to_fixed_messages() {
    let app = init_app!(state_with(Arc::new(UnavailableRepository)));
    let id = uuid::Uuid::new_v4();

    let cases = vec![
        (
            test::TestRequest::get().uri("/api/orders"),
            "Failed to fetch orders",
        ),
        (
            test::TestRequest::post()
                .uri("/api/orders")
                .set_json(json!({ "orderDetails": quote(), "totalAmount": 1.0 })),
            "Failed to create order",
        ),
        (
            test::TestRequest::get().uri(&format!("/api/orders/{}", id)),
            "Failed to fetch order",
        ),
        (
            test::TestRequest::patch()
                .uri(&format!("/api/orders/{}", id))
                .set_json(json!({ "status": "shipped" })),
            "Failed to update order",
        ),
    ];

    for (req, message) in cases {
        let resp = test::call_service(&app, req.insert_header(bearer()).to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": message }));
    }
}
