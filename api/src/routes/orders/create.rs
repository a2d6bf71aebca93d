use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::app::AppState;
use crate::dto::order::{CreateOrderRequest, OrderMutationResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;

/// Handler for POST /api/orders
///
/// # Request Body
///
/// ```json
/// {
///     "orderDetails": { "CollectionAddress": { ... }, "ServiceResults": [ ... ] },
///     "totalAmount": 24.99,
///     "serviceType": "Next Day",
///     "carrierName": "DPD"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "message": "Order created successfully", "order": { ... } }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing details, details not an object, negative amount
/// - 401 Unauthorized: Missing or invalid token
/// - 500 Internal Server Error: "Failed to create order"
pub async fn create_order(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<CreateOrderRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .order_service
        .create_order(&auth.user_id, request.into_new_order())
        .await
    {
        Ok(order) => HttpResponse::Created()
            .json(OrderMutationResponse::new("Order created successfully", order)),
        Err(error) => handle_domain_error(error, "Failed to create order"),
    }
}
