use actix_web::{web, HttpResponse};
use ship_core::errors::DomainError;
use ship_shared::MessageResponse;

use super::parse_order_id;
use crate::app::AppState;
use crate::dto::order::{OrderMutationResponse, UpdateOrderRequest};
use crate::handlers::error::{handle_domain_error, ORDER_NOT_FOUND};
use crate::middleware::auth::AuthContext;

const FAILURE_MESSAGE: &str = "Failed to update order";

/// Handler for PATCH /api/orders/{id}
///
/// # Request Body
///
/// ```json
/// { "status": "shipped", "trackingNumber": "JD014600006281" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Unknown status, or a change out of delivered/cancelled
/// - 401 Unauthorized: Missing or invalid token
/// - 404 Not Found: Unknown, malformed or foreign order id
/// - 500 Internal Server Error: "Failed to update order"
pub async fn update_order(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
    request: web::Json<UpdateOrderRequest>,
) -> HttpResponse {
    let Some(order_id) = parse_order_id(&path) else {
        return HttpResponse::NotFound().json(MessageResponse::new(ORDER_NOT_FOUND));
    };

    let update = match request.into_inner().into_update() {
        Ok(update) => update,
        Err(error) => return handle_domain_error(DomainError::from(error), FAILURE_MESSAGE),
    };

    match state
        .order_service
        .update_order(&auth.user_id, order_id, update)
        .await
    {
        Ok(order) => {
            HttpResponse::Ok().json(OrderMutationResponse::new("Order updated successfully", order))
        }
        Err(error) => handle_domain_error(error, FAILURE_MESSAGE),
    }
}
