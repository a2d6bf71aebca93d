use actix_web::{web, HttpResponse};
use ship_shared::MessageResponse;

use super::parse_order_id;
use crate::app::AppState;
use crate::dto::order::OrderResponse;
use crate::handlers::error::{handle_domain_error, ORDER_NOT_FOUND};
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/orders/{id}
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid token
/// - 404 Not Found: Unknown id, malformed id, or an order owned by someone else
/// - 500 Internal Server Error: "Failed to fetch order"
pub async fn get_order(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse {
    let Some(order_id) = parse_order_id(&path) else {
        return HttpResponse::NotFound().json(MessageResponse::new(ORDER_NOT_FOUND));
    };

    match state.order_service.get_order(&auth.user_id, order_id).await {
        Ok(order) => HttpResponse::Ok().json(OrderResponse { order }),
        Err(error) => handle_domain_error(error, "Failed to fetch order"),
    }
}
