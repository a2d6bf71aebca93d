use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::order::OrderListResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/orders
///
/// Returns the caller's orders, newest `orderDate` first.
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid token
/// - 500 Internal Server Error: "Failed to fetch orders"
pub async fn list_orders(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.order_service.list_orders(&auth.user_id).await {
        Ok(orders) => HttpResponse::Ok().json(OrderListResponse { orders }),
        Err(error) => handle_domain_error(error, "Failed to fetch orders"),
    }
}
