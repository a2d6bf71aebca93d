use actix_web::HttpResponse;

use crate::dto::auth::{MeResponse, SessionUser};
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/auth/me
///
/// The gate has already rejected callers without a valid token, so the
/// context is always present here.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "user": { "id": "507f1f77bcf86cd799439011" } }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid token
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(MeResponse {
        user: SessionUser { id: auth.user_id },
    })
}
