use actix_web::{
    cookie::{time::Duration, Cookie},
    web, HttpResponse,
};

use crate::app::AppState;
use crate::dto::auth::LogoutResponse;
use crate::middleware::auth::OptionalAuth;

/// Handler for POST /api/auth/logout
///
/// Clears the session cookie. Tokens are stateless, so nothing is revoked
/// server side; the call succeeds for signed-out callers too.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "Logged out successfully" }
/// ```
pub async fn logout(state: web::Data<AppState>, auth: OptionalAuth) -> HttpResponse {
    if let OptionalAuth(Some(context)) = &auth {
        log::info!("User {} logged out", context.user_id);
    }

    let cleared = Cookie::build(state.auth_cookie.clone(), "")
        .path("/")
        .http_only(true)
        .max_age(Duration::ZERO)
        .finish();

    HttpResponse::Ok().cookie(cleared).json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    })
}
