//! Maps domain failures onto HTTP responses.
//!
//! Clients only ever receive a `{"message": ...}` body. Client errors carry
//! the domain message; server errors carry a fixed per-operation message and
//! the cause goes to the log.

use actix_web::{error::InternalError, error::JsonPayloadError, HttpRequest, HttpResponse};
use ship_core::errors::DomainError;
use ship_core::services::gate::AUTH_REQUIRED_MESSAGE;
use ship_shared::{error_codes, ErrorResponse, MessageResponse};
use validator::ValidationErrors;

pub const ORDER_NOT_FOUND: &str = "Order not found";

/// Converts a domain error into a response.
///
/// `failure_message` is what the client sees for anything that is not its
/// own fault, e.g. "Failed to fetch orders".
pub fn handle_domain_error(error: DomainError, failure_message: &str) -> HttpResponse {
    match &error {
        DomainError::NotFound { resource } => {
            log::debug!("Not found: {}", resource);
            HttpResponse::NotFound().json(MessageResponse::new(ORDER_NOT_FOUND))
        }
        DomainError::Unauthorized => {
            HttpResponse::Unauthorized().json(MessageResponse::new(AUTH_REQUIRED_MESSAGE))
        }
        DomainError::Validation { .. } | DomainError::Order(_) => {
            log::debug!("Rejected request: {}", error);
            HttpResponse::BadRequest().json(MessageResponse::new(error.to_string()))
        }
        DomainError::Internal { .. } | DomainError::Token(_) => {
            log::error!("{}: {:?}", failure_message, error);
            HttpResponse::InternalServerError().json(MessageResponse::new(failure_message))
        }
    }
}

/// 400 response for DTO validation failures, naming the first offending field
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| errs.iter().map(move |e| (field, e)))
        .map(|(field, e)| match &e.message {
            Some(message) => message.to_string(),
            None => format!("Invalid value for {}", field),
        })
        .next()
        .unwrap_or_else(|| "Invalid request".to_string());

    HttpResponse::BadRequest().json(MessageResponse::new(message))
}

/// Body for JSON payloads that cannot be parsed
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Invalid JSON payload: {}", err);
    let response = HttpResponse::BadRequest().json(MessageResponse::new("Invalid request body"));
    InternalError::from_response(err, response).into()
}

/// Fallback for every unrouted path, pages included
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
