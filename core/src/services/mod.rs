//! Business services containing domain logic and use cases.

pub mod gate;
pub mod order;
pub mod token;

// Re-export commonly used types
pub use gate::{
    Credentials, GateDecision, GatePolicy, RouteClass, RoutePolicy, SecurityHeaders,
};
pub use order::OrderService;
pub use token::TokenVerifier;
