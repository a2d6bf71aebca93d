pub mod auth;
pub mod order;

pub use auth::*;
pub use order::*;
